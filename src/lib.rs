pub mod app;
pub mod client;
pub mod error;
pub mod export;
pub mod storage;
pub mod types;
pub mod view;

pub use app::*;
pub use client::*;
pub use error::*;
pub use export::*;
pub use storage::*;
pub use types::*;
pub use view::*;
