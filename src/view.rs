use crate::types::DisplayReport;

/// Line appended to the report list when it was rendered from the local
/// cache because the live fetch failed.
pub const OFFLINE_NOTICE: &str = "Showing cached reports (offline)";

/// Presentation seam: the controller talks to the user only through this
/// trait, so the fetch/cache/export logic is testable without a terminal.
pub trait ReportView {
    /// Loading indicator toggle around the analysis request.
    fn set_loading(&mut self, loading: bool);

    /// Shows report text or inline status/error text in the result panel.
    fn show_result(&mut self, text: &str);

    /// Renders the numbered report list; `offline` appends [`OFFLINE_NOTICE`].
    fn show_reports(&mut self, reports: &[DisplayReport], offline: bool);

    /// Blocking user-facing notice for validation and delete failures.
    fn alert(&mut self, message: &str);
}

/// Terminal renderer used by the CLI.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ReportView for ConsoleView {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            println!("Analyzing repository, this can take a while...");
        }
    }

    fn show_result(&mut self, text: &str) {
        println!("{text}");
    }

    fn show_reports(&mut self, reports: &[DisplayReport], offline: bool) {
        if reports.is_empty() {
            println!("No reports yet.");
        }
        for entry in reports {
            println!(
                "{:>3}. {} [{}] (id {})",
                entry.display_id, entry.report.repo_url, entry.report.status, entry.report.id
            );
        }
        if offline {
            println!("{OFFLINE_NOTICE}");
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
