use clap::{Parser, Subcommand};
use repolens::{
    ConsoleView, ExportFormat, LocalStore, ReportApp, ServiceClient, DEFAULT_BASE_URL,
};
use std::path::PathBuf;

/// Command-line client for the repository analysis service.
#[derive(Parser, Debug)]
#[command(name = "repolens", version, about = "Submit repositories for analysis and browse saved reports")]
struct Cli {
    /// Base URL of the analysis service
    #[arg(long, global = true, env = "REPOLENS_SERVICE_URL", default_value = DEFAULT_BASE_URL)]
    service_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a repository and display the report
    Analyze {
        /// Repository URL; defaults to the last analyzed URL
        url: Option<String>,

        /// Also save the report after a successful analysis
        #[arg(long, value_enum)]
        export: Option<ExportFormat>,

        /// Directory for exported files
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// List saved reports (cached copy when the service is unreachable)
    Reports,
    /// Display a single saved report
    Show { id: i64 },
    /// Delete a saved report
    Delete { id: i64 },
    /// Fetch a saved report and save it as report.<ext>
    Export {
        id: i64,

        #[arg(long, value_enum, default_value = "txt")]
        format: ExportFormat,

        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Check that the service is up
    Health,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), repolens::ClientError> {
    let client = ServiceClient::new(&cli.service_url)?;
    let store = LocalStore::open(&cli.service_url);
    let mut app = ReportApp::new(client, store, ConsoleView);

    match cli.command {
        Command::Analyze { url, export, dir } => {
            let url = url.or_else(|| app.last_url()).unwrap_or_default();
            app.analyze(&url);
            if let Some(format) = export {
                app.export_report(format, &dir);
            }
        }
        Command::Reports => app.load_reports(),
        Command::Show { id } => app.show_report(id),
        Command::Delete { id } => app.delete_report(id),
        Command::Export { id, format, dir } => {
            // The report text lives in memory only, so fetch it first.
            app.show_report(id);
            app.export_report(format, &dir);
        }
        Command::Health => app.health(),
    }

    Ok(())
}
