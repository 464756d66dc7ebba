pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::models::report_request::ReportRequest;

/// Turn a window of Subversion history into an HTML report with a
/// per-author summary.
#[derive(Parser, Debug)]
#[command(name = "commit-report", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (default: ./commit-report.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the report for a time window and print it to stdout
    Report(ReportArgs),

    /// Serve reports over HTTP at GET /report
    Serve {
        /// Address to listen on (overrides [server] bind)
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Arguments of `commit-report report`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Start of the window, "YYYY-MM-DD HH:MM:SS"
    #[arg(long)]
    pub from: Option<String>,
    /// End of the window, "YYYY-MM-DD HH:MM:SS"
    #[arg(long)]
    pub to: Option<String>,
    /// Reuse the debug snapshot, or capture it if absent ("0" disables)
    #[arg(long, num_args = 0..=1, default_missing_value = "1")]
    pub debug: Option<String>,
}

impl From<&ReportArgs> for ReportRequest {
    fn from(args: &ReportArgs) -> Self {
        Self {
            from: args.from.clone(),
            to: args.to.clone(),
            debug: args.debug.clone(),
        }
    }
}
