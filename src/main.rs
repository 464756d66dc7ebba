mod adapters;
mod cli;
mod config;
mod core;

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use crate::config::app_config::AppConfig;
use crate::core::errors::ReportError;
use crate::core::models::report_request::ReportRequest;

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let result = AppConfig::discover(args.config.as_deref()).and_then(|config| {
        match &args.command {
            Commands::Report(report) => {
                cli::commands::report::execute(&config, &ReportRequest::from(report))
            }
            Commands::Serve { bind } => cli::commands::serve::execute(&config, bind.as_deref()),
        }
    });

    match result {
        Ok(()) => {}
        // The caller contract: this exact text on stdout, failure status.
        Err(e @ ReportError::InvalidDateFormat) => {
            let mut stdout = std::io::stdout();
            let _ = write!(stdout, "{e}");
            let _ = stdout.flush();
            std::process::exit(1);
        }
        Err(e) => {
            cli::output::error(&format!("Error: {e}"));
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
