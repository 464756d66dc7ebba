use std::io::Write;

use crate::cli::commands::pipeline;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::report_request::ReportRequest;

/// Execute the `commit-report report` command.
///
/// Writes the report document to stdout exactly as produced, including
/// an empty document when retrieval or rendering failed.
pub fn execute(config: &AppConfig, request: &ReportRequest) -> Result<()> {
    let service = pipeline::build_service(config);
    let document = service.generate(request)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
