use serde::Deserialize;

use crate::core::errors::Result;
use crate::core::models::debug_mode::DebugMode;
use crate::core::models::time_range::TimeRange;

/// Raw parameters of one report request, as supplied by the caller.
///
/// Missing `from`/`to` are treated as empty strings and fail validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub debug: Option<String>,
}

impl ReportRequest {
    /// Validate the request into a time range and a debug flag.
    pub fn validate(&self) -> Result<(TimeRange, DebugMode)> {
        let range = TimeRange::parse(
            self.from.as_deref().unwrap_or(""),
            self.to.as_deref().unwrap_or(""),
        )?;
        Ok((range, DebugMode::from_param(self.debug.as_deref())))
    }
}
