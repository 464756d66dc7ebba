use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::{ReportError, Result};

/// Full-string timestamp pattern. Only ASCII digits, dashes, colons and one
/// space can pass. `\d` would also admit non-ASCII digits, hence `[0-9]`.
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$")
        .expect("timestamp pattern is valid")
});

/// Validated start/end timestamps bounding a commit-log query.
///
/// No ordering check is made between `from` and `to`; an inverted range is
/// passed through and the log source decides what to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    from: String,
    to: String,
}

impl TimeRange {
    /// Build a range from two raw request values.
    ///
    /// Fails with `InvalidDateFormat` if either value is not exactly
    /// `YYYY-MM-DD HH:MM:SS`.
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        if !is_timestamp(from) || !is_timestamp(to) {
            return Err(ReportError::InvalidDateFormat);
        }
        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// Revision-range expression understood by `svn log -r`, e.g.
    /// `{2020-01-01 00:00:00}:{2020-01-02 00:00:00}`.
    pub fn revision_range(&self) -> String {
        format!("{{{}}}:{{{}}}", self.from, self.to)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.from(), self.to())
    }
}

/// Whether `s` is a timestamp in the accepted format.
pub fn is_timestamp(s: &str) -> bool {
    TIMESTAMP_RE.is_match(s)
}
