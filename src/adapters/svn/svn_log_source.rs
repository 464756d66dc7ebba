use std::fmt;
use std::path::PathBuf;

use crate::adapters::process;
use crate::core::errors::{ReportError, Result};
use crate::core::models::time_range::TimeRange;
use crate::core::traits::log_source::LogSource;

/// Service account used for every log query.
#[derive(Clone, PartialEq, Eq)]
pub struct SvnCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SvnCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvnCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Log source that shells out to the system `svn` client.
///
/// Runs `svn log --xml` non-interactively against a fixed repository URL.
/// Arguments are passed as a vector, never through a shell.
#[derive(Debug, Clone)]
pub struct SvnLogSource {
    /// Path to the svn binary (defaults to "svn").
    svn_path: PathBuf,
    url: String,
    credentials: SvnCredentials,
}

impl SvnLogSource {
    pub fn new(url: impl Into<String>, credentials: SvnCredentials) -> Self {
        Self {
            svn_path: PathBuf::from("svn"),
            url: url.into(),
            credentials,
        }
    }

    /// Use a custom svn binary.
    pub fn with_path(mut self, svn_path: PathBuf) -> Self {
        self.svn_path = svn_path;
        self
    }

    /// Arguments for one `svn log` invocation over `range`.
    pub fn args(&self, range: &TimeRange) -> Vec<String> {
        vec![
            "--username".into(),
            self.credentials.username.clone(),
            "--password".into(),
            self.credentials.password.clone(),
            "--non-interactive".into(),
            "log".into(),
            "--xml".into(),
            "-r".into(),
            range.revision_range(),
            self.url.clone(),
        ]
    }
}

impl LogSource for SvnLogSource {
    fn fetch(&self, range: &TimeRange) -> Result<Vec<u8>> {
        process::run(&self.svn_path, self.args(range), None)
            .map_err(|reason| ReportError::LogSourceFailed { reason })
    }

    fn name(&self) -> &str {
        "svn"
    }
}
