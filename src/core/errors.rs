use std::path::PathBuf;

/// All domain errors for commit-report.
///
/// Only `InvalidDateFormat` is ever shown to a report caller. Collaborator
/// failures are logged by the pipeline and degrade to an empty document.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Either timestamp did not match `YYYY-MM-DD HH:MM:SS`.
    ///
    /// The message is part of the response contract; keep it byte-exact.
    #[error("Invalid date format")]
    InvalidDateFormat,

    #[error(
        "Log retrieval failed: {reason}\n\n  \
         Check the [repository] section of your config file and that\n  \
         the svn client is installed and can reach the server."
    )]
    LogSourceFailed { reason: String },

    #[error(
        "Rendering failed: {reason}\n\n  \
         The log could not be turned into a report. With backend = \"xslt\",\n  \
         check that xsltproc is installed and the stylesheet path is correct."
    )]
    RenderFailed { reason: String },

    #[error("Debug snapshot error at {path}: {reason}")]
    SnapshotFailed { path: PathBuf, reason: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Server error: {reason}\n\n  \
         Check that the bind address is valid and not already in use."
    )]
    ServerFailed { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;
