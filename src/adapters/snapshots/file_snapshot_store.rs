use std::path::{Path, PathBuf};

use crate::core::errors::{ReportError, Result};
use crate::core::traits::snapshot_store::SnapshotStore;

/// Debug snapshot kept in a single plain file.
///
/// Once written, the file is reused by every debug run until someone
/// deletes it.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default location in the system temp directory.
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join("commit-report_debug_svn-log.xml")
    }

    fn failed(&self, e: std::io::Error) -> ReportError {
        ReportError::SnapshotFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| self.failed(e))
    }

    fn write(&self, raw_log: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.failed(e))?;
        }
        std::fs::write(&self.path, raw_log).map_err(|e| self.failed(e))
    }
}
