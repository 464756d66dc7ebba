use tracing::{debug, warn};

use crate::core::models::debug_mode::DebugMode;
use crate::core::models::time_range::TimeRange;
use crate::core::traits::log_renderer::LogRenderer;
use crate::core::traits::log_source::LogSource;
use crate::core::traits::snapshot_store::SnapshotStore;

/// Retrieves the raw log for a range and renders it, optionally going
/// through the debug snapshot.
///
/// Retrieval and rendering never fail the request: any collaborator error
/// is logged and the stage degrades to empty output.
pub struct LogFetcher<S: LogSource, R: LogRenderer, P: SnapshotStore> {
    pub source: S,
    pub renderer: R,
    pub snapshots: P,
}

impl<S: LogSource, R: LogRenderer, P: SnapshotStore> LogFetcher<S, R, P> {
    /// Fetch and render the log for `range`.
    ///
    /// With debug on, an existing snapshot replaces retrieval entirely; a
    /// missing one is populated from this retrieval. With debug off the
    /// snapshot is never touched.
    pub fn fetch_rendered(&self, range: &TimeRange, mode: DebugMode) -> String {
        let raw = self.retrieve(range, mode);
        match self.renderer.render(&raw) {
            Ok(document) => document,
            Err(e) => {
                warn!(renderer = self.renderer.name(), error = %e, "render failed, returning empty document");
                String::new()
            }
        }
    }

    /// Produce the raw log that will be handed to the renderer.
    pub fn retrieve(&self, range: &TimeRange, mode: DebugMode) -> Vec<u8> {
        if mode.is_on() && self.snapshots.exists() {
            debug!("debug snapshot present, skipping retrieval");
            return self.snapshots.read().unwrap_or_else(|e| {
                warn!(error = %e, "could not read debug snapshot");
                Vec::new()
            });
        }

        debug!(source = self.source.name(), %range, "retrieving log");
        let raw = match self.source.fetch(range) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "log retrieval failed");
                return Vec::new();
            }
        };

        if mode.is_on() {
            debug!(bytes = raw.len(), "capturing debug snapshot");
            if let Err(e) = self.snapshots.write(&raw) {
                warn!(error = %e, "could not write debug snapshot");
            }
        }

        raw
    }
}
