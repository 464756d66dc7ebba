use tracing::info;

use crate::core::errors::Result;
use crate::core::models::report_request::ReportRequest;
use crate::core::services::author_summarizer::AuthorSummarizer;
use crate::core::services::log_fetcher::LogFetcher;
use crate::core::traits::log_renderer::LogRenderer;
use crate::core::traits::log_source::LogSource;
use crate::core::traits::snapshot_store::SnapshotStore;

/// The full report pipeline: validate, fetch and render, summarise.
///
/// The only error it returns is `InvalidDateFormat`; in that case no
/// collaborator has been called.
pub struct ReportService<S: LogSource, R: LogRenderer, P: SnapshotStore> {
    pub fetcher: LogFetcher<S, R, P>,
}

impl<S: LogSource, R: LogRenderer, P: SnapshotStore> ReportService<S, R, P> {
    pub fn new(source: S, renderer: R, snapshots: P) -> Self {
        Self {
            fetcher: LogFetcher {
                source,
                renderer,
                snapshots,
            },
        }
    }

    /// Produce the report document for one request.
    pub fn generate(&self, request: &ReportRequest) -> Result<String> {
        let (range, mode) = request.validate()?;
        info!(%range, debug = mode.is_on(), "generating report");

        let document = self.fetcher.fetch_rendered(&range, mode);
        Ok(AuthorSummarizer.summarize(&document))
    }
}
