use crate::core::errors::Result;
use crate::core::models::time_range::TimeRange;

/// Port for retrieving the raw structured commit log of a time range.
///
/// Implementations live in `adapters::svn`. Credentials and the repository
/// address are fixed at construction, never passed per call.
pub trait LogSource: Send + Sync {
    /// Return the raw log document (e.g. `svn log --xml` output).
    fn fetch(&self, range: &TimeRange) -> Result<Vec<u8>>;

    /// Human-readable name of this source (e.g. "svn").
    fn name(&self) -> &str;
}
