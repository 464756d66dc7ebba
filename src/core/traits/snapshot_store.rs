use crate::core::errors::Result;

/// Port for the single debug snapshot of a raw log retrieval.
///
/// Append-once: nothing in this crate deletes or refreshes a snapshot.
pub trait SnapshotStore: Send + Sync {
    fn exists(&self) -> bool;

    fn read(&self) -> Result<Vec<u8>>;

    fn write(&self, raw_log: &[u8]) -> Result<()>;
}
