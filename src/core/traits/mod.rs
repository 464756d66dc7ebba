pub mod log_renderer;
pub mod log_source;
pub mod snapshot_store;
