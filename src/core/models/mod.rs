pub mod author_tally;
pub mod debug_mode;
pub mod log_entry;
pub mod report_request;
pub mod time_range;
