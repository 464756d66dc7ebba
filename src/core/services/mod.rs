pub mod author_summarizer;
pub mod log_fetcher;
pub mod report_service;
