pub mod pipeline;
pub mod report;
pub mod serve;
