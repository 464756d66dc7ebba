pub mod svn_log_source;
