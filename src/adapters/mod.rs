pub mod process;
pub mod renderers;
pub mod snapshots;
pub mod svn;
