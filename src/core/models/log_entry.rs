/// One `<logentry>` of an `svn log --xml` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntry {
    pub revision: String,
    /// Absent for commits made without an authenticated user.
    pub author: Option<String>,
    /// ISO 8601 as emitted by svn, e.g. `2020-01-01T12:30:00.123456Z`.
    pub date: Option<String>,
    pub message: String,
}

impl LogEntry {
    /// Whether the commit message contains `needle`.
    pub fn message_contains(&self, needle: &str) -> bool {
        self.message.contains(needle)
    }
}
