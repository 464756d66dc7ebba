/// Whether a request may reuse or capture the debug snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebugMode {
    #[default]
    Off,
    On,
}

impl DebugMode {
    /// Interpret an optional request value.
    ///
    /// Absent, empty and `"0"` are off; anything else turns debug mode on.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("0") => Self::Off,
            Some(_) => Self::On,
        }
    }

    pub fn is_on(self) -> bool {
        self == Self::On
    }
}
