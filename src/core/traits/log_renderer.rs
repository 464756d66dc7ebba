use crate::core::errors::Result;

/// Port for turning a raw structured log into report markup.
///
/// Whatever the layout, implementations must render every entry's author as
/// the literal annotation `(author: <name>)` and close the document with
/// `</body>`. The author summary depends on both.
pub trait LogRenderer: Send + Sync {
    fn render(&self, raw_log: &[u8]) -> Result<String>;

    /// Human-readable name of this renderer (e.g. "native", "xslt").
    fn name(&self) -> &str;
}
