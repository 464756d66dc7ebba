use std::fmt::Write as _;

use chrono::DateTime;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::errors::{ReportError, Result};
use crate::core::models::log_entry::LogEntry;
use crate::core::traits::log_renderer::LogRenderer;

/// In-process renderer for `svn log --xml` documents.
///
/// Follows the structure of the bundled XSLT stylesheet (heading, one list
/// item per entry, message lines split by `<br>`) without needing xsltproc.
/// Dates are parsed as RFC 3339 and shown verbatim if that fails, where
/// the stylesheet slices the raw string:
///
/// ```text
/// <li>r1234 2020-01-01 12:30 (author: alice)<br>Fix the build</li>
/// ```
#[derive(Debug, Clone)]
pub struct NativeRenderer {
    title: String,
    message_filter: Option<String>,
}

impl NativeRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message_filter: None,
        }
    }

    /// Keep only entries whose message contains `needle`.
    pub fn with_message_filter(mut self, needle: impl Into<String>) -> Self {
        self.message_filter = Some(needle.into());
        self
    }

    fn render_entries(&self, entries: &[LogEntry]) -> String {
        let title = escape(self.title.as_str());
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{title}</title>");
        html.push_str("</head>\n<body>\n");
        let _ = writeln!(html, "<h1>{title}</h1>");

        if entries.is_empty() {
            html.push_str("<p>No commits in range.</p>\n");
        } else {
            html.push_str("<ul>\n");
            for entry in entries {
                html.push_str(&render_entry(entry));
            }
            html.push_str("</ul>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

impl Default for NativeRenderer {
    fn default() -> Self {
        Self::new("Commit report")
    }
}

impl LogRenderer for NativeRenderer {
    fn render(&self, raw_log: &[u8]) -> Result<String> {
        let mut entries = parse_log(raw_log)?;
        if let Some(needle) = &self.message_filter {
            entries.retain(|e| e.message_contains(needle));
        }
        Ok(self.render_entries(&entries))
    }

    fn name(&self) -> &str {
        "native"
    }
}

fn render_entry(entry: &LogEntry) -> String {
    let author = match &entry.author {
        Some(name) if !name.is_empty() => format!("(author: {})", escape(name.as_str())),
        _ => "(no author)".to_string(),
    };
    let date = entry.date.as_deref().map(format_date).unwrap_or_default();
    let message = escape(entry.message.as_str()).replace('\n', "<br>\n");
    format!(
        "<li>r{} {} {}<br>{}</li>\n",
        escape(entry.revision.as_str()),
        escape(date.as_str()),
        author,
        message
    )
}

/// `2020-01-01T12:30:00.123456Z` becomes `2020-01-01 12:30`; anything
/// unparseable is shown as-is.
fn format_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[derive(Clone, Copy)]
enum Field {
    Author,
    Date,
    Msg,
}

/// Parse an `svn log --xml` document into its entries, in document order.
///
/// Empty input and documents without a `<log>` root are errors, matching
/// what an XSLT processor does with them.
pub fn parse_log(raw: &[u8]) -> Result<Vec<LogEntry>> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Err(ReportError::RenderFailed {
            reason: "empty log document".into(),
        });
    }

    let mut reader = Reader::from_reader(raw);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut entries = Vec::new();
    let mut current: Option<LogEntry> = None;
    let mut field: Option<Field> = None;
    let mut saw_log = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"log" => saw_log = true,
                b"logentry" => current = Some(start_entry(&e)?),
                b"author" => field = Some(Field::Author),
                b"date" => field = Some(Field::Date),
                b"msg" => field = Some(Field::Msg),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"log" => saw_log = true,
                b"logentry" => entries.push(start_entry(&e)?),
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if let (Some(entry), Some(f)) = (current.as_mut(), field) {
                    let text = t.unescape().map_err(|e| ReportError::RenderFailed {
                        reason: format!("bad text in log entry r{}: {e}", entry.revision),
                    })?;
                    match f {
                        Field::Author => entry.author = Some(text.into_owned()),
                        Field::Date => entry.date = Some(text.into_owned()),
                        Field::Msg => entry.message.push_str(&text),
                    }
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"logentry" => entries.extend(current.take()),
                b"author" | b"date" | b"msg" => field = None,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ReportError::RenderFailed {
                    reason: format!(
                        "malformed log XML at byte {}: {e}",
                        reader.buffer_position()
                    ),
                });
            }
            _ => {}
        }
        buf.clear();
    }

    if !saw_log {
        return Err(ReportError::RenderFailed {
            reason: "no <log> element in input".into(),
        });
    }

    Ok(entries)
}

fn start_entry(e: &BytesStart<'_>) -> Result<LogEntry> {
    let revision = e
        .try_get_attribute("revision")
        .map_err(|err| ReportError::RenderFailed {
            reason: format!("bad logentry attribute: {err}"),
        })?
        .map(|attr| {
            attr.unescape_value()
                .map(|v| v.into_owned())
                .unwrap_or_default()
        })
        .unwrap_or_default();
    Ok(LogEntry {
        revision,
        ..LogEntry::default()
    })
}
