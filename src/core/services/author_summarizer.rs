use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::core::models::author_tally::AuthorTally;

static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(author: ([^)]+)\)").expect("author pattern is valid"));

/// Marker the summary is inserted in front of.
pub const BODY_CLOSE: &str = "</body>";

/// Opening text of an injected summary; used to recognise already
/// summarised documents.
const SUMMARY_PREFIX: &str = "<p>Author summary: ";

/// Counts `(author: <name>)` annotations and injects a per-author summary.
pub struct AuthorSummarizer;

impl AuthorSummarizer {
    /// Tally every annotation in `document`, in document order.
    pub fn tally(&self, document: &str) -> AuthorTally {
        AUTHOR_RE
            .captures_iter(document)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Insert the summary before the first `</body>`.
    ///
    /// Returns the document unchanged when it has no annotations, no closing
    /// body marker, or already carries a summary.
    pub fn summarize(&self, document: &str) -> String {
        if document.contains(SUMMARY_PREFIX) {
            return document.to_string();
        }

        let tally = self.tally(document);
        if tally.is_empty() {
            return document.to_string();
        }

        let Some(pos) = document.find(BODY_CLOSE) else {
            return document.to_string();
        };

        debug!(authors = tally.len(), "injecting author summary");
        let fragment = tally.summary_fragment();
        let mut out = String::with_capacity(document.len() + fragment.len());
        out.push_str(&document[..pos]);
        out.push_str(&fragment);
        out.push_str(&document[pos..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<html><body>\
        <li>r1 (author: alice) fix</li>\
        <li>r2 (author: bob) feat</li>\
        <li>r3 (author: alice) docs</li>\
        </body></html>";

    #[test]
    fn injects_summary_before_body_close() {
        let out = AuthorSummarizer.summarize(DOC);
        assert!(out.ends_with("<p>Author summary: alice: 2; bob: 1</p></body></html>"));
        assert_eq!(out.len(), DOC.len() + "<p>Author summary: alice: 2; bob: 1</p>".len());
    }

    #[test]
    fn order_is_first_seen_not_by_count() {
        let doc = "(author: zed)(author: amy)(author: amy)(author: amy)</body>";
        let out = AuthorSummarizer.summarize(doc);
        assert!(out.contains("<p>Author summary: zed: 1; amy: 3</p></body>"));
    }

    #[test]
    fn no_annotations_leaves_document_unchanged() {
        let doc = "<html><body><p>No commits in range.</p></body></html>";
        assert_eq!(AuthorSummarizer.summarize(doc), doc);
    }

    #[test]
    fn empty_document_stays_empty() {
        assert_eq!(AuthorSummarizer.summarize(""), "");
    }

    #[test]
    fn only_first_body_close_gets_summary() {
        let doc = "(author: a)</body>middle</body>";
        let out = AuthorSummarizer.summarize(doc);
        assert_eq!(out, "(author: a)<p>Author summary: a: 1</p></body>middle</body>");
    }

    #[test]
    fn missing_body_close_leaves_document_unchanged() {
        let doc = "(author: a) but no closing marker";
        assert_eq!(AuthorSummarizer.summarize(doc), doc);
    }

    #[test]
    fn applying_twice_does_not_double_the_summary() {
        let once = AuthorSummarizer.summarize(DOC);
        let twice = AuthorSummarizer.summarize(&once);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("Author summary").count(), 1);
    }

    #[test]
    fn summary_text_is_not_an_annotation() {
        let once = AuthorSummarizer.summarize(DOC);
        assert_eq!(AuthorSummarizer.tally(&once), AuthorSummarizer.tally(DOC));
    }

    #[test]
    fn names_are_matched_up_to_closing_paren() {
        let tally = AuthorSummarizer.tally("(author: Jane Doe)(author: )(author: x(y))");
        let entries: Vec<_> = tally.entries().collect();
        // "(author: )" has an empty name and does not match.
        assert_eq!(entries, vec![("Jane Doe", 1), ("x(y", 1)]);
    }
}
