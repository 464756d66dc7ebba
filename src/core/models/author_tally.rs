use std::collections::HashMap;

/// Commit counts per author, in the order authors were first seen.
///
/// Names are compared exactly (case-sensitive, no trimming).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorTally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl AuthorTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one commit for `author`.
    pub fn record(&mut self, author: &str) {
        match self.index.get(author) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(author.to_string(), self.counts.len());
                self.counts.push((author.to_string(), 1));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct authors.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `(author, count)` pairs in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, n)| (name.as_str(), *n))
    }

    /// Render as `<p>Author summary: alice: 2; bob: 1</p>`.
    pub fn summary_fragment(&self) -> String {
        let parts: Vec<String> = self
            .entries()
            .map(|(name, n)| format!("{name}: {n}"))
            .collect();
        format!("<p>Author summary: {}</p>", parts.join("; "))
    }
}

impl<'a> FromIterator<&'a str> for AuthorTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Self::new();
        for author in iter {
            tally.record(author);
        }
        tally
    }
}
