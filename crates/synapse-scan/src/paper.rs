//! Paper records.

/// One paper as returned by a [`PaperSource`](crate::PaperSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    pub title: String,
    pub summary: String,
    /// Canonical landing page; rendered as a clickable link.
    pub url: String,
    /// Host the paper came from, e.g. `arxiv.org`.
    pub domain: String,
}

impl Paper {
    /// Build a paper from its four fields.
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        url: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            url: url.into(),
            domain: domain.into(),
        }
    }

    /// Title and summary joined by a space, lowercased.
    ///
    /// This is the text pattern detection and keyword counting look at.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let mut text = String::with_capacity(self.title.len() + self.summary.len() + 1);
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.summary);
        text.to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// Text matching
// ---------------------------------------------------------------------------

/// Count occurrences of `term` (already lowercase) in `text` (already
/// lowercase).
///
/// Terms of two characters or fewer only count as whole words, so `ai`
/// matches "ai models" but not "said". Longer terms count as
/// non-overlapping substrings, so `spin` also counts inside "spintronics".
pub(crate) fn count_term(text: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    if term.chars().count() <= 2 {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|word| *word == term)
            .count()
    } else {
        text.matches(term).count()
    }
}
