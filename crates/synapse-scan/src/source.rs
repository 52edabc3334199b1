//! The seam between the scanner and whatever serves it papers.

use crate::error::ScanError;
use crate::paper::Paper;

/// Papers fetched when the user does not say otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 15;

/// What to ask a source for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Free-text search terms. `None` asks for recent papers in any field.
    pub terms: Option<String>,
    pub max_results: usize,
}

impl Query {
    /// Recent papers, no filter.
    #[must_use]
    pub const fn recent(max_results: usize) -> Self {
        Self {
            terms: None,
            max_results,
        }
    }

    /// Papers matching `terms`. Blank terms behave like [`recent`](Self::recent).
    #[must_use]
    pub fn search(terms: &str, max_results: usize) -> Self {
        let terms = terms.trim();
        Self {
            terms: (!terms.is_empty()).then(|| terms.to_owned()),
            max_results,
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::recent(DEFAULT_MAX_RESULTS)
    }
}

/// Something that can turn a [`Query`] into papers.
pub trait PaperSource {
    /// Host shown to the user, e.g. `arxiv.org`.
    fn domain(&self) -> &str;

    /// Fetch papers. May block on the network.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] on transport, status, or decoding failure.
    fn fetch(&self, query: &Query) -> Result<Vec<Paper>, ScanError>;
}
