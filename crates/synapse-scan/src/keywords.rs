//! Keyword frequency counting.

use std::collections::HashMap;

use crate::paper::{Paper, count_term};

/// Notable keywords, as displayed. Matching uses the lowercased form.
pub const KEYWORDS: [&str; 17] = [
    "quantum",
    "entanglement",
    "superposition",
    "metamaterial",
    "neural",
    "AI",
    "machine learning",
    "photon",
    "laser",
    "gravitational",
    "time crystal",
    "topology",
    "spin",
    "lattice",
    "superconductor",
    "plasma",
    "dark matter",
];

/// Keyword → occurrence count. Keywords that never occurred are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFrequency {
    counts: HashMap<String, usize>,
}

impl KeywordFrequency {
    /// An empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every [`KEYWORDS`] entry across the title and summary of
    /// every paper.
    #[must_use]
    pub fn from_papers(papers: &[Paper]) -> Self {
        let needles: Vec<(&str, String)> =
            KEYWORDS.iter().map(|k| (*k, k.to_lowercase())).collect();

        let mut freq = Self::new();
        for paper in papers {
            let text = paper.searchable_text();
            for (label, needle) in &needles {
                freq.add(label, count_term(&text, needle));
            }
        }
        freq
    }

    /// Add `n` occurrences of `keyword`. Adding zero leaves it absent.
    pub fn add(&mut self, keyword: &str, n: usize) {
        if n > 0 {
            *self.counts.entry(keyword.to_owned()).or_insert(0) += n;
        }
    }

    #[cfg(test)]
    fn get(&self, keyword: &str) -> usize {
        self.counts.get(keyword).copied().unwrap_or(0)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no keyword occurred.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Highest count over the whole mapping (zero when empty).
    #[must_use]
    pub fn peak(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// The `limit` most frequent keywords, highest count first.
    ///
    /// Ties are broken alphabetically so output is stable across runs.
    #[must_use]
    pub fn top(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut items: Vec<(&str, usize)> =
            self.counts.iter().map(|(k, &n)| (k.as_str(), n)).collect();
        items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        items.truncate(limit);
        items
    }
}

impl<K: Into<String>> FromIterator<(K, usize)> for KeywordFrequency {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        let mut freq = Self::new();
        for (k, n) in iter {
            freq.add(&k.into(), n);
        }
        freq
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_across_papers() {
        let papers = [
            Paper::new("Laser cooling", "laser-driven spin lattice", "u", "d"),
            Paper::new("Spin waves", "AI-assisted lattice search", "u", "d"),
        ];
        let freq = KeywordFrequency::from_papers(&papers);
        assert_eq!(freq.get("laser"), 2);
        assert_eq!(freq.get("spin"), 2);
        assert_eq!(freq.get("lattice"), 2);
        assert_eq!(freq.get("AI"), 1);
        assert_eq!(freq.get("plasma"), 0);
        assert_eq!(freq.len(), 4);
    }

    #[test]
    fn zero_counts_stay_absent() {
        let mut freq = KeywordFrequency::new();
        freq.add("photon", 0);
        assert!(freq.is_empty());
    }

    #[test]
    fn peak_over_full_mapping() {
        let freq: KeywordFrequency = [("a", 3), ("b", 9), ("c", 1)].into_iter().collect();
        assert_eq!(freq.peak(), 9);
        assert_eq!(KeywordFrequency::new().peak(), 0);
    }

    #[test]
    fn top_sorts_desc_and_truncates() {
        let freq: KeywordFrequency =
            [("a", 1), ("b", 5), ("c", 3), ("d", 5), ("e", 2)].into_iter().collect();
        assert_eq!(freq.top(3), vec![("b", 5), ("d", 5), ("c", 3)]);
        assert_eq!(freq.top(10).len(), 5);
        assert!(freq.top(0).is_empty());
    }

    #[test]
    fn from_iter_merges_repeats() {
        let freq: KeywordFrequency = [("spin", 2), ("spin", 3)].into_iter().collect();
        assert_eq!(freq.get("spin"), 5);
    }
}
