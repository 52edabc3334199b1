//! Breakthrough patterns — the closed set of things the scanner looks for.
//!
//! Each [`Pattern`] variant carries everything about itself: display name,
//! the bench experiment it suggests, a cost and difficulty label, and the
//! trigger terms that detect it. Adding a pattern means adding a variant,
//! and every exhaustive `match` downstream (icons, explanations) fails to
//! compile until it is handled.

use crate::paper::{Paper, count_term};

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// A category of research breakthrough with a low-cost bench analogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pattern {
    QuantumBreakthrough,
    MetamaterialLens,
    TemporalPeriodicity,
    AiPhysics,
}

impl Pattern {
    /// Every pattern, in detection order.
    pub const ALL: [Self; 4] = [
        Self::QuantumBreakthrough,
        Self::MetamaterialLens,
        Self::TemporalPeriodicity,
        Self::AiPhysics,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::QuantumBreakthrough => "Quantum breakthrough",
            Self::MetamaterialLens => "Metamaterial lens",
            Self::TemporalPeriodicity => "Temporal periodicity",
            Self::AiPhysics => "AI physics",
        }
    }

    /// One-line experiment suggestion.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::QuantumBreakthrough => "Test quantum erasure with polarized lenses & laser pointer",
            Self::MetamaterialLens => "Stack microscope slides + oil for negative index demo",
            Self::TemporalPeriodicity => "555 timer + LED at 1 Hz, observe after-image",
            Self::AiPhysics => "Train tiny model on physics data, predict pendulum motion",
        }
    }

    /// Rough cost of the suggested experiment.
    #[must_use]
    pub const fn cost(self) -> &'static str {
        match self {
            Self::QuantumBreakthrough => "~$30",
            Self::MetamaterialLens => "~$20",
            Self::TemporalPeriodicity => "~$5",
            Self::AiPhysics => "~$0 (laptop)",
        }
    }

    /// How hard the suggested experiment is.
    #[must_use]
    pub const fn difficulty(self) -> &'static str {
        match self {
            Self::QuantumBreakthrough | Self::MetamaterialLens | Self::TemporalPeriodicity => {
                "Easy"
            }
            Self::AiPhysics => "Research",
        }
    }

    /// Lowercase terms whose presence in a paper signals this pattern.
    #[must_use]
    pub const fn triggers(self) -> &'static [&'static str] {
        match self {
            Self::QuantumBreakthrough => &["quantum", "entanglement", "superposition"],
            Self::MetamaterialLens => &["metamaterial", "negative index"],
            Self::TemporalPeriodicity => &["time crystal", "temporal", "periodic"],
            Self::AiPhysics => &["neural", "ai", "machine learning"],
        }
    }

    /// Whether any trigger occurs in `text` (already lowercase).
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        self.triggers().iter().any(|term| count_term(text, term) > 0)
    }
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// One detection of a pattern in one paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovery {
    pub pattern: Pattern,
    pub hint: &'static str,
    pub cost: &'static str,
    pub difficulty: &'static str,
}

impl Discovery {
    /// The pattern's display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.pattern.name()
    }
}

impl From<Pattern> for Discovery {
    fn from(pattern: Pattern) -> Self {
        Self {
            pattern,
            hint: pattern.hint(),
            cost: pattern.cost(),
            difficulty: pattern.difficulty(),
        }
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Scan every paper for every pattern.
///
/// Papers are visited in order and, within a paper, patterns in
/// [`Pattern::ALL`] order. A pattern found in three papers yields three
/// discoveries; deduplication is left to the caller.
#[must_use]
pub fn detect(papers: &[Paper]) -> Vec<Discovery> {
    let mut found = Vec::new();
    for paper in papers {
        let text = paper.searchable_text();
        found.extend(
            Pattern::ALL
                .into_iter()
                .filter(|p| p.matches(&text))
                .map(Discovery::from),
        );
    }
    tracing::debug!(papers = papers.len(), discoveries = found.len(), "pattern detection");
    found
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
