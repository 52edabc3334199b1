//! # synapse-scan — where the scanner's data comes from
//!
//! Everything upstream of the terminal: fetching papers, spotting
//! breakthrough patterns in them, and counting notable keywords.
//!
//! - **[`paper`]** — `Paper` records as returned by a source
//! - **[`source`]** — the `PaperSource` seam and its `Query`
//! - **[`arxiv`]** — blocking arXiv Atom client (`ArxivClient`)
//! - **[`pattern`]** — the closed `Pattern` set and `detect`
//! - **[`keywords`]** — `KeywordFrequency` counting
//! - **[`error`]** — `ScanError`
//!
//! The renderer only ever sees the outputs: a `Vec<Discovery>` (with
//! duplicates, in detection order) and a `KeywordFrequency`.

pub mod arxiv;
pub mod error;
pub mod keywords;
pub mod paper;
pub mod pattern;
pub mod source;

pub use arxiv::ArxivClient;
pub use error::ScanError;
pub use keywords::KeywordFrequency;
pub use paper::Paper;
pub use pattern::{Discovery, Pattern, detect};
pub use source::{PaperSource, Query};
