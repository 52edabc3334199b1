//! Keyword strip with braille intensity glyphs.
//!
//! ```text
//!   keywords  quantum ⣿⣿⣿  neural ⣶⣶⣶  laser ⣀⣀⣀
//! ```

use std::io::{self, Write};

use synapse_scan::KeywordFrequency;
use synapse_term::{Attr, OutputBuffer, Viewport};

use crate::session::Session;

/// Intensity glyphs, emptiest first.
pub const GLYPHS: [char; 8] = [' ', '⣀', '⣄', '⣤', '⣦', '⣶', '⣷', '⣿'];

/// Keywords shown when the caller has no preference.
pub const DEFAULT_LIMIT: usize = 6;

const REPEAT: usize = 3;

/// Share of the peak, in `[0, 1]`. Zero when `peak` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn intensity(freq: usize, peak: usize) -> f64 {
    if peak == 0 {
        return 0.0;
    }
    (freq as f64 / peak as f64).min(1.0)
}

/// Glyph index for `freq` against `peak`.
///
/// Any positive frequency gets at least level 1 so it never draws blank.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn level(freq: usize, peak: usize) -> usize {
    if freq == 0 {
        return 0;
    }
    let top = GLYPHS.len() - 1;
    let raw = (intensity(freq, peak) * top as f64).floor() as usize;
    raw.clamp(1, top)
}

/// Draw the top `limit` keywords. Draws nothing for an empty mapping.
///
/// Intensity is measured against the peak of the whole mapping, not just
/// the keywords shown.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn render<W: Write, V: Viewport>(
    session: &mut Session<W, V>,
    freq: &KeywordFrequency,
    limit: usize,
) -> io::Result<()> {
    if freq.is_empty() {
        return Ok(());
    }
    let peak = freq.peak();

    let mut out = OutputBuffer::new();
    out.newline()
        .spaces(2)
        .attr(Attr::DIM)
        .text("keywords")
        .reset()
        .spaces(2);

    for (word, n) in freq.top(limit) {
        let t = intensity(n, peak);
        out.fg(session.theme().gradient(t))
            .text(word)
            .reset()
            .ch(' ')
            .attr(Attr::DIM)
            .repeat(GLYPHS[level(n, peak)], REPEAT)
            .reset()
            .spaces(2);
    }
    out.newline();
    session.commit(&mut out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
