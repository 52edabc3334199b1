//! In-place progress line.
//!
//! ```text
//!   arxiv.org/abs/2401.01234v1  ━━━━━━━━────────────────  5/15   33%
//! ```
//!
//! Every call starts with clear-line + carriage return and never writes a
//! newline, so repeated calls animate one row instead of scrolling. The
//! caller ends the row (with a newline or a final status) once done.

use std::io::{self, Write};

use synapse_term::{Attr, OutputBuffer, Viewport};
use synapse_theme::Role;

use crate::decor::{DISPLAY_URL_MAX, truncate_for_display};
use crate::session::Session;

/// Cells in the bar.
pub const BAR_WIDTH: usize = 24;

const FILLED: char = '━';
const EMPTY: char = '─';

/// Position of a run through its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub const fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// `current / total`, clamped to `[0, 1]`. Zero when `total` is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    /// Filled cells: `ratio × BAR_WIDTH`, rounded half to even.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn filled(self) -> usize {
        (self.ratio() * BAR_WIDTH as f64).round_ties_even() as usize
    }

    /// Whole percent, rounded down.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(self) -> u8 {
        (self.ratio() * 100.0).floor() as u8
    }
}

/// Redraw the progress row for `url` at `current` of `total`.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn render<W: Write, V: Viewport>(
    session: &mut Session<W, V>,
    url: &str,
    current: usize,
    total: usize,
) -> io::Result<()> {
    let p = Progress::new(current, total);
    let filled = p.filled();

    let mut out = OutputBuffer::new();
    out.rewind_line()
        .spaces(2)
        .link(url, &truncate_for_display(url, DISPLAY_URL_MAX))
        .spaces(2)
        .fg(session.color(Role::Primary))
        .repeat(FILLED, filled)
        .fg(session.color(Role::Muted))
        .repeat(EMPTY, BAR_WIDTH - filled)
        .reset()
        .spaces(2)
        .attr(Attr::DIM)
        .text(&format!("{current}/{total}  {:>3}%", p.percent()))
        .reset();
    session.commit(&mut out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
