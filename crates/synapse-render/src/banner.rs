//! Startup banner: a rounded box whose border sweeps from the primary to
//! the secondary theme color, centered on the terminal.
//!
//! ```text
//!                  ╭───────────────────────────────────╮
//!                  │       SynapseScanner v0.1.0       │
//!                  │   Quantum Research Intelligence   │
//!                  ╰───────────────────────────────────╯
//! ```

use std::io::{self, Write};

use synapse_term::color::sweep_position;
use synapse_term::{Attr, OutputBuffer, Viewport};
use synapse_theme::Role;

use crate::decor::display_width;
use crate::session::Session;

/// Default banner title.
pub const TITLE: &str = concat!("SynapseScanner v", env!("CARGO_PKG_VERSION"));

/// Default banner subtitle.
pub const SUBTITLE: &str = "Quantum Research Intelligence";

/// Columns added around the longer of title and subtitle.
const PADDING: usize = 6;

/// Inner width of the box (between the side borders).
#[must_use]
pub fn inner_width(title: &str, subtitle: &str) -> usize {
    display_width(title).max(display_width(subtitle)) + PADDING
}

/// Spaces left of the box so it sits centered in `columns`. Never negative.
#[must_use]
pub const fn left_pad(columns: usize, inner: usize) -> usize {
    columns.saturating_sub(inner + 2) / 2
}

/// Draw the default banner.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn render<W: Write, V: Viewport>(session: &mut Session<W, V>) -> io::Result<()> {
    render_with(session, TITLE, SUBTITLE)
}

/// Draw a banner with custom text.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn render_with<W: Write, V: Viewport>(
    session: &mut Session<W, V>,
    title: &str,
    subtitle: &str,
) -> io::Result<()> {
    let inner = inner_width(title, subtitle);
    let pad = left_pad(session.columns(), inner);

    let mut out = OutputBuffer::new();
    out.newline();

    out.spaces(pad);
    gradient_border(session, &mut out, '╭', '─', '╮', inner);
    out.newline();

    out.spaces(pad);
    centered_row(session, &mut out, title, Attr::BOLD, inner);
    out.newline();

    out.spaces(pad);
    centered_row(session, &mut out, subtitle, Attr::DIM, inner);
    out.newline();

    out.spaces(pad);
    gradient_border(session, &mut out, '╰', '─', '╯', inner);
    out.newline().newline();

    session.commit(&mut out)
}

/// `left + fill × inner + right`, each character colored by its position
/// along the primary → secondary sweep.
fn gradient_border<W: Write, V: Viewport>(
    session: &Session<W, V>,
    out: &mut OutputBuffer,
    left: char,
    fill: char,
    right: char,
    inner: usize,
) {
    let len = inner + 2;
    let theme = session.theme();
    for i in 0..len {
        let ch = if i == 0 {
            left
        } else if i == len - 1 {
            right
        } else {
            fill
        };
        out.fg(theme.gradient(sweep_position(i, len))).ch(ch);
    }
    out.reset();
}

/// `│ text │` with text centered in `inner` columns. The left bar takes the
/// primary color and the right bar the secondary, matching the sweep.
fn centered_row<W: Write, V: Viewport>(
    session: &Session<W, V>,
    out: &mut OutputBuffer,
    text: &str,
    attr: Attr,
    inner: usize,
) {
    let gap = inner.saturating_sub(display_width(text));
    let left = gap / 2;
    let right = gap - left;

    out.fg(session.color(Role::Primary)).ch('│').reset();
    out.attr(attr).spaces(left).text(text).spaces(right).reset();
    out.fg(session.color(Role::Secondary)).ch('│').reset();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
