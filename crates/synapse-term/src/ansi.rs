// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit — that's the renderers' job. This module
// just knows the byte-level encoding of every terminal command we need.
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to `OutputBuffer` (backed by a Vec).
use std::io::{self, Write};

use crate::color::Rgb;
use crate::style::Attr;

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

/// Move the cursor to the top-left corner (CUP with no arguments).
#[inline]
pub fn cursor_home(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[H")
}

/// Return the cursor to column 0 of the current line.
#[inline]
pub fn carriage_return(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\r")
}

// ─── Erase ───────────────────────────────────────────────────────────────────

/// Clear from the cursor to the end of the screen (ED 0).
#[inline]
pub fn clear_below(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[J")
}

/// Clear the entire current line (EL 2). The cursor does not move.
#[inline]
pub fn clear_line(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2K")
}

// ─── SGR ─────────────────────────────────────────────────────────────────────

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set the foreground color as 24-bit `TrueColor` (SGR 38;2).
///
/// There is intentionally no palette fallback: gradients are only legible
/// at full depth.
#[inline]
pub fn fg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Emit SGR codes for text attributes as a single CSI sequence.
///
/// Multiple attributes are semicolon-separated: `\x1b[1;3m` for
/// bold + italic. Does nothing if no attributes are set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let codes: Vec<&str> = [(Attr::BOLD, "1"), (Attr::DIM, "2"), (Attr::ITALIC, "3")]
        .into_iter()
        .filter(|(flag, _)| attr.contains(*flag))
        .map(|(_, code)| code)
        .collect();

    write!(w, "\x1b[{}m", codes.join(";"))
}

// ─── Hyperlinks (OSC 8) ──────────────────────────────────────────────────────

/// Open an OSC-8 hyperlink to `url`. Text written until [`link_close`]
/// becomes clickable in terminals that support it; others print it plainly.
#[inline]
pub fn link_open(w: &mut impl Write, url: &str) -> io::Result<()> {
    write!(w, "\x1b]8;;{url}\x1b\\")
}

/// Close the currently open OSC-8 hyperlink.
#[inline]
pub fn link_close(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b]8;;\x1b\\")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
