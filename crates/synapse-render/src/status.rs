//! Status lines.
//!
//! A *pending* line is written with no line ending, so the cursor stays at
//! its end and the next write can take the line over. A *final* line clears
//! whatever is on the current row first, then ends with a newline.

use std::io::{self, Write};

use synapse_term::{OutputBuffer, Viewport};
use synapse_theme::Role;

use crate::session::Session;

/// Outcome class of a status line: picks the icon and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Ok,
    Err,
    Warn,
    /// Anything else. Muted bullet.
    Note,
}

impl StatusKind {
    /// Look up a kind by its short key (`info`, `ok`, `err`, `wrn`).
    /// Unknown keys map to [`StatusKind::Note`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "info" => Self::Info,
            "ok" => Self::Ok,
            "err" => Self::Err,
            "wrn" => Self::Warn,
            _ => Self::Note,
        }
    }

    #[must_use]
    pub const fn icon(self) -> char {
        match self {
            Self::Info => '◌',
            Self::Ok => '✔',
            Self::Err => '✘',
            Self::Warn => '▲',
            Self::Note => '●',
        }
    }

    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::Info => Role::Primary,
            Self::Ok => Role::Ok,
            Self::Err => Role::Error,
            Self::Warn => Role::Warning,
            Self::Note => Role::Muted,
        }
    }
}

fn line<W: Write, V: Viewport>(
    session: &Session<W, V>,
    out: &mut OutputBuffer,
    kind: StatusKind,
    msg: &str,
) {
    out.spaces(2)
        .fg(session.color(kind.role()))
        .ch(kind.icon())
        .reset()
        .ch(' ')
        .text(msg);
}

/// Write `msg` in place, without a carriage return or newline.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn pending<W: Write, V: Viewport>(
    session: &mut Session<W, V>,
    kind: StatusKind,
    msg: &str,
) -> io::Result<()> {
    let mut out = OutputBuffer::new();
    line(session, &mut out, kind, msg);
    session.commit(&mut out)
}

/// Clear the current line, then write `msg` and a newline.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn finish<W: Write, V: Viewport>(
    session: &mut Session<W, V>,
    kind: StatusKind,
    msg: &str,
) -> io::Result<()> {
    let mut out = OutputBuffer::new();
    out.replace_line();
    line(session, &mut out, kind, msg);
    out.newline();
    session.commit(&mut out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
