// SPDX-License-Identifier: MIT
//
// Output buffering.
//
// OutputBuffer accumulates ANSI bytes in memory so a whole logical line (or
// a whole box) reaches the terminal in a single write() followed by one
// flush. The terminal never sees a progress line that has been cleared but
// not yet redrawn, which is what makes in-place rewrites flicker-free.
//
// The builder methods are infallible: the backing store is a Vec, so the
// `io::Result`s from the ANSI layer can only ever be `Ok`.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::ansi;
use crate::color::Rgb;
use crate::style::Attr;

// ─── OutputBuffer ────────────────────────────────────────────────────────────

/// A byte buffer that accumulates styled output for a single `write()`.
///
/// ```
/// use synapse_term::{OutputBuffer, Rgb};
///
/// let mut out = OutputBuffer::new();
/// out.fg(Rgb::new(0, 220, 140)).text("✔").reset().text(" done");
/// assert_eq!(out.as_str(), "\x1b[38;2;0;220;140m✔\x1b[0m done");
/// ```
pub struct OutputBuffer {
    buf: Vec<u8>,
}

const DEFAULT_CAPACITY: usize = 1024;

impl OutputBuffer {
    /// Create an empty buffer with default capacity (1 KB).
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Whether the buffer is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated output as text (for tests and debugging).
    #[must_use]
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buf)
    }

    /// Write accumulated output to `w`, flush it, and clear the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if !self.buf.is_empty() {
            w.write_all(&self.buf)?;
            w.flush()?;
            self.buf.clear();
        }
        Ok(())
    }

    // ── Builders ─────────────────────────────────────────────────────

    /// Append plain text.
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    /// Append a single character.
    pub fn ch(&mut self, c: char) -> &mut Self {
        let mut enc = [0u8; 4];
        self.buf.extend_from_slice(c.encode_utf8(&mut enc).as_bytes());
        self
    }

    /// Append `c` repeated `n` times.
    pub fn repeat(&mut self, c: char, n: usize) -> &mut Self {
        for _ in 0..n {
            self.ch(c);
        }
        self
    }

    /// Append `n` spaces.
    pub fn spaces(&mut self, n: usize) -> &mut Self {
        self.buf.resize(self.buf.len() + n, b' ');
        self
    }

    /// Append a line feed.
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push(b'\n');
        self
    }

    /// Set the foreground to a 24-bit color.
    pub fn fg(&mut self, color: Rgb) -> &mut Self {
        let _ = ansi::fg(self, color);
        self
    }

    /// Apply text attributes.
    pub fn attr(&mut self, attr: Attr) -> &mut Self {
        let _ = ansi::attrs(self, attr);
        self
    }

    /// Reset all SGR state.
    pub fn reset(&mut self) -> &mut Self {
        let _ = ansi::reset(self);
        self
    }

    /// Append `label` as a clickable OSC-8 link to `url`.
    pub fn link(&mut self, url: &str, label: &str) -> &mut Self {
        let _ = ansi::link_open(self, url);
        self.text(label);
        let _ = ansi::link_close(self);
        self
    }

    /// Clear the current line and return to column 0.
    pub fn rewind_line(&mut self) -> &mut Self {
        let _ = ansi::clear_line(self);
        let _ = ansi::carriage_return(self);
        self
    }

    /// Return to column 0 and clear the current line.
    pub fn replace_line(&mut self) -> &mut Self {
        let _ = ansi::carriage_return(self);
        let _ = ansi::clear_line(self);
        self
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Intentionally a no-op. Real flushing via flush_to().
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
