//! Rendering session — the one value every renderer takes.

use std::io::{self, Write};

use synapse_term::{CursorGuard, CursorState, LiveViewport, OutputBuffer, Rgb, Viewport};
use synapse_theme::{Role, Theme};

/// Output writer + active theme + width source + cursor guard.
///
/// Dropping a session whose cursor is hidden shows it again, so holding the
/// session in `main`'s scope covers early returns and `?` as well as the
/// normal path.
pub struct Session<W: Write, V: Viewport = LiveViewport> {
    guard: CursorGuard<W>,
    theme: Theme,
    viewport: V,
}

impl<W: Write, V: Viewport> Session<W, V> {
    /// Start a session. The cursor is left alone until [`acquire`](Self::acquire).
    pub const fn new(out: W, theme: Theme, viewport: V) -> Self {
        Self {
            guard: CursorGuard::new(out),
            theme,
            viewport,
        }
    }

    /// The active theme.
    #[inline]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the active theme wholesale.
    pub fn set_theme(&mut self, theme: Theme) {
        tracing::debug!(theme = theme.name, "theme switched");
        self.theme = theme;
    }

    /// Color for `role` in the active theme.
    #[inline]
    pub const fn color(&self, role: Role) -> Rgb {
        self.theme.color(role)
    }

    /// Terminal width right now. Queried afresh on every call.
    #[inline]
    pub fn columns(&self) -> usize {
        usize::from(self.viewport.columns())
    }

    /// Hide the cursor for the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn acquire(&mut self) -> io::Result<()> {
        self.guard.acquire()
    }

    /// Show the cursor again.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn release(&mut self) -> io::Result<()> {
        self.guard.release()
    }

    /// Cursor visibility as last emitted.
    #[inline]
    pub const fn cursor(&self) -> CursorState {
        self.guard.state()
    }

    /// Write `buf` to the output in one call, flush, and clear `buf`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn commit(&mut self, buf: &mut OutputBuffer) -> io::Result<()> {
        buf.flush_to(self.guard.writer())
    }

    /// Raw access to the output, for callers writing unstyled bytes.
    #[inline]
    pub const fn writer(&mut self) -> &mut W {
        self.guard.writer()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
