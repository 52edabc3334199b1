// SPDX-License-Identifier: MIT
//
// Terminal state — width queries, cursor visibility, and guaranteed restore.
//
// Safety: This module necessarily uses `unsafe` for ioctl (TIOCGWINSZ)
// and raw fd writes. These are the standard POSIX interfaces for terminal
// control — there is no safe alternative. Each unsafe block is minimal.
#![allow(unsafe_code)]
//
// The scanner hides the cursor while it animates progress, and the user
// must never be left with a hidden cursor afterwards. Four exit paths are
// covered:
//
//   normal return / propagated error → CursorGuard's Drop shows the cursor
//   panic                            → panic hook writes EMERGENCY_RESTORE
//   Ctrl-C                           → ctrlc handler writes EMERGENCY_RESTORE
//                                      and raises the Interrupt flag
//
// Both emergency paths bypass Rust's stdout lock and write straight to fd 1.
// The main thread may be holding that lock mid-line when the panic or the
// signal arrives; taking it again would deadlock.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::ansi;

// ─── Width Query ─────────────────────────────────────────────────────────────

/// Columns assumed when nothing better is known.
pub const DEFAULT_COLUMNS: u16 = 80;

/// Query the terminal width via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn query_columns() -> Option<u16> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    (result == 0 && ws.ws_col > 0).then_some(ws.ws_col)
}

#[cfg(not(unix))]
#[must_use]
pub fn query_columns() -> Option<u16> {
    None
}

/// Parse a `COLUMNS`-style value. Zero and garbage are rejected.
fn parse_columns(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok().filter(|&c| c > 0)
}

// ─── Viewport ───────────────────────────────────────────────────────────────

/// Source of the terminal width.
///
/// Renderers ask on every call; implementations must not cache, since the
/// user can resize the window between two progress updates.
pub trait Viewport {
    /// Current width in columns.
    fn columns(&self) -> u16;
}

/// The real terminal: `ioctl` first, then `$COLUMNS`, then 80.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveViewport;

impl Viewport for LiveViewport {
    fn columns(&self) -> u16 {
        query_columns()
            .or_else(|| std::env::var("COLUMNS").ok().as_deref().and_then(parse_columns))
            .unwrap_or(DEFAULT_COLUMNS)
    }
}

/// A viewport of constant width, for tests and captured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub u16);

impl Viewport for FixedViewport {
    fn columns(&self) -> u16 {
        self.0
    }
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn columns(&self) -> u16 {
        (**self).columns()
    }
}

// ─── Emergency Restore ──────────────────────────────────────────────────────

/// Restore sequence for the panic and interrupt paths.
///
/// Concatenation of: reset SGR attributes, close any OSC-8 link left open
/// mid-label, show cursor. Cursor last, so whatever the shell prints next
/// is unstyled and the caret is visible.
#[rustfmt::skip]
pub const EMERGENCY_RESTORE: &[u8] = b"\
    \x1b[0m\
    \x1b]8;;\x1b\\\
    \x1b[?25h";

/// Panic hook guard — ensures the hook is installed at most once per process.
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Install a panic hook that restores the cursor before printing the error.
///
/// Delegates to the previous hook afterwards so the message still prints.
pub fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            emergency_restore();
            previous(info);
        }));
    });
}

/// Write [`EMERGENCY_RESTORE`] directly to stdout's file descriptor.
///
/// Bypasses `io::stdout()` and its lock.
pub fn emergency_restore() {
    #[cfg(unix)]
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            EMERGENCY_RESTORE.as_ptr().cast::<libc::c_void>(),
            EMERGENCY_RESTORE.len(),
        );
    }

    #[cfg(not(unix))]
    {
        let _ = io::stdout().write_all(EMERGENCY_RESTORE);
        let _ = io::stdout().flush();
    }
}

// ─── Interrupt ──────────────────────────────────────────────────────────────

/// Exit status used when a second interrupt forces the process down.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Cooperative interrupt flag shared between the Ctrl-C handler and the
/// rendering loop.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}

impl Interrupt {
    /// A fresh, unraised flag not connected to any signal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the process Ctrl-C handler and return its flag.
    ///
    /// First interrupt: the cursor is restored immediately (the main thread
    /// may be blocked on the network) and the flag is raised so the loop can
    /// wind down and print a final status. Second interrupt: restore again
    /// and exit with [`INTERRUPT_EXIT_CODE`].
    ///
    /// # Errors
    ///
    /// Fails if a handler is already installed or the platform refuses one.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let flag = Self::new();
        let handler_flag = flag.clone();
        ctrlc::set_handler(move || {
            emergency_restore();
            if handler_flag.raised.swap(true, Ordering::SeqCst) {
                std::process::exit(INTERRUPT_EXIT_CODE);
            }
        })?;
        tracing::debug!("interrupt handler installed");
        Ok(flag)
    }

    /// Raise the flag as if an interrupt had arrived.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Whether an interrupt has arrived.
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

// ─── CursorGuard ────────────────────────────────────────────────────────────

/// Cursor visibility as last emitted by a [`CursorGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorState {
    #[default]
    Visible,
    Hidden,
}

/// Output handle that owns cursor visibility, with RAII restore.
///
/// Starts `Visible`. [`acquire`](Self::acquire) hides the cursor,
/// [`release`](Self::release) shows it again, and dropping the guard while
/// `Hidden` releases automatically — so any `?` or early `return` between
/// the two still leaves the terminal usable.
///
/// ```
/// use synapse_term::terminal::{CursorGuard, CursorState};
///
/// let mut sink = Vec::new();
/// {
///     let mut guard = CursorGuard::new(&mut sink);
///     guard.acquire()?;
///     assert_eq!(guard.state(), CursorState::Hidden);
/// }
/// assert!(sink.ends_with(b"\x1b[?25h"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct CursorGuard<W: Write> {
    out: W,
    state: CursorState,
}

impl<W: Write> CursorGuard<W> {
    /// Wrap `out`. Emits nothing.
    pub const fn new(out: W) -> Self {
        Self {
            out,
            state: CursorState::Visible,
        }
    }

    /// Current cursor visibility.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> CursorState {
        self.state
    }

    /// Hide the cursor.
    ///
    /// Also installs the panic hook (once per process). Calling while
    /// already hidden re-emits the sequence, which the terminal ignores.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn acquire(&mut self) -> io::Result<()> {
        install_panic_hook();
        ansi::cursor_hide(&mut self.out)?;
        self.out.flush()?;
        self.state = CursorState::Hidden;
        tracing::trace!("cursor hidden");
        Ok(())
    }

    /// Show the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn release(&mut self) -> io::Result<()> {
        ansi::cursor_show(&mut self.out)?;
        self.out.flush()?;
        self.state = CursorState::Visible;
        tracing::trace!("cursor restored");
        Ok(())
    }

    /// The wrapped writer.
    #[inline]
    pub const fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for CursorGuard<W> {
    fn drop(&mut self) {
        if self.state == CursorState::Hidden {
            let _ = self.release();
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Queries ─────────────────────────────────────────────────────

    #[test]
    fn query_columns_is_positive_when_known() {
        assert_ne!(query_columns(), Some(0));
    }

    #[test]
    fn parse_columns_accepts_positive() {
        assert_eq!(parse_columns("120"), Some(120));
        assert_eq!(parse_columns(" 40 "), Some(40));
    }

    #[test]
    fn parse_columns_rejects_garbage() {
        assert_eq!(parse_columns("0"), None);
        assert_eq!(parse_columns("-3"), None);
        assert_eq!(parse_columns("wide"), None);
        assert_eq!(parse_columns(""), None);
    }

    // ── Viewports ───────────────────────────────────────────────────

    #[test]
    fn live_viewport_is_positive() {
        assert!(LiveViewport.columns() > 0);
    }

    #[test]
    fn fixed_viewport_reports_its_width() {
        assert_eq!(FixedViewport(42).columns(), 42);
        assert_eq!((&FixedViewport(7)).columns(), 7);
    }

    // ── Emergency restore ───────────────────────────────────────────

    #[test]
    fn emergency_restore_is_valid_utf8() {
        std::str::from_utf8(EMERGENCY_RESTORE).unwrap();
    }

    #[test]
    fn emergency_restore_shows_cursor_last() {
        let s = std::str::from_utf8(EMERGENCY_RESTORE).unwrap();
        assert!(s.ends_with("\x1b[?25h"));
    }

    #[test]
    fn emergency_restore_resets_style_and_links() {
        let s = std::str::from_utf8(EMERGENCY_RESTORE).unwrap();
        assert!(s.contains("\x1b[0m"), "must reset SGR attributes");
        assert!(s.contains("\x1b]8;;\x1b\\"), "must close open hyperlink");
    }

    // ── Interrupt ───────────────────────────────────────────────────

    #[test]
    fn interrupt_starts_lowered() {
        assert!(!Interrupt::new().is_raised());
    }

    #[test]
    fn interrupt_clones_share_flag() {
        let a = Interrupt::new();
        let b = a.clone();
        b.raise();
        assert!(a.is_raised());
    }

    // ── CursorGuard ─────────────────────────────────────────────────

    #[test]
    fn guard_starts_visible_and_silent() {
        let mut sink = Vec::new();
        let guard = CursorGuard::new(&mut sink);
        assert_eq!(guard.state(), CursorState::Visible);
        drop(guard);
        assert!(sink.is_empty());
    }

    #[test]
    fn acquire_release_cycle() {
        let mut sink = Vec::new();
        let mut guard = CursorGuard::new(&mut sink);
        guard.acquire().unwrap();
        assert_eq!(guard.state(), CursorState::Hidden);
        guard.release().unwrap();
        assert_eq!(guard.state(), CursorState::Visible);
        drop(guard);
        assert_eq!(sink, b"\x1b[?25l\x1b[?25h");
    }

    #[test]
    fn double_acquire_is_harmless() {
        let mut sink = Vec::new();
        let mut guard = CursorGuard::new(&mut sink);
        guard.acquire().unwrap();
        guard.acquire().unwrap();
        assert_eq!(guard.state(), CursorState::Hidden);
        drop(guard);
        assert!(sink.ends_with(b"\x1b[?25h"));
    }

    #[test]
    fn drop_while_hidden_restores() {
        let mut sink = Vec::new();
        {
            let mut guard = CursorGuard::new(&mut sink);
            guard.acquire().unwrap();
        }
        assert_eq!(sink, b"\x1b[?25l\x1b[?25h");
    }

    #[test]
    fn drop_after_release_does_not_repeat() {
        let mut sink = Vec::new();
        {
            let mut guard = CursorGuard::new(&mut sink);
            guard.acquire().unwrap();
            guard.release().unwrap();
        }
        assert_eq!(sink, b"\x1b[?25l\x1b[?25h");
    }

    #[test]
    fn early_error_return_restores() {
        fn failing(sink: &mut Vec<u8>) -> io::Result<()> {
            let mut guard = CursorGuard::new(sink);
            guard.acquire()?;
            Err(io::Error::other("upstream failure"))
        }

        let mut sink = Vec::new();
        assert!(failing(&mut sink).is_err());
        assert!(sink.ends_with(b"\x1b[?25h"));
    }

    #[test]
    fn writer_passes_through() {
        let mut sink = Vec::new();
        {
            let mut guard = CursorGuard::new(&mut sink);
            guard.writer().write_all(b"abc").unwrap();
        }
        assert_eq!(sink, b"abc");
    }
}
