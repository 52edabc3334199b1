//! Matrix rain, the `--matrix` easter egg.
//!
//! Each frame is one terminal-wide line of random glyphs in a randomly
//! jittered green, and frames scroll up the screen at a fixed rate. The
//! effect runs for a fixed number of frames, or until the user interrupts,
//! then clears the screen and homes the cursor.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use rand::Rng;
use synapse_term::{Interrupt, OutputBuffer, Rgb, Viewport, ansi};
use unicode_width::UnicodeWidthChar;

use crate::session::Session;

/// Glyphs the rain is drawn from.
pub const CHARSET: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', '0', '1',
];

/// Single-column glyphs, used to fill a gap too narrow for a katakana.
const NARROW: [char; 2] = ['0', '1'];

pub const FRAMES_PER_SECOND: u32 = 15;
pub const FRAME_DELAY: Duration = Duration::from_millis(40);

/// Green channel bounds, inclusive.
pub const GREEN_MIN: u8 = 60;
pub const GREEN_MAX: u8 = 220;

const DEFAULT_SECONDS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rain {
    pub duration_secs: u32,
    pub frame_delay: Duration,
}

impl Default for Rain {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_SECONDS,
            frame_delay: FRAME_DELAY,
        }
    }
}

impl Rain {
    #[must_use]
    pub const fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            frame_delay: FRAME_DELAY,
        }
    }

    /// Set the pause between frames. Zero disables pacing.
    #[must_use]
    pub const fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Total frames drawn.
    #[must_use]
    pub const fn frames(&self) -> u32 {
        self.duration_secs.saturating_mul(FRAMES_PER_SECOND)
    }

    /// Run the effect to completion, stopping early between frames once
    /// `interrupt` is raised. The screen is cleared either way.
    ///
    /// Noir themes rain in gray instead of green.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn render<W: Write, V: Viewport, R: Rng + ?Sized>(
        &self,
        session: &mut Session<W, V>,
        rng: &mut R,
        interrupt: &Interrupt,
    ) -> io::Result<()> {
        let gray = session.theme().is_grayscale();
        let frames = self.frames();
        tracing::debug!(frames, gray, "matrix rain");

        let mut out = OutputBuffer::new();
        for frame in 0..frames {
            if interrupt.is_raised() {
                tracing::debug!(frame, "rain interrupted");
                break;
            }
            let level = rng.random_range(GREEN_MIN..=GREEN_MAX);
            let color = if gray {
                Rgb::gray(level)
            } else {
                Rgb::new(0, level, 0)
            };
            out.fg(color);
            frame_line(&mut out, session.columns(), rng);
            out.reset().newline();
            session.commit(&mut out)?;

            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }

        ansi::cursor_home(&mut out)?;
        ansi::clear_below(&mut out)?;
        session.commit(&mut out)
    }
}

/// Append random glyphs filling exactly `columns` display columns.
fn frame_line<R: Rng + ?Sized>(out: &mut OutputBuffer, columns: usize, rng: &mut R) {
    let mut width = 0;
    while width < columns {
        let mut c = CHARSET[rng.random_range(0..CHARSET.len())];
        let mut w = c.width().unwrap_or(1);
        if width + w > columns {
            c = NARROW[rng.random_range(0..NARROW.len())];
            w = 1;
        }
        out.ch(c);
        width += w;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
