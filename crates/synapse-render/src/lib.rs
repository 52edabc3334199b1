//! # synapse-render — what the scanner draws
//!
//! Every renderer is a function taking `&mut Session`, which owns the output
//! writer, the active theme, the width source, and cursor visibility. There
//! is no ambient state: two sessions can render side by side into two
//! buffers, which is exactly what the tests do.
//!
//! - **[`session`]** — `Session`, the rendering context
//! - **[`decor`]** — clickable links and URL truncation
//! - **[`wrap`]** — greedy word wrap by display width
//! - **[`banner`]** — centered gradient box with title and subtitle
//! - **[`status`]** — pending and final status lines
//! - **[`progress`]** — in-place progress bar with a clickable URL
//! - **[`discovery`]** — deduplicated discovery box and explanations
//! - **[`sparkline`]** — keyword strip with braille intensity glyphs
//! - **[`summary`]** — closing one-liner
//! - **[`rain`]** — the `--matrix` easter egg
//! - **[`cheat`]** — static `--cheat` reference screen
//!
//! A typical run:
//!
//! ```text
//! banner → [rain] → acquire → status → progress × N → discovery
//!        → sparkline → summary → release (or Drop)
//! ```

pub mod banner;
pub mod cheat;
pub mod decor;
pub mod discovery;
pub mod progress;
pub mod rain;
pub mod session;
pub mod sparkline;
pub mod status;
pub mod summary;
pub mod wrap;

pub use session::Session;
pub use status::StatusKind;

#[cfg(test)]
pub(crate) mod testing {
    use std::io;

    use synapse_term::FixedViewport;
    use synapse_theme::Theme;

    use crate::Session;

    pub type TestSession<'a> = Session<&'a mut Vec<u8>, FixedViewport>;

    /// Run `f` against a fresh session of the given width and return
    /// everything it wrote.
    pub fn render<F>(width: u16, f: F) -> String
    where
        F: FnOnce(&mut TestSession<'_>) -> io::Result<()>,
    {
        let mut sink = Vec::new();
        {
            let mut session = Session::new(&mut sink, Theme::synapse(), FixedViewport(width));
            f(&mut session).unwrap();
        }
        String::from_utf8(sink).unwrap()
    }

    /// Remove CSI and OSC escape sequences, leaving only printed text.
    pub fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '\x1b' {
                out.push(c);
                continue;
            }
            match chars.next() {
                // CSI: parameters until a final byte in @..~
                Some('[') => {
                    for c in chars.by_ref() {
                        if ('@'..='~').contains(&c) {
                            break;
                        }
                    }
                }
                // OSC: until ST (ESC \)
                Some(']') => {
                    while let Some(c) = chars.next() {
                        if c == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
        }
        out
    }

    #[test]
    fn strip_ansi_removes_csi_and_osc() {
        let s = "\x1b[38;2;1;2;3mhi\x1b[0m \x1b]8;;https://x\x1b\\link\x1b]8;;\x1b\\";
        assert_eq!(strip_ansi(s), "hi link");
    }
}
