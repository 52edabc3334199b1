//! Static `--cheat` reference screen.
//!
//! Plain SGR attributes only: it is printed before any session exists, so
//! it takes no theme and never touches the cursor.

use std::io::{self, Write};

use synapse_term::{Attr, OutputBuffer};

const FLAGS: &[(&str, &str)] = &[
    ("[QUERY]", "Search terms (default: latest papers)"),
    ("--max-results N", "Papers to fetch (default 15)"),
    ("--noir", "Greyscale mode"),
    ("--matrix", "Matrix rain easter egg"),
    ("--cheat", "This screen"),
    ("-v, -q", "More or less log output on stderr"),
];

const ENVIRONMENT: &[(&str, &str)] = &[
    ("SYNAPSE_MATRIX=1", "same as --matrix"),
    ("SYNAPSE_NOIR=1", "same as --noir"),
    ("SYNAPSE_LOG=debug", "log filter, overrides RUST_LOG"),
];

/// Width of the left column.
const KEY_WIDTH: usize = 18;

/// Print the reference screen to `w`.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn render(w: &mut impl Write) -> io::Result<()> {
    let mut out = OutputBuffer::new();
    out.newline()
        .spaces(2)
        .attr(Attr::BOLD)
        .text("SynapseScanner CLI")
        .reset()
        .newline();

    section(&mut out, "FLAGS", FLAGS);
    section(&mut out, "ENVIRONMENT", ENVIRONMENT);

    heading(&mut out, "PRO TIP");
    out.spaces(4)
        .text("Paper URLs in the progress line are ")
        .attr(Attr::ITALIC)
        .text("clickable")
        .reset()
        .newline()
        .spaces(4)
        .text("in Windows Terminal, iTerm2, and GNOME Terminal.")
        .newline()
        .newline();

    out.flush_to(w)
}

fn heading(out: &mut OutputBuffer, title: &str) {
    out.newline()
        .spaces(2)
        .attr(Attr::DIM)
        .text(title)
        .reset()
        .newline();
}

fn section(out: &mut OutputBuffer, title: &str, rows: &[(&str, &str)]) {
    heading(out, title);
    for (key, what) in rows {
        out.spaces(4)
            .text(&format!("{key:<width$}", width = KEY_WIDTH))
            .text(what)
            .newline();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::strip_ansi;

    fn screen() -> String {
        let mut sink = Vec::new();
        render(&mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn has_every_section() {
        let s = strip_ansi(&screen());
        for needle in ["SynapseScanner CLI", "FLAGS", "ENVIRONMENT", "PRO TIP"] {
            assert!(s.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn lists_every_flag_and_toggle() {
        let s = screen();
        for flag in ["--max-results", "--noir", "--matrix", "--cheat"] {
            assert!(s.contains(flag), "missing {flag}");
        }
        assert!(s.contains("SYNAPSE_NOIR"));
        assert!(s.contains("SYNAPSE_MATRIX"));
    }

    #[test]
    fn no_color_and_no_cursor_control() {
        let s = screen();
        assert!(!s.contains("\x1b[38;2;"));
        assert!(!s.contains("\x1b[?25"));
    }

    #[test]
    fn keys_fit_their_column() {
        for (key, _) in FLAGS.iter().chain(ENVIRONMENT) {
            assert!(key.len() < KEY_WIDTH, "{key} runs into its description");
        }
    }
}
