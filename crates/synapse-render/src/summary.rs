//! Closing one-liner.
//!
//! ```text
//!   ✔ Done · 15 papers · 3 patterns · 2.4s
//!   ⚡ github.com/CrazhHolmes/SynapseScanner
//! ```

use std::io::{self, Write};
use std::time::Duration;

use synapse_term::{Attr, OutputBuffer, Viewport};
use synapse_theme::Role;

use crate::decor::strip_scheme;
use crate::session::Session;

/// Draw the run summary and, when given, a clickable repository link.
///
/// `patterns` is the number of distinct patterns found. Elapsed time is
/// shown to one decimal place.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn render<W: Write, V: Viewport>(
    session: &mut Session<W, V>,
    papers: usize,
    patterns: usize,
    elapsed: Duration,
    repo_url: Option<&str>,
) -> io::Result<()> {
    let mut out = OutputBuffer::new();
    out.newline()
        .spaces(2)
        .fg(session.color(Role::Ok))
        .ch('✔')
        .reset()
        .ch(' ')
        .attr(Attr::BOLD)
        .text("Done")
        .reset();
    for part in [
        format!("{papers} papers"),
        format!("{patterns} patterns"),
        format!("{:.1}s", elapsed.as_secs_f64()),
    ] {
        out.ch(' ').attr(Attr::DIM).ch('·').reset().ch(' ').text(&part);
    }
    out.newline();

    if let Some(url) = repo_url {
        out.spaces(2)
            .attr(Attr::DIM)
            .ch('⚡')
            .reset()
            .ch(' ')
            .link(url, strip_scheme(url))
            .newline();
    }
    out.newline();
    session.commit(&mut out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
