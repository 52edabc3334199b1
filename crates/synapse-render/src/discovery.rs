//! Discovery box and explanation paragraphs.
//!
//! ```text
//!   ╭────────────────────── Discoveries ───────────────────────╮
//!   │  ⚛  Quantum breakthrough
//!   │     Test quantum erasure with polarized lenses & laser pointer
//!   │     ~$30 · Easy
//!   │
//!   ╰──────────────────────────────────────────────────────────╯
//!
//!   ⚛  Quantum breakthrough
//!     Quantum erasure can be demonstrated with inexpensive optical
//!     components, ...
//! ```

use std::collections::HashSet;
use std::io::{self, Write};

use synapse_scan::{Discovery, Pattern};
use synapse_term::{Attr, OutputBuffer, Rgb, Viewport};

use crate::decor::display_width;
use crate::session::Session;
use crate::status::{self, StatusKind};
use crate::wrap::wrap_words;

/// Widest the box gets, borders included.
pub const MAX_BOX_WIDTH: usize = 62;

/// Widest an explanation line gets.
pub const MAX_WRAP_WIDTH: usize = 72;

const LABEL: &str = " Discoveries ";

/// Position on the primary → secondary gradient used for the border.
const BORDER_T: f64 = 0.25;

/// Drop repeated patterns, keeping the first occurrence of each in order.
#[must_use]
pub fn dedup(discoveries: &[Discovery]) -> Vec<Discovery> {
    let mut seen = HashSet::new();
    discoveries
        .iter()
        .filter(|d| seen.insert(d.pattern))
        .copied()
        .collect()
}

#[must_use]
pub const fn icon(pattern: Pattern) -> char {
    match pattern {
        Pattern::QuantumBreakthrough => '⚛',
        Pattern::MetamaterialLens => '◈',
        Pattern::TemporalPeriodicity => '◎',
        Pattern::AiPhysics => '◆',
    }
}

/// Why the suggested bench experiment is interesting.
#[must_use]
pub const fn explanation(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::QuantumBreakthrough => {
            "Quantum erasure can be demonstrated with inexpensive optical components, \
             opening a low-cost pathway for teaching advanced quantum-mechanics \
             experiments in undergraduate labs."
        }
        Pattern::MetamaterialLens => {
            "Stacking everyday glass slides with index-matching oil recreates the \
             negative-refraction effect normally seen only in engineered \
             nanostructures, making metamaterial optics accessible on a bench."
        }
        Pattern::TemporalPeriodicity => {
            "A simple 555-timer circuit can produce the same discrete \
             time-symmetry breaking that underpins time-crystal research, giving \
             students a hands-on analogy for cutting-edge condensed-matter physics."
        }
        Pattern::AiPhysics => {
            "Training a small neural network on pendulum data shows how machine \
             learning can rediscover Newtonian mechanics from raw observations, \
             illustrating physics-informed ML with zero hardware cost."
        }
    }
}

/// Box width for a terminal `columns` wide.
#[must_use]
pub const fn box_width(columns: usize) -> usize {
    let w = columns.saturating_sub(4);
    if w < MAX_BOX_WIDTH { w } else { MAX_BOX_WIDTH }
}

/// Explanation wrap width for a terminal `columns` wide.
#[must_use]
pub const fn wrap_width(columns: usize) -> usize {
    let w = columns.saturating_sub(6);
    if w < MAX_WRAP_WIDTH { w } else { MAX_WRAP_WIDTH }
}

/// Render the deduplicated discoveries, or a warning line when there are
/// none.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn render<W: Write, V: Viewport>(
    session: &mut Session<W, V>,
    discoveries: &[Discovery],
) -> io::Result<()> {
    let unique = dedup(discoveries);
    if unique.is_empty() {
        return status::finish(session, StatusKind::Warn, "No breakthrough patterns detected.");
    }

    let columns = session.columns();
    let inner = box_width(columns).saturating_sub(2);
    let border = session.theme().gradient(BORDER_T);

    let mut out = OutputBuffer::new();

    // ╭──── Discoveries ────╮
    let label = if display_width(LABEL) <= inner { LABEL } else { "" };
    let rule = inner - display_width(label);
    let left = rule / 2;
    out.newline()
        .spaces(2)
        .fg(border)
        .ch('╭')
        .repeat('─', left)
        .text(label)
        .repeat('─', rule - left)
        .ch('╮')
        .reset()
        .newline();

    for d in &unique {
        bar(&mut out, border)
            .spaces(2)
            .attr(Attr::BOLD)
            .ch(icon(d.pattern))
            .spaces(2)
            .text(d.name())
            .reset()
            .newline();
        bar(&mut out, border)
            .spaces(5)
            .attr(Attr::DIM)
            .text(d.hint)
            .reset()
            .newline();
        bar(&mut out, border)
            .spaces(5)
            .attr(Attr::DIM)
            .text(&format!("{} · {}", d.cost, d.difficulty))
            .reset()
            .newline();
        bar(&mut out, border).newline();
    }

    out.spaces(2)
        .fg(border)
        .ch('╰')
        .repeat('─', inner)
        .ch('╯')
        .reset()
        .newline();
    session.commit(&mut out)?;

    let width = wrap_width(session.columns());
    for d in &unique {
        out.newline()
            .spaces(2)
            .attr(Attr::BOLD)
            .ch(icon(d.pattern))
            .spaces(2)
            .text(d.name())
            .reset()
            .newline();
        for line in wrap_words(explanation(d.pattern), width) {
            out.spaces(4).attr(Attr::DIM).text(&line).reset().newline();
        }
        session.commit(&mut out)?;
    }

    tracing::debug!(unique = unique.len(), total = discoveries.len(), "discoveries rendered");
    Ok(())
}

/// Left border of a body row.
fn bar(out: &mut OutputBuffer, color: Rgb) -> &mut OutputBuffer {
    out.spaces(2).fg(color).ch('│').reset()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
