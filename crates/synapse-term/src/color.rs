// SPDX-License-Identifier: MIT
//
// Color — 8-bit sRGB triples and straight-line gradients between them.
//
// The scanner's gradients are deliberately simple: per-channel linear
// blends in sRGB, truncated toward zero. What matters is that they reach
// the terminal as 24-bit SGR (38;2;R;G;B) and never get squeezed into the
// 256-color cube, where a 20-cell sweep collapses into three visible bands.
//
// Single-character channel names (r, g, b, t) are the usual convention.
#![allow(clippy::many_single_char_names)]

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A neutral gray with all channels set to `v`.
    #[inline]
    #[must_use]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Format as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─── Interpolation ───────────────────────────────────────────────────────────

/// Linear per-channel interpolation between two colors.
///
/// Each channel is `a + (b - a) * t`, truncated toward zero. `t` is not
/// clamped here: callers derive it from an index over a length, so it is
/// already in `[0, 1]`.
///
/// ```
/// use synapse_term::color::{Rgb, interpolate};
///
/// let cyan = Rgb::new(0, 210, 255);
/// let purple = Rgb::new(140, 80, 255);
/// assert_eq!(interpolate(cyan, purple, 0.0), cyan);
/// assert_eq!(interpolate(cyan, purple, 1.0), purple);
/// assert_eq!(interpolate(cyan, purple, 0.5), Rgb::new(70, 145, 255));
/// ```
#[must_use]
pub fn interpolate(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp_channel(c1.r, c2.r, t),
        lerp_channel(c1.g, c2.g, t),
        lerp_channel(c1.b, c2.b, t),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    // `as u8` truncates toward zero and saturates at the ends.
    (b - a).mul_add(t, a) as u8
}

/// Gradient position of item `index` in a run of `len` items.
///
/// The first item sits at 0.0 and the last at 1.0. A run of one item
/// sits at 0.0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sweep_position(index: usize, len: usize) -> f64 {
    let span = len.saturating_sub(1).max(1);
    index as f64 / span as f64
}

// ─── Tests ───────────────────────────────────────────────────────────────────
