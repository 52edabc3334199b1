//! # synapse-theme — color roles for the scanner's terminal output
//!
//! A [`Theme`] is six named colors. Renderers never name an RGB value
//! themselves; they ask the active theme for a [`Role`], so swapping the
//! theme (e.g. to [`Theme::noir`] for grayscale terminals) recolors every
//! banner, bar, and sparkline at once.
//!
//! ```text
//! Role::Primary ──┐
//!                 ├── gradient sweeps (banner border, sparkline words)
//! Role::Secondary ┘
//! Role::Ok / Error / Warning ── status icons, summary line
//! Role::Muted ── unfilled bar cells, fallback status icon
//! ```

pub mod builtin;

use synapse_term::Rgb;

pub use builtin::builtin_theme;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A semantic color slot in a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Gradient start, filled progress cells, info icon.
    Primary,
    /// Gradient end.
    Secondary,
    /// Success.
    Ok,
    /// Failure.
    Error,
    /// Warnings and soft failures.
    Warning,
    /// De-emphasized chrome.
    Muted,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Ok,
        Self::Error,
        Self::Warning,
        Self::Muted,
    ];
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Six named colors. Replaced wholesale, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub ok: Rgb,
    pub error: Rgb,
    pub warning: Rgb,
    pub muted: Rgb,
}

impl Theme {
    /// The default color theme: cyan → purple with green/red/amber status.
    #[must_use]
    pub const fn synapse() -> Self {
        Self {
            name: "synapse",
            primary: Rgb::new(0, 210, 255),
            secondary: Rgb::new(140, 80, 255),
            ok: Rgb::new(0, 220, 140),
            error: Rgb::new(255, 70, 70),
            warning: Rgb::new(255, 200, 50),
            muted: Rgb::new(100, 100, 120),
        }
    }

    /// Grayscale variant for monochrome terminals and low-vision users.
    ///
    /// Status roles stay distinguishable by lightness alone.
    #[must_use]
    pub const fn noir() -> Self {
        Self {
            name: "noir",
            primary: Rgb::gray(210),
            secondary: Rgb::gray(140),
            ok: Rgb::gray(190),
            error: Rgb::gray(170),
            warning: Rgb::gray(160),
            muted: Rgb::gray(100),
        }
    }

    /// Look up the color for `role`.
    #[must_use]
    pub const fn color(&self, role: Role) -> Rgb {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Ok => self.ok,
            Role::Error => self.error,
            Role::Warning => self.warning,
            Role::Muted => self.muted,
        }
    }

    /// Point `t` on the primary → secondary gradient.
    #[must_use]
    pub fn gradient(&self, t: f64) -> Rgb {
        synapse_term::interpolate(self.primary, self.secondary, t)
    }

    /// Whether every role is a pure gray.
    #[must_use]
    pub fn is_grayscale(&self) -> bool {
        Role::ALL.iter().all(|&role| {
            let c = self.color(role);
            c.r == c.g && c.g == c.b
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::synapse()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_synapse() {
        assert_eq!(Theme::default(), Theme::synapse());
    }

    #[test]
    fn color_maps_every_role() {
        let t = Theme::synapse();
        assert_eq!(t.color(Role::Primary), t.primary);
        assert_eq!(t.color(Role::Secondary), t.secondary);
        assert_eq!(t.color(Role::Ok), t.ok);
        assert_eq!(t.color(Role::Error), t.error);
        assert_eq!(t.color(Role::Warning), t.warning);
        assert_eq!(t.color(Role::Muted), t.muted);
    }

    #[test]
    fn noir_is_grayscale() {
        assert!(Theme::noir().is_grayscale());
        assert!(!Theme::synapse().is_grayscale());
    }

    #[test]
    fn gradient_endpoints() {
        let t = Theme::synapse();
        assert_eq!(t.gradient(0.0), t.primary);
        assert_eq!(t.gradient(1.0), t.secondary);
    }

    #[test]
    fn gradient_fifth_is_exact() {
        // green channel: 210 - 130 * 0.2 = 184
        assert_eq!(Theme::synapse().gradient(0.2), Rgb::new(28, 184, 255));
    }

    #[test]
    fn noir_status_roles_are_distinct() {
        let t = Theme::noir();
        assert_ne!(t.ok, t.error);
        assert_ne!(t.error, t.warning);
        assert_ne!(t.ok, t.warning);
    }
}
