//! Named preset themes.

use crate::Theme;

/// Look up a builtin theme by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Theme> {
    match name {
        "default" | "synapse" => Some(Theme::synapse()),
        "noir" | "grayscale" => Some(Theme::noir()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
