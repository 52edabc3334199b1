// SPDX-License-Identifier: MIT
//
// Text attributes — the SGR flags the scanner actually uses.
//
// Colors live in `color.rs`; this is only intensity and slant. Stored as a
// bitfield so a renderer can say `Attr::BOLD | Attr::ITALIC` and the ANSI
// layer emits one combined CSI sequence.

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// These map directly to SGR (Select Graphic Rendition) parameters:
    ///
    /// ```
    /// use synapse_term::style::Attr;
    ///
    /// let style = Attr::BOLD | Attr::ITALIC;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(!style.contains(Attr::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD   = 1 << 0;
        /// SGR 2 — decreased intensity (faint).
        const DIM    = 1 << 1;
        /// SGR 3 — italic or oblique.
        const ITALIC = 1 << 2;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Attr::default().is_empty());
    }

    #[test]
    fn flags_are_distinct() {
        assert_eq!((Attr::BOLD | Attr::DIM | Attr::ITALIC).bits().count_ones(), 3);
    }

    #[test]
    fn combine_and_remove() {
        let mut a = Attr::BOLD | Attr::ITALIC;
        a.remove(Attr::BOLD);
        assert_eq!(a, Attr::ITALIC);
    }
}
