//! Decoration primitives: clickable links and display truncation.

use synapse_term::OutputBuffer;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Default visible length for URLs in progress lines.
pub const DISPLAY_URL_MAX: usize = 30;

/// Wrap `label` in an OSC-8 hyperlink to `url`.
///
/// Only `label` is printed; `url` travels in the escape payload. Terminals
/// without OSC-8 support show the label as plain text.
#[must_use]
pub fn hyperlink(url: &str, label: &str) -> String {
    let mut out = OutputBuffer::new();
    out.link(url, label);
    out.as_str().into_owned()
}

/// `url` without a leading `https://` or `http://`.
#[must_use]
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Shorten a URL for display.
///
/// Strips the scheme, then, if more than `max_len` characters remain, keeps
/// the first `max_len - 3` and appends [`ELLIPSIS`]. Characters are
/// grapheme clusters, so a combining accent is never cut from its base.
///
/// ```
/// use synapse_render::decor::truncate_for_display;
///
/// assert_eq!(truncate_for_display("https://arxiv.org/abs/1", 30), "arxiv.org/abs/1");
/// assert_eq!(truncate_for_display("http://abcdefghij", 8), "abcde...");
/// ```
#[must_use]
pub fn truncate_for_display(url: &str, max_len: usize) -> String {
    let rest = strip_scheme(url);
    let graphemes: Vec<&str> = rest.graphemes(true).collect();
    if graphemes.len() <= max_len {
        return rest.to_owned();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut out = graphemes[..keep].concat();
    out.push_str(ELLIPSIS);
    out
}

/// Columns `s` occupies on screen.
#[inline]
#[must_use]
pub fn display_width(s: &str) -> usize {
    s.width()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
