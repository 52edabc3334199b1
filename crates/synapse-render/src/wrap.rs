//! Greedy word wrap by display width.

use unicode_width::UnicodeWidthStr;

/// Break `text` into lines no wider than `width` columns.
///
/// Words are taken in order and appended to the current line, separated by
/// one space; when the next word would push the line past `width`, the line
/// is flushed and the word starts a new one. Words are never split, so a
/// single word wider than `width` sits alone on an over-wide line. Runs of
/// whitespace in the input collapse to one space.
///
/// ```
/// use synapse_render::wrap::wrap_words;
///
/// assert_eq!(wrap_words("a bb ccc dddd", 6), vec!["a bb", "ccc", "dddd"]);
/// ```
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if !line.is_empty() && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if !line.is_empty() {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
