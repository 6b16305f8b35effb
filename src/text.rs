//! Escaping and display-width aware string helpers.
//!
//! Widths are measured in terminal columns (`unicode-width`), not bytes, so
//! that box borders line up for CJK text and emoji. Cuts happen on grapheme
//! cluster boundaries so combining marks stay with their base character.

use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Replace control characters with their backslash escapes.
///
/// Everything else passes through untouched, so most input is returned
/// borrowed.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_debug());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Quote `text` as a string literal, escaping quotes, backslashes and
/// control characters.
pub fn quote(text: &str) -> String {
    format!("{:?}", text)
}

/// Number of terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// The longest prefix of `text` that fits in `max_width` columns.
pub fn display_prefix(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        width += UnicodeWidthStr::width(grapheme);
        if width > max_width {
            return &text[..idx];
        }
    }
    text
}

/// The first `max_chars` chars of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Right-pad `text` with spaces until it is `width` columns wide.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    let mut out = String::with_capacity(text.len() + fill);
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(fill));
    out
}
