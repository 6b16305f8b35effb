//! Box drawing and indentation.

use crate::text::{display_prefix, display_width, escape, pad_to_width};

const ELLIPSIS: &str = "...";

/// Draw `text` inside a three line box exactly `width` columns wide.
//
// ┌──────────┐
// │ literal  │
// └──────────┘
//
// Two columns of border and two of padding leave `width - 4` for the text.
// Overlong text is cut to `width - 7` columns so the ellipsis still fits.
pub fn box_text(text: &str, width: usize) -> String {
    let inner = width.saturating_sub(4);
    let escaped = escape(text);

    let content = if display_width(&escaped) > inner {
        let mut cut = display_prefix(&escaped, width.saturating_sub(7)).to_string();
        cut.push_str(ELLIPSIS);
        pad_to_width(&cut, inner)
    } else {
        pad_to_width(&escaped, inner)
    };

    let border = "─".repeat(width.saturating_sub(2));
    format!("┌{border}┐\n│ {content} │\n└{border}┘")
}

/// Leading spaces for a node at `depth`.
pub fn indent(depth: usize, indent_width: usize) -> String {
    " ".repeat(depth * indent_width)
}

/// A horizontal rule of `ch` repeated `width` times.
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_widths(boxed: &str) -> Vec<usize> {
        boxed.lines().map(display_width).collect()
    }

    #[test]
    fn short_text_is_padded() {
        insta::assert_snapshot!(box_text("x", 12), @r###"
        ┌──────────┐
        │ x        │
        └──────────┘
        "###);
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        insta::assert_snapshot!(box_text("abcdefgh", 12), @r###"
        ┌──────────┐
        │ abcdefgh │
        └──────────┘
        "###);
    }

    #[test]
    fn long_text_gets_ellipsis() {
        insta::assert_snapshot!(box_text("abcdefghi", 12), @r###"
        ┌──────────┐
        │ abcde... │
        └──────────┘
        "###);
    }

    #[test]
    fn every_line_is_exactly_width() {
        let samples = [
            "",
            "x",
            "a fairly long title that will not fit",
            "日本語のタイトルはとても長いです",
            "tab\there",
            "e\u{301}e\u{301}e\u{301}e\u{301}e\u{301}e\u{301}e\u{301}",
        ];
        for width in 8..40 {
            for sample in samples.iter() {
                let boxed = box_text(sample, width);
                assert_eq!(boxed.lines().count(), 3, "{:?} at {}", sample, width);
                assert_eq!(
                    line_widths(&boxed),
                    vec![width; 3],
                    "{:?} at {}",
                    sample,
                    width
                );
            }
        }
    }

    #[test]
    fn control_characters_are_escaped_before_measuring() {
        let boxed = box_text("a\nb", 12);
        assert_eq!(boxed.lines().nth(1), Some("│ a\\nb     │"));
    }

    #[test]
    fn indent_scales_with_depth() {
        assert_eq!(indent(0, 4), "");
        assert_eq!(indent(3, 2), "      ");
    }

    #[test]
    fn rule_repeats_char() {
        assert_eq!(rule('═', 3), "═══");
        assert_eq!(rule('═', 0), "");
    }
}
