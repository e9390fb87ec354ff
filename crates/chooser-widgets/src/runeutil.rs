//! Display-width aware text helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns taken by `s`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_width` columns, ending in `tail` when anything
/// was cut. Wide characters are never split.
///
/// ```
/// use chooser_widgets::runeutil::truncate;
///
/// assert_eq!(truncate("United Kingdom", 9, "…"), "United K…");
/// assert_eq!(truncate("Chile", 9, "…"), "Chile");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let tail_width = display_width(tail);
    let (budget, tail) = if tail_width > max_width {
        (max_width, "")
    } else {
        (max_width - tail_width, tail)
    };
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str(tail);
    out
}

/// Pad `s` with spaces on the right up to `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_unchanged() {
        assert_eq!(truncate("Oslo", 4, "…"), "Oslo");
    }

    #[test]
    fn ascii_cut() {
        assert_eq!(truncate("hello world", 8, "..."), "hello...");
    }

    #[test]
    fn wide_chars_not_split() {
        // Each CJK char is two columns.
        assert_eq!(truncate("日本国", 4, "…"), "日…");
        assert_eq!(display_width("日本国"), 6);
    }

    #[test]
    fn tail_wider_than_budget() {
        assert_eq!(truncate("abcdef", 2, "..."), "ab");
    }

    #[test]
    fn padding() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcd", 2), "abcd");
    }
}
