//! Escaping and inline span formatting.
//!
//! Inline formatting is three ordered, non-greedy substitutions over the
//! escaped text: bold, then italic, then code. Each pass sees the output of
//! the previous one, so `**a *b* c**` becomes
//! `<strong>a <em>b</em> c</strong>` and `` `*a*` `` becomes
//! `<code><em>a</em></code>`. There is no recursive inline parser.

use std::sync::LazyLock;

use regex::Regex;

// Span text never crosses `\r`, U+2028 or U+2029 (or `\n`, which lines never contain).
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\n\r\x{2028}\x{2029}]+?)\*").unwrap());
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^\n\r\x{2028}\x{2029}]+?)`").unwrap());

/// Escape `&`, `<` and `>` for HTML text content.
///
/// No other characters are touched, so `*` and `` ` `` stay available as
/// formatting delimiters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape `text`, then apply bold, italic and code substitutions in that order.
///
/// Unterminated delimiters never match and pass through as literal text.
pub fn format_inline(text: &str) -> String {
    let escaped = escape(text);
    let bold = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    let italic = ITALIC.replace_all(&bold, "<em>${1}</em>");
    CODE.replace_all(&italic, "<code>${1}</code>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escape_special_chars() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escape_is_identity_without_special_chars() {
        assert_eq!(escape(""), "");
        assert_eq!(escape("plain *text* with `ticks`"), "plain *text* with `ticks`");
    }

    #[test]
    fn bold_italic_code() {
        assert_eq!(format_inline("**x**"), "<strong>x</strong>");
        assert_eq!(format_inline("*x*"), "<em>x</em>");
        assert_eq!(format_inline("`x`"), "<code>x</code>");
    }

    #[test]
    fn shortest_match_left_to_right() {
        assert_eq!(
            format_inline("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
        assert_eq!(format_inline("`a` `b`"), "<code>a</code> <code>b</code>");
    }

    #[test]
    fn escaping_precedes_formatting() {
        assert_eq!(format_inline("<b>"), "&lt;b&gt;");
        assert_eq!(format_inline("<**b**>"), "&lt;<strong>b</strong>&gt;");
        assert_eq!(
            format_inline("`<br>` & more"),
            "<code>&lt;br&gt;</code> &amp; more"
        );
    }

    #[test]
    fn later_passes_run_over_earlier_output() {
        assert_eq!(
            format_inline("**a *b* c**"),
            "<strong>a <em>b</em> c</strong>"
        );
        assert_eq!(format_inline("`*a*`"), "<code><em>a</em></code>");
    }

    #[test]
    fn unterminated_delimiters_are_literal() {
        assert_eq!(format_inline("**x"), "**x");
        assert_eq!(format_inline("a * b"), "a * b");
        assert_eq!(format_inline("`open"), "`open");
    }

    #[test]
    fn spans_do_not_cross_line_terminators() {
        assert_eq!(format_inline("**a\rb**"), "**a\rb**");
        assert_eq!(format_inline("*a\u{2028}b*"), "*a\u{2028}b*");
        assert_eq!(format_inline("`a\u{2029}b`"), "`a\u{2029}b`");
        assert_eq!(format_inline("*a*\u{2028}*b*"), "<em>a</em>\u{2028}<em>b</em>");
    }

    #[test]
    fn empty_delimiters_do_not_match() {
        assert_eq!(format_inline("``"), "``");
    }
}
