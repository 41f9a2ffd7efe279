//! Display-width helpers for aligned plain-text output.

use unicode_width::UnicodeWidthStr;

/// Returns the display width of a string in terminal columns.
///
/// Wide characters (CJK, most emoji) count as two columns.
///
/// ```rust
/// use moddoc_render::util::display_width;
///
/// assert_eq!(display_width("region"), 6);
/// assert_eq!(display_width("名前"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads `s` with spaces on the right up to `width` display columns.
///
/// Strings already at or past `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}
