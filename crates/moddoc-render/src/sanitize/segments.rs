//! Splitting text into prose and code segments.

/// Splits `text` on `delimiter` and maps prose and code parts separately.
///
/// Even-indexed parts are prose and go through `on_text`; odd-indexed parts
/// sit between a pair of delimiters and go through `on_code`, which receives
/// the inner content and is responsible for re-emitting delimiters.
///
/// An unmatched trailing delimiter is emitted literally and the text after it
/// is treated as prose.
pub(crate) fn process_segments<T, C>(text: &str, delimiter: &str, on_text: T, on_code: C) -> String
where
    T: Fn(&str) -> String,
    C: Fn(&str) -> String,
{
    let parts: Vec<&str> = text.split(delimiter).collect();
    let balanced = parts.len() % 2 == 1;
    let last = parts.len() - 1;

    let mut out = String::with_capacity(text.len());
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 0 {
            out.push_str(&on_text(part));
        } else if i == last && !balanced {
            out.push_str(delimiter);
            out.push_str(&on_text(part));
        } else {
            out.push_str(&on_code(part));
        }
    }
    out
}

/// Applies `f` to each line of `text`, keeping the original line endings.
pub(crate) fn execute_per_line<F>(text: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    text.split('\n').map(f).collect::<Vec<_>>().join("\n")
}

/// Re-wraps a code span in single backticks.
pub(crate) fn inline_code(code: &str) -> String {
    format!("`{}`", code)
}
