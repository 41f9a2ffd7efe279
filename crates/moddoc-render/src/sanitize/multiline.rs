//! Line-break normalization for document and table contexts.

/// Converts a multi-line string to the form its rendering context needs.
///
/// In document context (`is_table == false`) a line break between two
/// non-blank lines becomes a Markdown hard break (two spaces, newline) when
/// the following line starts with a word character after its indentation.
/// Lines that start with markup (list bullets, quotes, …) keep a plain
/// newline, blank lines are preserved exactly, and indentation is untouched.
///
/// In table context every line break, blank separators included, becomes an
/// inline `<br>`, and carriage returns are dropped: the result never contains
/// a newline.
///
/// ```rust
/// use moddoc_render::sanitize::convert_multi_line_text;
///
/// let text = "Key\n  Foo: 1\n\n- item";
/// assert_eq!(convert_multi_line_text(text, false), "Key  \n  Foo: 1\n\n- item");
/// assert_eq!(convert_multi_line_text(text, true), "Key<br>  Foo: 1<br><br>- item");
/// ```
pub fn convert_multi_line_text(text: &str, is_table: bool) -> String {
    if is_table {
        join_lines(text, "<br>", "<br>")
    } else {
        join_lines(text, "  \n", "\n")
    }
}

/// Joins lines with `hard_break` where a paragraph continues and
/// `soft_break` everywhere else.
pub(crate) fn join_lines(text: &str, hard_break: &str, soft_break: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let mut out = String::with_capacity(normalized.len() + lines.len() * hard_break.len());
    for (i, line) in lines.iter().enumerate() {
        match lines.get(i + 1) {
            None => out.push_str(line),
            Some(next) if continues_paragraph(line, next) => {
                out.push_str(line.trim_end());
                out.push_str(hard_break);
            }
            Some(_) => {
                out.push_str(line);
                out.push_str(soft_break);
            }
        }
    }
    out
}

fn continues_paragraph(line: &str, next: &str) -> bool {
    !line.trim().is_empty()
        && next
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
}
