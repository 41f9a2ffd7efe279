//! Markup-safe text transformations.
//!
//! Every function here is total: any string and any settings produce some
//! text, and malformed input such as an unbalanced backtick degrades to
//! literal passthrough. The functions are registered on the template
//! environment (see [`crate::template::filters`]) and called inline while
//! fragments render; [`sanitize`] then runs once over the whole document.
//!
//! ## Contexts
//!
//! | Function | Used for |
//! |----------|----------|
//! | [`sanitize_name`] | entity names (headings, first table column) |
//! | [`sanitize_header`] | the free-text module header |
//! | [`sanitize_item_for_document`] | descriptions in prose documents |
//! | [`sanitize_item_for_table`] | anything placed inside a Markdown table cell |
//! | [`sanitize_asciidoc_item`] | AsciiDoc cells and paragraphs |
//!
//! Fenced code (triple backticks) inside descriptions is never escaped. In
//! Markdown tables it is turned into a single-line `<pre>` block since cells
//! cannot hold newlines.

mod escape;
mod multiline;
mod segments;

pub use escape::{escape_illegal_characters, normalize_urls, sanitize_name};
pub use multiline::convert_multi_line_text;

use multiline::join_lines;
use segments::process_segments;

use crate::settings::Settings;

const FENCE: &str = "```";

/// Builds an inline Markdown link to an entry's anchor.
///
/// With anchors on, `create_anchor("_foo", "inputs", …)` yields
/// `<a name="inputs__foo"></a> [\_foo](#inputs__foo)`; the anchor target keeps
/// the raw name while the link text is escaped. With anchors off the name is
/// returned unchanged.
pub fn create_anchor(name: &str, section: &str, settings: &Settings) -> String {
    if !settings.show_anchors {
        return name.to_string();
    }
    let anchor = format!("{}_{}", section, name);
    format!(
        "<a name=\"{}\"></a> [{}](#{})",
        anchor,
        sanitize_name(name, settings),
        anchor
    )
}

/// AsciiDoc flavor of [`create_anchor`]: `[[inputs_foo]] <<inputs_foo,foo>>`.
pub fn create_anchor_asciidoc(name: &str, section: &str, settings: &Settings) -> String {
    if !settings.show_anchors {
        return name.to_string();
    }
    let anchor = format!("{}_{}", section, name);
    format!("[[{}]] <<{},{}>>", anchor, anchor, name)
}

/// Formats code as an inline span, or as a fenced block when it spans
/// several lines. The flag reports which form was chosen.
pub fn fenced_code_block(code: &str, language: &str) -> (String, bool) {
    if code.contains('\n') {
        (format!("{}{}\n{}\n{}", FENCE, language, code, FENCE), true)
    } else {
        (format!("`{}`", code), false)
    }
}

/// AsciiDoc counterpart of [`fenced_code_block`], using a listing block.
pub fn asciidoc_code_block(code: &str, language: &str) -> (String, bool) {
    if code.contains('\n') {
        (listing_block(code, language), true)
    } else {
        (format!("`{}`", code), false)
    }
}

fn listing_block(code: &str, language: &str) -> String {
    let style = if language.is_empty() {
        "[source]".to_string()
    } else {
        format!("[source,{}]", language)
    };
    format!("{}\n----\n{}\n----", style, code)
}

/// Sanitizes the free-text module header.
///
/// The header is already a Markdown document, so line structure is kept;
/// only escaping and URL repair apply, and fenced code passes through.
pub fn sanitize_header(text: &str, settings: &Settings) -> String {
    process_segments(
        text,
        FENCE,
        |segment| {
            let segment = escape_illegal_characters(segment, settings, false);
            normalize_urls(&segment, settings)
        },
        keep_fence,
    )
}

/// Sanitizes a description or value rendered as a document paragraph.
pub fn sanitize_item_for_document(text: &str, settings: &Settings) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    process_segments(
        text,
        FENCE,
        |segment| {
            let segment = escape_illegal_characters(segment, settings, false);
            let segment = convert_multi_line_text(&segment, false);
            normalize_urls(&segment, settings)
        },
        keep_fence,
    )
}

/// Sanitizes text for a single Markdown table cell.
///
/// The result holds no newline: prose breaks become `<br>` and fenced code
/// becomes `<pre>…</pre>`. Pipes are escaped everywhere except inside inline
/// code spans.
///
/// ```rust
/// use moddoc_render::sanitize::sanitize_item_for_table;
/// use moddoc_render::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(
///     sanitize_item_for_table("```\n[\n  \"a|b\"\n]\n```", &settings),
///     "<pre>[<br>  \"a\\|b\"<br>]</pre>",
/// );
/// ```
pub fn sanitize_item_for_table(text: &str, settings: &Settings) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    process_segments(
        text,
        FENCE,
        |segment| {
            let segment = escape_illegal_characters(segment, settings, true);
            let segment = convert_multi_line_text(&segment, true);
            normalize_urls(&segment, settings)
        },
        pre_block,
    )
}

/// Sanitizes text for an AsciiDoc table cell (`in_table`) or paragraph.
///
/// AsciiDoc has no backslash escapes for emphasis, so only pipes (in tables)
/// are escaped. Paragraph continuations become ` +` hard breaks and fenced
/// code becomes a listing block.
pub fn sanitize_asciidoc_item(text: &str, in_table: bool) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    let escape = Settings {
        escape_characters: false,
        ..Settings::default()
    };
    process_segments(
        text,
        FENCE,
        |segment| {
            let segment = escape_illegal_characters(segment, &escape, in_table);
            join_lines(&segment, " +\n", "\n")
        },
        |code| {
            let (language, body) = split_info_string(code);
            // Fenced code stays a listing block even when it is one line.
            let block = listing_block(body.trim_end_matches('\n'), language);
            let block = if in_table {
                block.replace('|', "\\|")
            } else {
                block
            };
            format!("\n{}\n", block)
        },
    )
}

fn keep_fence(code: &str) -> String {
    format!("{}{}{}", FENCE, code, FENCE)
}

// Splits "lang\nbody" into its info string and body. A fence without a
// newline holds only a body.
fn split_info_string(code: &str) -> (&str, &str) {
    match code.split_once('\n') {
        Some((info, body)) => (info.trim(), body),
        None => ("", code),
    }
}

fn pre_block(code: &str) -> String {
    let (_, body) = split_info_string(code);
    let body = body.replace('\r', "");
    let body = body.trim_end_matches('\n');
    format!(
        "<pre>{}</pre>",
        body.replace('|', "\\|").replace('\n', "<br>")
    )
}

/// Final whole-document cleanup shared by every template dialect.
///
/// - trailing whitespace is removed, except a two-space Markdown hard break
///   between two lines of text;
/// - runs of blank lines left behind by empty or hidden sections collapse to
///   one blank line;
/// - leading and trailing blank lines are dropped.
pub fn sanitize(document: &str) -> String {
    let normalized = document.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    let mut out = String::with_capacity(normalized.len());
    let mut blank_run = 0usize;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim_end_matches([' ', '\t']);
        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run == 1 {
                out.push('\n');
            }
            continue;
        }
        blank_run = 0;
        out.push_str(trimmed);

        let continues = lines.get(i + 1).is_some_and(|next| !next.trim().is_empty());
        if continues && line[trimmed.len()..].starts_with("  ") {
            out.push_str("  ");
        }
        out.push('\n');
    }

    out.trim_matches('\n').to_string()
}
