//! Backslash escaping of markup-significant characters.

use super::segments::{execute_per_line, inline_code, process_segments};
use crate::settings::Settings;

/// Escapes every underscore in a name when `escape_characters` is on.
///
/// Underscores already escaped (after an odd run of backslashes) and
/// anything inside backtick code spans are left alone, so applying this
/// twice is the same as applying it once.
///
/// ```rust
/// use moddoc_render::sanitize::sanitize_name;
/// use moddoc_render::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(sanitize_name("abcd__efgh", &settings), "abcd\\_\\_efgh");
/// assert_eq!(sanitize_name("\\_abc", &settings), "\\_abc");
/// ```
pub fn sanitize_name(name: &str, settings: &Settings) -> String {
    if !settings.escape_characters || !name.contains('_') {
        return name.to_string();
    }
    process_segments(name, "`", escape_every_underscore, inline_code)
}

fn escape_every_underscore(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut escaped = false;
    for c in text.chars() {
        if c == '_' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    out
}

/// Escapes characters that would break table cells or inline markup.
///
/// Outside backtick code spans:
///
/// - `|` becomes `\|` when `escape_pipe` is set;
/// - with `escape_characters` on, each underscore of a run is escaped unless
///   the run touches a word on exactly one side (`_foo`, `foo_`), which is an
///   emphasis delimiter the author wrote on purpose.
///
/// Asterisks are kept as emphasis markup. Characters already escaped with a
/// backslash are never escaped again, and code spans are byte-identical in
/// the output.
///
/// ```rust
/// use moddoc_render::sanitize::escape_illegal_characters;
/// use moddoc_render::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(
///     escape_illegal_characters("a || b `c || d`", &settings, true),
///     "a \\|\\| b `c || d`",
/// );
/// ```
pub fn escape_illegal_characters(text: &str, settings: &Settings, escape_pipe: bool) -> String {
    let mut result = text.to_string();

    if escape_pipe && result.contains('|') {
        result = process_segments(&result, "`", escape_pipes, inline_code);
    }

    if settings.escape_characters && result.contains('_') {
        result = process_segments(
            &result,
            "`",
            |segment| execute_per_line(segment, escape_underscore_runs),
            inline_code,
        );
    }

    result
}

fn escape_pipes(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut escaped = false;
    for c in text.chars() {
        if c == '|' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    out
}

fn is_word(c: Option<char>) -> bool {
    c.is_some_and(char::is_alphanumeric)
}

fn escape_underscore_runs(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            out.push(c);
            if let Some(&next) = chars.get(i + 1) {
                out.push(next);
            }
            i += 2;
            continue;
        }
        if c != '_' {
            out.push(c);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i] == '_' {
            i += 1;
        }
        let before = start.checked_sub(1).map(|j| chars[j]);
        let after = chars.get(i).copied();
        let delimiter = is_word(before) != is_word(after);

        for _ in start..i {
            if !delimiter {
                out.push('\\');
            }
            out.push('_');
        }
    }

    out
}

/// Undoes underscore escaping inside URLs.
///
/// The escaping pass cannot tell a URL from prose, so `https://foo_bar.com`
/// comes out as `https://foo\_bar.com`. This restores underscores strictly
/// inside `scheme://…` spans and leaves every other escape in place. A span
/// ends at whitespace or at a character that cannot appear in a bare URL.
pub fn normalize_urls(text: &str, settings: &Settings) -> String {
    if !settings.escape_characters || !text.contains("://") {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("://") {
        let scheme_start = scheme_start(&rest[..pos]);
        let valid_scheme = rest[scheme_start..pos]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());

        if !valid_scheme {
            out.push_str(&rest[..pos + 3]);
            rest = &rest[pos + 3..];
            continue;
        }

        let end = rest[pos..]
            .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '`'))
            .map(|e| pos + e)
            .unwrap_or(rest.len());

        out.push_str(&rest[..scheme_start]);
        out.push_str(&rest[scheme_start..end].replace("\\_", "_"));
        rest = &rest[end..];
    }

    out.push_str(rest);
    out
}

// Byte offset where the URL scheme preceding "://" begins.
fn scheme_start(prefix: &str) -> usize {
    let mut start = prefix.len();
    for (idx, c) in prefix.char_indices().rev() {
        if c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-') {
            start = idx;
        } else {
            break;
        }
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(escape: bool) -> Settings {
        Settings {
            escape_characters: escape,
            ..Settings::default()
        }
    }

    #[test]
    fn test_sanitize_name_with_escape() {
        let s = settings(true);
        assert_eq!(sanitize_name("abcdefgh", &s), "abcdefgh");
        assert_eq!(sanitize_name("abcd_efgh", &s), "abcd\\_efgh");
        assert_eq!(sanitize_name("_abcdefgh", &s), "\\_abcdefgh");
        assert_eq!(sanitize_name("abcd__efgh", &s), "abcd\\_\\_efgh");
        assert_eq!(sanitize_name("_", &s), "\\_");
        assert_eq!(sanitize_name("", &s), "");
    }

    #[test]
    fn test_sanitize_name_after_literal_backslash() {
        let s = settings(true);
        assert_eq!(sanitize_name("a\\_b", &s), "a\\_b");
        assert_eq!(sanitize_name("a\\\\_b", &s), "a\\\\\\_b");
        let once = sanitize_name("a\\\\_b", &s);
        assert_eq!(sanitize_name(&once, &s), once);
    }

    #[test]
    fn test_sanitize_name_without_escape() {
        let s = settings(false);
        assert_eq!(sanitize_name("abcd_efgh", &s), "abcd_efgh");
        assert_eq!(sanitize_name("abcd__efgh", &s), "abcd__efgh");
        assert_eq!(sanitize_name("_", &s), "_");
    }

    #[test]
    fn test_sanitize_name_skips_code_spans() {
        let s = settings(true);
        assert_eq!(sanitize_name("a_b `c_d`", &s), "a\\_b `c_d`");
    }

    #[test]
    fn test_sanitize_name_is_idempotent() {
        let s = settings(true);
        let once = sanitize_name("__a_b__", &s);
        assert_eq!(sanitize_name(&once, &s), once);
    }

    #[test]
    fn test_escape_pipe() {
        let s = settings(false);
        assert_eq!(
            escape_illegal_characters(
                "lorem | ipsum |dolor|consectetur| `adipi | scing |elit|sit|`",
                &s,
                true
            ),
            "lorem \\| ipsum \\|dolor\\|consectetur\\| `adipi | scing |elit|sit|`"
        );
        assert_eq!(
            escape_illegal_characters(
                "lorem ||| ipsum |||dolor `adipi ||| scing`",
                &s,
                true
            ),
            "lorem \\|\\|\\| ipsum \\|\\|\\|dolor `adipi ||| scing`"
        );
    }

    #[test]
    fn test_do_not_escape_pipe() {
        let s = settings(false);
        let input = "lorem || ipsum ||dolor||consectetur|| `adipi || scing ||elit||sit||`";
        assert_eq!(escape_illegal_characters(input, &s, false), input);
    }

    #[test]
    fn test_escaped_pipe_is_not_escaped_twice() {
        let s = settings(false);
        assert_eq!(escape_illegal_characters("a \\| b", &s, true), "a \\| b");
    }

    #[test]
    fn test_escape_underscore() {
        let s = settings(true);
        assert_eq!(
            escape_illegal_characters(
                "lorem _ ipsum _dolor_consectetur_ incid_idunt `adipi _ scing _elit_sit_`",
                &s,
                false
            ),
            "lorem \\_ ipsum _dolor\\_consectetur_ incid\\_idunt `adipi _ scing _elit_sit_`"
        );
        assert_eq!(
            escape_illegal_characters(
                "lorem ___ ipsum ___dolor___consectetur___ incid___idunt `adipi ___ scing`",
                &s,
                false
            ),
            "lorem \\_\\_\\_ ipsum ___dolor\\_\\_\\_consectetur___ incid\\_\\_\\_idunt `adipi ___ scing`"
        );
    }

    #[test]
    fn test_do_not_escape_underscore() {
        let s = settings(false);
        let input = "lorem __ ipsum __dolor__consectetur__ incid__idunt `adipi __ scing`";
        assert_eq!(escape_illegal_characters(input, &s, false), input);
    }

    #[test]
    fn test_asterisks_are_kept() {
        let s = settings(true);
        for input in [
            "* lorem * ipsum *dolor*consectetur* `adipi * scing *elit*sit*`",
            "*** lorem *** ipsum ***dolor***consectetur***",
            "**lorem ipsum dolor consectetur adipi scing elit sit**",
        ] {
            assert_eq!(escape_illegal_characters(input, &s, false), input);
        }
    }

    #[test]
    fn test_normalize_urls_with_escape() {
        let s = settings(true);
        assert_eq!(
            normalize_urls("https://www.foo\\_bar.com/", &s),
            "https://www.foo_bar.com/"
        );
        assert_eq!(
            normalize_urls("lorem ipsum https://www.foo\\_bar.com/ dolor sit amet", &s),
            "lorem ipsum https://www.foo_bar.com/ dolor sit amet"
        );
        assert_eq!(
            normalize_urls("lorem\\_ipsum https://www.foo\\_bar.com/ dolor sit amet", &s),
            "lorem\\_ipsum https://www.foo_bar.com/ dolor sit amet"
        );
    }

    #[test]
    fn test_normalize_urls_without_escape() {
        let s = settings(false);
        for input in [
            "https://www.foo_bar.com/",
            "https://www.foo\\_bar.com/",
            "lorem\\_ipsum https://www.foo\\_bar.com/ dolor sit amet",
        ] {
            assert_eq!(normalize_urls(input, &s), input);
        }
    }

    #[test]
    fn test_normalize_urls_stops_at_html_break() {
        let s = settings(true);
        assert_eq!(
            normalize_urls("see http://a\\_b.io<br>then a\\_b", &s),
            "see http://a_b.io<br>then a\\_b"
        );
    }

    #[test]
    fn test_normalize_urls_ignores_bare_separator() {
        let s = settings(true);
        assert_eq!(normalize_urls("odd :// a\\_b", &s), "odd :// a\\_b");
    }
}
