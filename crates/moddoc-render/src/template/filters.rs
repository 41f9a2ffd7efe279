//! The function namespace shared by every document dialect.
//!
//! | Name | Kind | Usage |
//! |------|------|-------|
//! | `indent` | function | `{{ indent(0, "#") }} Inputs` |
//! | `anchor` | function | `{{ anchor(i.name, "inputs") }}` |
//! | `output_value` | function | `{{ output_value(o.sensitive, o.value) }}` |
//! | `name` | filter | `{{ i.name \| name }}` |
//! | `sanitize_header` | filter | `{{ module.header \| sanitize_header }}` |
//! | `sanitize_doc` | filter | `{{ i.description \| sanitize_doc }}` |
//! | `sanitize_tbl` | filter | `{{ i.description \| sanitize_tbl }}` |
//! | `na` | filter | `{{ r.version \| na }}` |
//!
//! Every entry is bound to the [`Settings`] the template was built with.
//! Dialect-specific helpers (`type`, `value`, …) are registered by the format
//! adapters on top of these.

use minijinja::{Environment, Value};

use crate::sanitize;
use crate::settings::Settings;

/// Placeholder printed instead of a sensitive output value.
pub const SENSITIVE_PLACEHOLDER: &str = "<sensitive>";

/// Markup flavor the shared functions emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Markdown,
    AsciiDoc,
}

/// Registers the shared functions and filters on `env`.
pub fn register_functions(env: &mut Environment<'static>, settings: &Settings, markup: Markup) {
    let s = settings.clone();
    env.add_function("indent", move |extra: usize, ch: String| -> String {
        ch.repeat(s.indent_level + extra)
    });

    let s = settings.clone();
    env.add_function("anchor", move |name: String, section: String| -> String {
        match markup {
            Markup::Markdown => sanitize::create_anchor(&name, &section, &s),
            Markup::AsciiDoc => sanitize::create_anchor_asciidoc(&name, &section, &s),
        }
    });

    env.add_function("output_value", |sensitive: bool, value: String| -> String {
        if sensitive {
            SENSITIVE_PLACEHOLDER.to_string()
        } else {
            value
        }
    });

    let s = settings.clone();
    env.add_filter("name", move |value: Value| -> String {
        match markup {
            Markup::Markdown => sanitize::sanitize_name(&text(&value), &s),
            Markup::AsciiDoc => text(&value),
        }
    });

    let s = settings.clone();
    env.add_filter("sanitize_header", move |value: Value| -> String {
        match markup {
            Markup::Markdown => sanitize::sanitize_header(&text(&value), &s),
            Markup::AsciiDoc => text(&value),
        }
    });

    let s = settings.clone();
    env.add_filter("sanitize_doc", move |value: Value| -> String {
        match markup {
            Markup::Markdown => sanitize::sanitize_item_for_document(&text(&value), &s),
            Markup::AsciiDoc => sanitize::sanitize_asciidoc_item(&text(&value), false),
        }
    });

    let s = settings.clone();
    env.add_filter("sanitize_tbl", move |value: Value| -> String {
        match markup {
            Markup::Markdown => sanitize::sanitize_item_for_table(&text(&value), &s),
            Markup::AsciiDoc => sanitize::sanitize_asciidoc_item(&text(&value), true),
        }
    });

    env.add_filter("na", |value: Value| -> String {
        let value = text(&value);
        if value.is_empty() {
            "n/a".to_string()
        } else {
            value
        }
    });
}

/// Reads a template value as text; `none` and undefined read as `""`.
pub fn text(value: &Value) -> String {
    if value.is_none() || value.is_undefined() {
        return String::new();
    }
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
