//! Format adapters and the format registry.
//!
//! Every output format implements [`Printer`]. Template dialects (Markdown
//! and AsciiDoc, table and document flavors, and `pretty`) render through a
//! [`DocumentTemplate`](crate::template::DocumentTemplate) and finish with
//! [`sanitize`](crate::sanitize::sanitize); the structured formats serialize
//! a view of the module instead.
//!
//! Adapters are looked up by name with [`new`]:
//!
//! ```rust
//! use moddoc_render::{format, Module, Settings};
//!
//! let settings = Settings::default();
//! let printer = format::new("MD  Table", &settings).unwrap();
//! let doc = printer.print(&Module::default(), &settings).unwrap();
//! assert!(doc.starts_with("## Requirements"));
//!
//! assert!(format::new("latex", &settings).is_err());
//! ```

mod asciidoc_document;
mod asciidoc_table;
mod markdown_document;
mod markdown_table;
mod pretty;
mod structured;
mod tfvars;

use std::collections::HashMap;

use minijinja::{Environment, Value};
use once_cell::sync::Lazy;

pub use asciidoc_document::AsciidocDocument;
pub use asciidoc_table::AsciidocTable;
pub use markdown_document::MarkdownDocument;
pub use markdown_table::MarkdownTable;
pub use pretty::Pretty;
pub use structured::{Json, Xml, Yaml};
pub use tfvars::{TfvarsHcl, TfvarsJson};

use crate::error::RenderError;
use crate::module::Module;
use crate::sanitize::{asciidoc_code_block, fenced_code_block};
use crate::settings::Settings;
use crate::template::filters::text;
use crate::template::Markup;

/// Turns a module into a finished document.
pub trait Printer: Send + Sync {
    fn print(&self, module: &Module, settings: &Settings) -> Result<String, RenderError>;
}

type Constructor = fn(&Settings) -> Result<Box<dyn Printer>, RenderError>;

fn boxed<P: Printer + 'static>(printer: Result<P, RenderError>) -> Result<Box<dyn Printer>, RenderError> {
    Ok(Box::new(printer?))
}

static REGISTRY: Lazy<HashMap<&'static str, Constructor>> = Lazy::new(|| {
    let mut formats: HashMap<&'static str, Constructor> = HashMap::new();

    for name in ["markdown", "markdown table", "markdown tbl", "md", "md table", "md tbl"] {
        formats.insert(name, |s| boxed(MarkdownTable::new(s)));
    }
    for name in ["markdown document", "markdown doc", "md document", "md doc"] {
        formats.insert(name, |s| boxed(MarkdownDocument::new(s)));
    }
    for name in ["asciidoc", "asciidoc table", "asciidoc tbl", "adoc", "adoc table", "adoc tbl"] {
        formats.insert(name, |s| boxed(AsciidocTable::new(s)));
    }
    for name in ["asciidoc document", "asciidoc doc", "adoc document", "adoc doc"] {
        formats.insert(name, |s| boxed(AsciidocDocument::new(s)));
    }
    formats.insert("pretty", |s| boxed(Pretty::new(s)));
    formats.insert("json", |_| Ok(Box::new(Json)));
    formats.insert("yaml", |_| Ok(Box::new(Yaml)));
    formats.insert("xml", |_| Ok(Box::new(Xml)));
    formats.insert("tfvars hcl", |_| Ok(Box::new(TfvarsHcl)));
    formats.insert("tfvars json", |_| Ok(Box::new(TfvarsJson)));

    formats
});

/// Builds the printer registered under `name`.
///
/// Names are case-insensitive and runs of whitespace count as one space, so
/// `"Markdown   Table"` selects the same adapter as `"markdown table"`.
pub fn new(name: &str, settings: &Settings) -> Result<Box<dyn Printer>, RenderError> {
    let key = normalize_name(name);
    match REGISTRY.get(key.as_str()) {
        Some(constructor) => {
            tracing::debug!(format = %key, "selected format");
            constructor(settings)
        }
        None => Err(RenderError::UnknownFormat(name.to_string())),
    }
}

/// All registered format names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) const ROOT: &str = r#"{% include 'header' %}
{% include 'requirements' %}
{% include 'providers' %}
{% include 'modules' %}
{% include 'resources' %}
{% include 'inputs' %}
{% include 'outputs' %}
"#;

pub(crate) const HEADER: &str = r#"{% if settings.show_header and module.header %}
{{ module.header | sanitize_header }}

{% endif %}
"#;

/// Registers the `type` and `value` filters for a dialect.
///
/// Empty text reads `n/a`. Single-line text becomes an inline code span;
/// multi-line text becomes a code block, set off as its own paragraph in
/// documents and left for `sanitize_tbl` to flatten in tables.
pub(crate) fn register_code_filters(env: &mut Environment<'static>, markup: Markup, in_table: bool) {
    let (type_lang, value_lang) = if in_table { ("", "") } else { ("hcl", "json") };
    env.add_filter("type", move |v: Value| -> String {
        code_block(&text(&v), type_lang, markup, in_table)
    });
    env.add_filter("value", move |v: Value| -> String {
        code_block(&text(&v), value_lang, markup, in_table)
    });
}

fn code_block(code: &str, language: &str, markup: Markup, in_table: bool) -> String {
    if code.is_empty() {
        return "n/a".to_string();
    }
    let (block, multi_line) = match markup {
        Markup::Markdown => fenced_code_block(code, language),
        Markup::AsciiDoc => {
            let (block, multi_line) = asciidoc_code_block(code, language);
            if in_table {
                (block.replace('|', "\\|"), multi_line)
            } else {
                (block, multi_line)
            }
        }
    };
    match (multi_line, markup, in_table) {
        (true, Markup::Markdown, true) => block,
        (true, _, _) => format!("\n\n{}\n", block),
        (false, _, _) => block,
    }
}

#[cfg(test)]
pub(crate) fn only<F: FnOnce(&mut Settings)>(f: F) -> Settings {
    let mut settings = Settings::hide_all();
    f(&mut settings);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_is_registered() {
        let settings = Settings::default();
        for name in [
            "markdown",
            "markdown table",
            "markdown tbl",
            "md",
            "md table",
            "md tbl",
            "markdown document",
            "markdown doc",
            "md document",
            "md doc",
            "asciidoc",
            "asciidoc table",
            "asciidoc tbl",
            "adoc",
            "adoc table",
            "adoc tbl",
            "asciidoc document",
            "asciidoc doc",
            "adoc document",
            "adoc doc",
            "pretty",
            "json",
            "yaml",
            "xml",
            "tfvars hcl",
            "tfvars json",
        ] {
            assert!(new(name, &settings).is_ok(), "{name} should be registered");
        }
        assert_eq!(names().len(), 26);
    }

    #[test]
    fn test_every_format_builds_and_prints() {
        let settings = Settings::default();
        let module = Module {
            header: "Some module".into(),
            ..Default::default()
        };
        for name in names() {
            let printer = match new(name, &settings) {
                Ok(printer) => printer,
                Err(err) => panic!("{name} failed to build: {err}"),
            };
            assert!(printer.print(&module, &settings).is_ok(), "{name} failed to print");
        }
    }

    #[test]
    fn test_names_are_normalized() {
        assert_eq!(normalize_name("  Markdown\t  TABLE "), "markdown table");
        assert!(new("ADOC  Doc", &Settings::default()).is_ok());
    }

    #[test]
    fn test_unknown_format() {
        match new("latex", &Settings::default()) {
            Err(RenderError::UnknownFormat(name)) => assert_eq!(name, "latex"),
            _ => panic!("expected UnknownFormat"),
        }
    }

    #[test]
    fn test_aliases_render_identically() {
        let settings = Settings::default();
        let module = Module {
            header: "Some module".into(),
            ..Default::default()
        };
        let a = new("markdown", &settings).unwrap().print(&module, &settings).unwrap();
        let b = new("md tbl", &settings).unwrap().print(&module, &settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_code_block_forms() {
        assert_eq!(code_block("", "hcl", Markup::Markdown, false), "n/a");
        assert_eq!(code_block("string", "hcl", Markup::Markdown, false), "`string`");
        assert_eq!(
            code_block("[\n  1\n]", "json", Markup::Markdown, false),
            "\n\n```json\n[\n  1\n]\n```\n"
        );
        assert_eq!(code_block("[\n  1\n]", "", Markup::Markdown, true), "```\n[\n  1\n]\n```");
        assert_eq!(
            code_block("a\n|b", "", Markup::AsciiDoc, true),
            "\n\n[source]\n----\na\n\\|b\n----\n"
        );
    }
}
