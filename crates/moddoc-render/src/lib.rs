//! # moddoc-render - Documentation Rendering for Infrastructure Modules
//!
//! `moddoc-render` turns a parsed infrastructure module (inputs, outputs,
//! providers, requirements, resources, module calls) into a documentation
//! page. It is the rendering core of the `moddoc` command-line tool, but it
//! does no I/O and can be used on its own.
//!
//! ## Core Concepts
//!
//! - [`Module`]: the documented entity graph, deserializable from JSON
//! - [`Settings`]: flat, resolved presentation toggles
//! - [`format`]: output formats behind the [`Printer`] trait, looked up by
//!   name with [`format::new`]
//! - [`template`]: named-fragment templates with the sanitizer bound as
//!   functions and filters
//! - [`sanitize`]: markup-safe string transformations
//!
//! ## Quick Start
//!
//! ```rust
//! use moddoc_render::{render, Module, Settings};
//!
//! let module: Module = serde_json::from_str(r#"{
//!     "inputs": [{ "name": "_foo", "type": "string", "required": true }]
//! }"#).unwrap();
//!
//! let settings = Settings {
//!     show_requirements: false,
//!     show_providers: false,
//!     show_module_calls: false,
//!     show_resources: false,
//!     show_outputs: false,
//!     ..Settings::default()
//! };
//!
//! let doc = render("markdown table", &module, &settings).unwrap();
//! assert!(doc.starts_with("## Inputs\n\n| Name | Description | Type | Default | Required |"));
//! assert!(doc.contains("<a name=\"inputs__foo\"></a> [\\_foo](#inputs__foo)"));
//! ```
//!
//! ## Output Formats
//!
//! | Name (and aliases) | Output |
//! |--------------------|--------|
//! | `markdown table` (`markdown`, `md`, `md tbl`, …) | one Markdown table per section |
//! | `markdown document` (`md doc`, …) | Markdown headings and paragraphs |
//! | `asciidoc table` (`asciidoc`, `adoc`, …) | one AsciiDoc table per section |
//! | `asciidoc document` (`adoc doc`, …) | AsciiDoc headings and paragraphs |
//! | `pretty` | terminal listing, colored with `show_color` |
//! | `json`, `yaml`, `xml` | structured view of the visible sections |
//! | `tfvars hcl`, `tfvars json` | variable file skeletons |
//!
//! Names are matched case-insensitively with whitespace collapsed.
//!
//! ## Rendering Pipeline
//!
//! Template formats render their fragments in a fixed order (header,
//! requirements, providers, modules, resources, inputs, outputs), calling
//! sanitizer functions inline for names, descriptions and values, then run
//! [`sanitize::sanitize`] once over the whole document. Rendering is a pure
//! function of `(Module, Settings)`; the module is never mutated, and
//! ordering is decided beforehand by [`Module::sort`].

mod error;
pub mod format;
mod module;
pub mod sanitize;
mod settings;
pub mod template;
pub mod util;

pub use error::RenderError;
pub use format::Printer;
pub use module::{
    value_to_text, Input, Module, ModuleCall, Output, Provider, Requirement, Resource, SortBy,
};
pub use settings::Settings;

/// Renders `module` with the format registered under `format_name`.
///
/// Shorthand for [`format::new`] followed by [`Printer::print`].
pub fn render(format_name: &str, module: &Module, settings: &Settings) -> Result<String, RenderError> {
    let printer = format::new(format_name, settings)?;
    printer.print(module, settings)
}
