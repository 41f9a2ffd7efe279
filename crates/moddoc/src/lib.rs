//! # moddoc - Documentation for Infrastructure Modules
//!
//! `moddoc` is the command-line front end of [`moddoc_render`]. It reads a
//! module description (JSON, produced by a separate extraction step),
//! resolves presentation settings from a YAML config file and flags, merges
//! output values when asked to, and prints the rendered document.
//!
//! ```text
//! moddoc [OPTIONS] <FORMATTER> <MODULE_JSON>
//!
//! moddoc "markdown table" module.json
//! moddoc --hide providers --indent 3 md module.json
//! moddoc --output-values --output-values-from outputs.json json module.json
//! ```
//!
//! The pieces are usable on their own:
//!
//! - [`config`]: config file loading and the settings resolver
//! - [`cli`]: clap argument definitions
//! - [`output_values`]: `terraform output -json` loading
//! - [`logging`]: `tracing` subscriber setup

pub mod cli;
pub mod config;
pub mod logging;
pub mod output_values;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use moddoc_render::{format, Module};

pub use cli::Cli;
pub use config::{Config, ConfigError, Options};

/// Runs one invocation and returns the rendered document.
///
/// Nothing is written anywhere; the caller decides where the document goes.
pub fn run(cli: &Cli) -> Result<String> {
    let file = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let (settings, options) = file.merge(cli.overrides()).resolve()?;

    let text = fs::read_to_string(&cli.module)
        .with_context(|| format!("failed to read module file '{}'", cli.module.display()))?;
    let mut module: Module = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse module file '{}'", cli.module.display()))?;

    if options.show_header {
        let base = cli.module.parent().unwrap_or_else(|| Path::new(""));
        if let Some(header) = load_header(base, &options.header_from)? {
            module.header = header;
        }
    }

    if let Some(path) = &options.output_values_path {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read output values '{}'", path.display()))?;
        let values = output_values::parse(&text)
            .with_context(|| format!("failed to parse output values '{}'", path.display()))?;
        output_values::apply(&mut module, &values);
    }

    module.sort(&options.sort_by);

    let printer = format::new(&options.formatter, &settings)?;
    let document = printer.print(&module, &settings)?;
    tracing::debug!(formatter = %options.formatter, bytes = document.len(), "rendered document");
    Ok(document)
}

/// Reads a header file that lives next to the module.
///
/// Headers taken from `.tf` sources are extracted together with the rest of
/// the module, so those yield `None` and the module's own header is kept.
pub fn load_header(base: &Path, header_from: &str) -> Result<Option<String>> {
    let path = base.join(header_from);
    if path.extension().is_some_and(|ext| ext == "tf") {
        return Ok(None);
    }
    let header = fs::read_to_string(&path)
        .with_context(|| format!("failed to read header file '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded header");
    Ok(Some(header.trim_end().to_string()))
}
