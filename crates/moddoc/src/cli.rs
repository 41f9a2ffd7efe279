//! Command-line arguments.
//!
//! Every flag is optional and maps onto one [`Config`] field, so the same
//! resolution rules apply whether a value comes from the config file or
//! from the command line. Boolean flags take an optional value:
//! `--anchor` means `--anchor=true`, and `--anchor=false` turns it off.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, OutputValues, Sections, SettingsConfig, Sort};

/// Generate documentation for an infrastructure module.
#[derive(Debug, Parser)]
#[command(
    name = "moddoc",
    version,
    about = "Generate documentation for infrastructure modules",
    long_about = "Renders a module description (inputs, outputs, providers, requirements, \
                  resources and module calls, as JSON) into Markdown, AsciiDoc, JSON, YAML, \
                  XML, tfvars or a colored terminal listing."
)]
pub struct Cli {
    /// Output format, e.g. "markdown table", "asciidoc document", "json".
    #[arg(value_name = "FORMATTER")]
    pub formatter: String,

    /// Module description produced by the extraction step.
    #[arg(value_name = "MODULE_JSON")]
    pub module: PathBuf,

    /// YAML config file. Flags override its values.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Sections to show (header, inputs, modules, outputs, providers,
    /// requirements, resources). Use with --hide-all.
    #[arg(long, value_name = "SECTION", value_delimiter = ',')]
    pub show: Vec<String>,

    /// Sections to hide. Wins over --show.
    #[arg(long, value_name = "SECTION", value_delimiter = ',')]
    pub hide: Vec<String>,

    /// Show all sections.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub show_all: Option<bool>,

    /// Hide all sections.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub hide_all: Option<bool>,

    /// Sort items by name.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub sort: Option<bool>,

    /// Put required inputs first.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub sort_by_required: Option<bool>,

    /// Sort inputs by type.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub sort_by_type: Option<bool>,

    /// Include output values. Requires --output-values-from.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub output_values: Option<bool>,

    /// JSON file with output values, as printed by `terraform output -json`.
    #[arg(long, value_name = "PATH")]
    pub output_values_from: Option<String>,

    /// File to read the header from, relative to the module file.
    #[arg(long, value_name = "FILE")]
    pub header_from: Option<String>,

    /// Generate anchors for names.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub anchor: Option<bool>,

    /// Escape special characters.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub escape: Option<bool>,

    /// Heading level of top-level sections.
    #[arg(long, value_name = "LEVEL")]
    pub indent: Option<usize>,

    /// Show the Required column, or split required and optional inputs.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub required: Option<bool>,

    /// Show the Sensitive column for outputs.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub sensitive: Option<bool>,

    /// Colorize the pretty format.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub color: Option<bool>,

    /// Print debug logs to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The explicitly given flags as a config layer.
    pub fn overrides(&self) -> Config {
        let mut by = Vec::new();
        if self.sort_by_required == Some(true) {
            by.push("required".to_string());
        }
        if self.sort_by_type == Some(true) {
            by.push("type".to_string());
        }

        Config {
            formatter: Some(self.formatter.clone()),
            header_from: self.header_from.clone(),
            sections: Sections {
                show: self.show.clone(),
                hide: self.hide.clone(),
                show_all: self.show_all,
                hide_all: self.hide_all,
            },
            output_values: OutputValues {
                enabled: self.output_values,
                from: self.output_values_from.clone(),
            },
            sort: Sort {
                enabled: self.sort,
                by,
            },
            settings: SettingsConfig {
                anchors: self.anchor,
                color: self.color,
                escape: self.escape,
                indent: self.indent,
                required: self.required,
                sensitive: self.sensitive,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("moddoc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positionals() {
        let cli = parse(&["markdown table", "module.json"]);
        assert_eq!(cli.formatter, "markdown table");
        assert_eq!(cli.module, PathBuf::from("module.json"));
        assert_eq!(cli.overrides().formatter.as_deref(), Some("markdown table"));
    }

    #[test]
    fn test_bool_flags_take_optional_value() {
        let cli = parse(&["--anchor=false", "--escape", "--show-all", "md", "m.json"]);
        assert_eq!(cli.anchor, Some(false));
        assert_eq!(cli.escape, Some(true));
        assert_eq!(cli.show_all, Some(true));
        assert_eq!(cli.color, None);
        assert_eq!(cli.formatter, "md");
    }

    #[test]
    fn test_section_lists() {
        let cli = parse(&["--show", "inputs,outputs", "--hide", "header", "--hide", "resources", "md", "m.json"]);
        let cfg = cli.overrides();
        assert_eq!(cfg.sections.show, ["inputs", "outputs"]);
        assert_eq!(cfg.sections.hide, ["header", "resources"]);
    }

    #[test]
    fn test_sort_flags_become_keys() {
        let cfg = parse(&["--sort-by-required", "--sort-by-type=false", "md", "m.json"]).overrides();
        assert_eq!(cfg.sort.by, ["required"]);
        assert_eq!(cfg.sort.enabled, None);
    }

    #[test]
    fn test_unset_flags_stay_unset() {
        let cfg = parse(&["json", "m.json"]).overrides();
        assert_eq!(
            cfg,
            Config {
                formatter: Some("json".into()),
                ..Default::default()
            }
        );
    }
}
