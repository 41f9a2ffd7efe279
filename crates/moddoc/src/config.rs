//! Configuration file loading and settings resolution.
//!
//! A [`Config`] carries every scalar as `Option<T>`: `Some` means the value
//! was given explicitly, either in the YAML file or on the command line.
//! Defaults are only applied by [`Config::resolve`], which settles the
//! section modes, validates them, derives section visibility and flattens
//! everything into
//! the [`Settings`] the printers consume plus the [`Options`] the binary
//! needs around rendering.
//!
//! ```yaml
//! formatter: markdown table
//! header-from: header.md
//! sections:
//!   hide-all: true
//!   show: [inputs, outputs]
//! output-values:
//!   enabled: true
//!   from: outputs.json
//! sort:
//!   by: [required]
//! settings:
//!   indent: 3
//! ```

use std::path::{Path, PathBuf};

use moddoc_render::{Settings, SortBy};
use serde::Deserialize;
use thiserror::Error;

/// Section names accepted by `--show` and `--hide`.
pub const SECTIONS: [&str; 7] = [
    "header",
    "inputs",
    "modules",
    "outputs",
    "providers",
    "requirements",
    "resources",
];

/// Keys accepted by `sort.by`.
pub const SORT_TYPES: [&str; 2] = ["required", "type"];

const DEFAULT_HEADER_FROM: &str = "main.tf";

/// Errors raised while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("value of 'formatter' can't be empty")]
    EmptyFormatter,

    #[error("value of '--header-from' can't be empty")]
    EmptyHeaderFrom,

    #[error("'{0}' is not a valid section")]
    InvalidSection(String),

    #[error("'--show-all' and '--hide-all' can't be used together")]
    ShowAllWithHideAll,

    #[error("'--show-all' and '--show' can't be used together")]
    ShowAllWithShow,

    #[error("'--hide-all' and '--hide' can't be used together")]
    HideAllWithHide,

    #[error("value of '--output-values-from' can't be empty")]
    EmptyOutputValuesFrom,

    #[error("value of '--output-values-from' is missing")]
    MissingOutputValuesFrom,

    #[error("'{0}' is not a valid sort type")]
    InvalidSortType(String),

    #[error("'--sort-by-required' and '--sort-by-type' can't be used together")]
    ConflictingSortTypes,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Raw configuration, as read from YAML or assembled from flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub formatter: Option<String>,
    pub header_from: Option<String>,
    pub sections: Sections,
    pub output_values: OutputValues,
    pub sort: Sort,
    pub settings: SettingsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Sections {
    pub show: Vec<String>,
    pub hide: Vec<String>,
    pub show_all: Option<bool>,
    pub hide_all: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputValues {
    pub enabled: Option<bool>,
    pub from: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Sort {
    pub enabled: Option<bool>,
    pub by: Vec<String>,
}

/// The `settings:` block. Field names follow the YAML keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsConfig {
    pub anchors: Option<bool>,
    pub color: Option<bool>,
    pub escape: Option<bool>,
    pub indent: Option<usize>,
    pub required: Option<bool>,
    pub sensitive: Option<bool>,
}

/// Everything the binary needs besides [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub formatter: String,
    pub header_from: String,
    pub show_header: bool,
    pub output_values: bool,
    pub output_values_path: Option<PathBuf>,
    pub sort_by: SortBy,
}

impl Config {
    /// Reads a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn parse(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Overlays `overrides` on top of `self`. Explicit values in `overrides`
    /// win; a non-empty list replaces the list underneath.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            formatter: overrides.formatter.or(self.formatter),
            header_from: overrides.header_from.or(self.header_from),
            sections: Sections {
                show: pick_list(overrides.sections.show, self.sections.show),
                hide: pick_list(overrides.sections.hide, self.sections.hide),
                show_all: overrides.sections.show_all.or(self.sections.show_all),
                hide_all: overrides.sections.hide_all.or(self.sections.hide_all),
            },
            output_values: OutputValues {
                enabled: overrides.output_values.enabled.or(self.output_values.enabled),
                from: overrides.output_values.from.or(self.output_values.from),
            },
            sort: Sort {
                enabled: overrides.sort.enabled.or(self.sort.enabled),
                by: pick_list(overrides.sort.by, self.sort.by),
            },
            settings: SettingsConfig {
                anchors: overrides.settings.anchors.or(self.settings.anchors),
                color: overrides.settings.color.or(self.settings.color),
                escape: overrides.settings.escape.or(self.settings.escape),
                indent: overrides.settings.indent.or(self.settings.indent),
                required: overrides.settings.required.or(self.settings.required),
                sensitive: overrides.settings.sensitive.or(self.settings.sensitive),
            },
        }
    }

    /// Validates the configuration, then produces resolved settings.
    pub fn resolve(&self) -> Result<(Settings, Options)> {
        self.validate()?;
        let visibility = self.sections.process();
        let (settings, options) = self.extract(&visibility);
        tracing::debug!(?settings, ?options, "resolved settings");
        Ok((settings, options))
    }

    fn validate(&self) -> Result<()> {
        match self.formatter.as_deref() {
            None | Some("") => return Err(ConfigError::EmptyFormatter),
            Some(_) => {}
        }
        if self.header_from.as_deref() == Some("") {
            return Err(ConfigError::EmptyHeaderFrom);
        }
        self.sections.validate()?;
        self.output_values.validate()?;
        self.sort.validate()
    }

    fn extract(&self, visible: &Visibility) -> (Settings, Options) {
        let output_values = self.output_values.enabled.unwrap_or(false);
        let sort_enabled = self.sort.enabled.unwrap_or(true);
        let sort_by = SortBy {
            name: sort_enabled,
            required: sort_enabled && self.sort.has("required"),
            r#type: sort_enabled && self.sort.has("type"),
        };

        let settings = Settings {
            show_header: visible.header,
            show_inputs: visible.inputs,
            show_module_calls: visible.modules,
            show_outputs: visible.outputs,
            show_providers: visible.providers,
            show_requirements: visible.requirements,
            show_resources: visible.resources,
            escape_characters: self.settings.escape.unwrap_or(true),
            indent_level: self.settings.indent.unwrap_or(2),
            show_required: self.settings.required.unwrap_or(true),
            show_sensitivity: self.settings.sensitive.unwrap_or(true),
            show_anchors: self.settings.anchors.unwrap_or(true),
            output_values,
            sort_by_name: sort_by.name,
            sort_by_required: sort_by.required,
            sort_by_type: sort_by.r#type,
            show_color: self.settings.color.unwrap_or(true),
        };

        let options = Options {
            formatter: self.formatter.clone().unwrap_or_default(),
            header_from: self
                .header_from
                .clone()
                .unwrap_or_else(|| DEFAULT_HEADER_FROM.to_string()),
            show_header: visible.header,
            output_values,
            output_values_path: self
                .output_values
                .from
                .as_ref()
                .filter(|_| output_values)
                .map(PathBuf::from),
            sort_by,
        };

        (settings, options)
    }
}

fn pick_list(preferred: Vec<String>, fallback: Vec<String>) -> Vec<String> {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}

/// Visibility of each section after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Visibility {
    header: bool,
    inputs: bool,
    modules: bool,
    outputs: bool,
    providers: bool,
    requirements: bool,
    resources: bool,
}

impl Sections {
    fn validate(&self) -> Result<()> {
        if let Some(unknown) = self
            .show
            .iter()
            .chain(&self.hide)
            .find(|s| !SECTIONS.contains(&s.as_str()))
        {
            return Err(ConfigError::InvalidSection(unknown.clone()));
        }

        let (show_all, hide_all) = self.modes();
        if show_all && hide_all {
            return Err(ConfigError::ShowAllWithHideAll);
        }
        if show_all && !self.show.is_empty() {
            return Err(ConfigError::ShowAllWithShow);
        }
        if hide_all && !self.hide.is_empty() {
            return Err(ConfigError::HideAllWithHide);
        }
        Ok(())
    }

    /// Settles the bulk modes: an explicit hide-all turns off the default
    /// show-all, and without show-all everything starts hidden.
    fn modes(&self) -> (bool, bool) {
        let mut show_all = self.show_all.unwrap_or(true);
        let mut hide_all = self.hide_all.unwrap_or(false);

        if hide_all && self.show_all.is_none() {
            show_all = false;
        }
        if !show_all && self.hide_all.is_none() {
            hide_all = true;
        }
        (show_all, hide_all)
    }

    /// Evaluates every section under the settled bulk modes.
    fn process(&self) -> Visibility {
        let (show_all, hide_all) = self.modes();
        let visible = |section: &str| self.visible(section, show_all, hide_all);
        Visibility {
            header: visible("header"),
            inputs: visible("inputs"),
            modules: visible("modules"),
            outputs: visible("outputs"),
            providers: visible("providers"),
            requirements: visible("requirements"),
            resources: visible("resources"),
        }
    }

    /// A hidden section stays hidden even when it is also listed in `show`.
    fn visible(&self, section: &str, show_all: bool, hide_all: bool) -> bool {
        let hidden = self.hide.iter().any(|s| s == section);
        if show_all && !hide_all {
            return !hidden;
        }
        !hidden && self.show.iter().any(|s| s == section)
    }
}

impl OutputValues {
    fn validate(&self) -> Result<()> {
        if self.enabled != Some(true) {
            return Ok(());
        }
        match self.from.as_deref() {
            None => Err(ConfigError::MissingOutputValuesFrom),
            Some("") => Err(ConfigError::EmptyOutputValuesFrom),
            Some(_) => Ok(()),
        }
    }
}

impl Sort {
    fn has(&self, key: &str) -> bool {
        self.by.iter().any(|b| b == key)
    }

    fn validate(&self) -> Result<()> {
        if let Some(unknown) = self.by.iter().find(|b| !SORT_TYPES.contains(&b.as_str())) {
            return Err(ConfigError::InvalidSortType(unknown.clone()));
        }
        if self.has("required") && self.has("type") {
            return Err(ConfigError::ConflictingSortTypes);
        }
        Ok(())
    }
}
