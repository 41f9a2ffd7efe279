//! The documented module entity graph.
//!
//! A [`Module`] is produced by an external extraction step and handed to the
//! renderer fully populated. It deserializes from JSON:
//!
//! ```rust
//! use moddoc_render::Module;
//!
//! let module: Module = serde_json::from_str(r#"{
//!     "header": "Network module",
//!     "inputs": [
//!         { "name": "cidr", "type": "string", "required": true },
//!         { "name": "tags", "type": "map(string)", "default": {} }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(module.inputs.len(), 2);
//! assert_eq!(module.inputs[0].value_text(), "");
//! assert_eq!(module.inputs[1].value_text(), "{}");
//! ```
//!
//! # Ordering
//!
//! Sections are rendered in the order they are stored. [`Module::sort`] is the
//! single place where that order is decided; templates never re-sort.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The documented unit of infrastructure configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    pub header: String,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub providers: Vec<Provider>,
    pub requirements: Vec<Requirement>,
    pub resources: Vec<Resource>,
    #[serde(alias = "modules")]
    pub module_calls: Vec<ModuleCall>,
}

/// Which sort rules apply to a module.
///
/// `required` and `type` only refine inputs; every section is sorted by name
/// when `name` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortBy {
    pub name: bool,
    pub required: bool,
    pub r#type: bool,
}

impl Module {
    /// Reorders every section according to `sort`.
    ///
    /// With `sort.name` off, extraction order (by `position`) is kept.
    pub fn sort(&mut self, sort: &SortBy) {
        if !sort.name {
            self.inputs.sort_by_key(|i| i.position);
            self.outputs.sort_by_key(|o| o.position);
            self.providers.sort_by_key(|p| p.position);
            self.resources.sort_by_key(|r| r.position);
            self.module_calls.sort_by_key(|m| m.position);
            return;
        }

        if sort.required {
            self.inputs.sort_by(|a, b| {
                b.required
                    .cmp(&a.required)
                    .then_with(|| a.name.cmp(&b.name))
            });
        } else if sort.r#type {
            self.inputs.sort_by(|a, b| {
                compare_types(&a.r#type, &b.r#type).then_with(|| a.name.cmp(&b.name))
            });
        } else {
            self.inputs.sort_by(|a, b| a.name.cmp(&b.name));
        }

        self.outputs.sort_by(|a, b| a.name.cmp(&b.name));
        self.providers.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.alias.cmp(&b.alias))
        });
        self.requirements.sort_by(|a, b| a.name.cmp(&b.name));
        self.resources
            .sort_by(|a, b| a.full_type().cmp(&b.full_type()).then_with(|| a.name.cmp(&b.name)));
        self.module_calls.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

// Types compare by their leading keyword (`list(string)` groups with `list`),
// then by the full expression.
fn compare_types(a: &str, b: &str) -> Ordering {
    let head = |t: &str| -> String {
        t.split(|c: char| c == '(' || c.is_whitespace())
            .next()
            .unwrap_or_default()
            .to_string()
    };
    head(a).cmp(&head(b)).then_with(|| a.cmp(b))
}

/// A module input variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Input {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub description: String,
    /// `None` when the input has no default, `Some(Value::Null)` for an
    /// explicit `null` default.
    #[serde(
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    pub required: bool,
    pub position: usize,
}

impl Input {
    /// The default rendered as text, or `""` when there is none.
    pub fn value_text(&self) -> String {
        self.default.as_ref().map(value_to_text).unwrap_or_default()
    }

    /// Whether the input declares a default at all.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// A module output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    pub name: String,
    pub description: String,
    #[serde(
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    pub sensitive: bool,
    pub position: usize,
}

impl Output {
    /// The output value rendered as text, or `""` when it was never loaded.
    pub fn value_text(&self) -> String {
        self.value.as_ref().map(value_to_text).unwrap_or_default()
    }
}

/// A provider used by the module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub name: String,
    pub alias: String,
    pub version: String,
    pub position: usize,
}

impl Provider {
    /// `name.alias` for aliased providers, `name` otherwise.
    pub fn full_name(&self) -> String {
        if self.alias.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.alias)
        }
    }
}

/// A version constraint on the runtime or a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirement {
    pub name: String,
    pub version: String,
}

/// A managed resource or data source declared by the module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    #[serde(rename = "type")]
    pub r#type: String,
    pub name: String,
    pub provider_name: String,
    pub provider_source: String,
    /// `managed` or `data`.
    pub mode: String,
    pub version: String,
    pub position: usize,
}

impl Resource {
    /// `{provider}_{type}`, prefixed with `data.` for data sources.
    pub fn full_type(&self) -> String {
        if self.mode == "data" {
            format!("data.{}_{}", self.provider_name, self.r#type)
        } else {
            format!("{}_{}", self.provider_name, self.r#type)
        }
    }

    /// Link to the provider registry documentation, or `""` when the
    /// provider source is not a `namespace/name` registry address.
    pub fn url(&self) -> String {
        let parts: Vec<&str> = self.provider_source.split('/').collect();
        if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
            return String::new();
        }
        let version = if self.version.is_empty() {
            "latest"
        } else {
            self.version.as_str()
        };
        let kind = if self.mode == "data" {
            "data-sources"
        } else {
            "resources"
        };
        format!(
            "https://registry.terraform.io/providers/{}/{}/docs/{}/{}",
            self.provider_source, version, kind, self.r#type
        )
    }
}

/// A call to a child module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleCall {
    pub name: String,
    pub source: String,
    pub version: String,
    pub position: usize,
}

/// Renders a JSON value the way it reads in a module definition: scalars
/// compact (strings quoted), collections pretty-printed.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

// Keeps an explicit `null` distinct from an absent field.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
