//! Structured output: JSON, YAML and XML.
//!
//! All three serialize the same [`DocumentView`]. Hidden sections serialize
//! as empty; output values appear only when `output_values` is on, with
//! sensitive ones replaced by the `<sensitive>` placeholder.

use serde::Serialize;
use serde_json::Value;

use super::Printer;
use crate::error::RenderError;
use crate::module::{value_to_text, Module, ModuleCall, Requirement};
use crate::settings::Settings;
use crate::template::SENSITIVE_PLACEHOLDER;

/// A module as structured formats see it. `V` is how defaults and values
/// are carried: JSON values for JSON and YAML, source text for XML.
#[derive(Debug, Serialize)]
pub struct DocumentView<V> {
    pub header: String,
    pub inputs: Vec<InputEntry<V>>,
    pub modules: Vec<ModuleCall>,
    pub outputs: Vec<OutputEntry<V>>,
    pub providers: Vec<ProviderEntry>,
    pub requirements: Vec<Requirement>,
    pub resources: Vec<ResourceEntry>,
}

#[derive(Debug, Serialize)]
pub struct InputEntry<V> {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub description: String,
    pub default: V,
    pub required: bool,
}

#[derive(Debug, Serialize)]
pub struct OutputEntry<V> {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ProviderEntry {
    pub name: String,
    pub alias: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ResourceEntry {
    #[serde(rename = "type")]
    pub r#type: String,
    pub name: String,
    pub provider: String,
    pub source: String,
    pub mode: String,
    pub version: String,
}

impl<V> DocumentView<V> {
    /// Builds the view, converting defaults and values with `convert`.
    pub fn build<F>(module: &Module, settings: &Settings, convert: F) -> Self
    where
        F: Fn(&Value) -> V,
    {
        let header = if settings.show_header {
            module.header.clone()
        } else {
            String::new()
        };
        let inputs = if settings.show_inputs {
            module
                .inputs
                .iter()
                .map(|i| InputEntry {
                    name: i.name.clone(),
                    r#type: i.r#type.clone(),
                    description: i.description.clone(),
                    default: convert(i.default.as_ref().unwrap_or(&Value::Null)),
                    required: i.required,
                })
                .collect()
        } else {
            Vec::new()
        };
        let outputs = if settings.show_outputs {
            module
                .outputs
                .iter()
                .map(|o| {
                    let (value, sensitive) = if settings.output_values {
                        let value = if o.sensitive {
                            Value::String(SENSITIVE_PLACEHOLDER.to_string())
                        } else {
                            o.value.clone().unwrap_or(Value::Null)
                        };
                        (Some(convert(&value)), Some(o.sensitive))
                    } else {
                        (None, None)
                    };
                    OutputEntry {
                        name: o.name.clone(),
                        description: o.description.clone(),
                        value,
                        sensitive,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };
        let providers = if settings.show_providers {
            module
                .providers
                .iter()
                .map(|p| ProviderEntry {
                    name: p.name.clone(),
                    alias: p.alias.clone(),
                    version: p.version.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };
        let resources = if settings.show_resources {
            module
                .resources
                .iter()
                .map(|r| ResourceEntry {
                    r#type: r.r#type.clone(),
                    name: r.name.clone(),
                    provider: r.provider_name.clone(),
                    source: r.provider_source.clone(),
                    mode: r.mode.clone(),
                    version: r.version.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            header,
            inputs,
            modules: visible(settings.show_module_calls, &module.module_calls),
            outputs,
            providers,
            requirements: visible(settings.show_requirements, &module.requirements),
            resources,
        }
    }
}

fn visible<T: Clone>(shown: bool, items: &[T]) -> Vec<T> {
    if shown {
        items.to_vec()
    } else {
        Vec::new()
    }
}

/// JSON printer, registered as `json`.
pub struct Json;

impl Printer for Json {
    fn print(&self, module: &Module, settings: &Settings) -> Result<String, RenderError> {
        let view = DocumentView::build(module, settings, Value::clone);
        Ok(serde_json::to_string_pretty(&view)?)
    }
}

/// YAML printer, registered as `yaml`.
pub struct Yaml;

impl Printer for Yaml {
    fn print(&self, module: &Module, settings: &Settings) -> Result<String, RenderError> {
        let view = DocumentView::build(module, settings, Value::clone);
        let yaml = serde_yaml::to_string(&view)?;
        Ok(yaml.trim_end().to_string())
    }
}

/// XML printer, registered as `xml`. The root element is `<module>`.
pub struct Xml;

impl Printer for Xml {
    fn print(&self, module: &Module, settings: &Settings) -> Result<String, RenderError> {
        let view = DocumentView::build(module, settings, |v| match v {
            Value::Null => String::new(),
            other => value_to_text(other),
        });
        Ok(quick_xml::se::to_string_with_root("module", &view)?)
    }
}
