//! Variable-definition skeletons (`.tfvars`) in HCL and JSON.
//!
//! Every input is listed regardless of section visibility. Inputs without a
//! default get `""` so the file is a ready-to-fill template.

use serde_json::{Map, Value};

use super::Printer;
use crate::error::RenderError;
use crate::module::{value_to_text, Input, Module};
use crate::settings::Settings;
use crate::util::{display_width, pad_right};

/// HCL printer, registered as `tfvars hcl`. Assignments align on `=`.
pub struct TfvarsHcl;

impl Printer for TfvarsHcl {
    fn print(&self, module: &Module, _settings: &Settings) -> Result<String, RenderError> {
        let width = module
            .inputs
            .iter()
            .map(|i| display_width(&i.name))
            .max()
            .unwrap_or(0);

        let lines: Vec<String> = module
            .inputs
            .iter()
            .map(|i| format!("{} = {}", pad_right(&i.name, width), hcl_value(i)))
            .collect();
        Ok(lines.join("\n"))
    }
}

fn hcl_value(input: &Input) -> String {
    match &input.default {
        None => "\"\"".to_string(),
        Some(value) => value_to_text(value),
    }
}

/// JSON printer, registered as `tfvars json`.
pub struct TfvarsJson;

impl Printer for TfvarsJson {
    fn print(&self, module: &Module, _settings: &Settings) -> Result<String, RenderError> {
        let mut map = Map::new();
        for input in &module.inputs {
            let value = input
                .default
                .clone()
                .unwrap_or_else(|| Value::String(String::new()));
            map.insert(input.name.clone(), value);
        }
        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }
}
