//! Loading `terraform output -json` style values into a module.

use std::collections::BTreeMap;

use moddoc_render::Module;
use serde::Deserialize;
use serde_json::Value;

/// One entry of an output values document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputValue {
    pub sensitive: bool,
    #[serde(rename = "type")]
    pub r#type: Value,
    pub value: Value,
}

/// Output values keyed by output name.
pub type OutputValues = BTreeMap<String, OutputValue>;

pub fn parse(text: &str) -> serde_json::Result<OutputValues> {
    serde_json::from_str(text)
}

/// Copies values and sensitivity onto the module's outputs, matched by name.
///
/// Outputs missing from `values` end up with a `null` value.
pub fn apply(module: &mut Module, values: &OutputValues) {
    for output in &mut module.outputs {
        match values.get(&output.name) {
            Some(loaded) => {
                output.value = Some(loaded.value.clone());
                output.sensitive = loaded.sensitive;
            }
            None => {
                tracing::warn!(output = %output.name, "no value found for output");
                output.value = Some(Value::Null);
            }
        }
    }
}
