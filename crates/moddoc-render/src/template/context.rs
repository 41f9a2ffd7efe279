//! Template-facing views of a [`Module`].
//!
//! Fragments read `module.<section>` from the render context. The views below
//! flatten derived values (default text, provider full name, resource link)
//! into plain fields so templates never compute them.

use serde::Serialize;

use crate::module::{Input, Module, ModuleCall, Output, Provider, Requirement, Resource};
use crate::settings::Settings;

/// The complete render context: `{ module, settings }`.
#[derive(Debug, Serialize)]
pub struct TemplateContext<'a> {
    pub module: ModuleView<'a>,
    pub settings: &'a Settings,
}

impl<'a> TemplateContext<'a> {
    pub fn new(module: &'a Module, settings: &'a Settings) -> Self {
        Self {
            module: ModuleView::from(module),
            settings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModuleView<'a> {
    pub header: &'a str,
    pub inputs: Vec<InputView<'a>>,
    pub outputs: Vec<OutputView<'a>>,
    pub providers: Vec<ProviderView<'a>>,
    pub requirements: &'a [Requirement],
    pub resources: Vec<ResourceView<'a>>,
    pub module_calls: &'a [ModuleCall],
}

impl<'a> From<&'a Module> for ModuleView<'a> {
    fn from(module: &'a Module) -> Self {
        Self {
            header: &module.header,
            inputs: module.inputs.iter().map(InputView::from).collect(),
            outputs: module.outputs.iter().map(OutputView::from).collect(),
            providers: module.providers.iter().map(ProviderView::from).collect(),
            requirements: &module.requirements,
            resources: module.resources.iter().map(ResourceView::from).collect(),
            module_calls: &module.module_calls,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InputView<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub r#type: &'a str,
    pub description: &'a str,
    /// Default as source text, `""` when the input has none.
    pub default: String,
    pub has_default: bool,
    pub required: bool,
}

impl<'a> From<&'a Input> for InputView<'a> {
    fn from(input: &'a Input) -> Self {
        Self {
            name: &input.name,
            r#type: &input.r#type,
            description: &input.description,
            default: input.value_text(),
            has_default: input.has_default(),
            required: input.required,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OutputView<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub value: String,
    pub sensitive: bool,
}

impl<'a> From<&'a Output> for OutputView<'a> {
    fn from(output: &'a Output) -> Self {
        Self {
            name: &output.name,
            description: &output.description,
            value: output.value_text(),
            sensitive: output.sensitive,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProviderView<'a> {
    pub name: &'a str,
    pub alias: &'a str,
    pub full_name: String,
    pub version: &'a str,
}

impl<'a> From<&'a Provider> for ProviderView<'a> {
    fn from(provider: &'a Provider) -> Self {
        Self {
            name: &provider.name,
            alias: &provider.alias,
            full_name: provider.full_name(),
            version: &provider.version,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResourceView<'a> {
    pub name: &'a str,
    pub full_type: String,
    pub mode: &'a str,
    pub url: String,
}

impl<'a> From<&'a Resource> for ResourceView<'a> {
    fn from(resource: &'a Resource) -> Self {
        Self {
            name: &resource.name,
            full_type: resource.full_type(),
            mode: &resource.mode,
            url: resource.url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_shape() {
        let module: Module = serde_json::from_value(json!({
            "inputs": [{ "name": "a", "type": "number", "default": 3 }],
            "providers": [{ "name": "aws", "alias": "east" }],
            "resources": [{ "type": "instance", "name": "web", "provider_name": "aws",
                            "provider_source": "hashicorp/aws", "mode": "managed" }]
        }))
        .unwrap();
        let settings = Settings::default();
        let value = serde_json::to_value(TemplateContext::new(&module, &settings)).unwrap();

        assert_eq!(value["module"]["inputs"][0]["default"], "3");
        assert_eq!(value["module"]["inputs"][0]["has_default"], true);
        assert_eq!(value["module"]["providers"][0]["full_name"], "aws.east");
        assert_eq!(value["module"]["resources"][0]["full_type"], "aws_instance");
        assert_eq!(
            value["module"]["resources"][0]["url"],
            "https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/instance"
        );
        assert_eq!(value["settings"]["indent_level"], 2);
    }
}
