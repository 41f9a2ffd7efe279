//! Markdown as prose: one heading per entry instead of table rows.

use super::{register_code_filters, Printer, HEADER, ROOT};
use crate::error::RenderError;
use crate::module::Module;
use crate::sanitize::sanitize;
use crate::settings::Settings;
use crate::template::{DocumentTemplate, Item, Markup};

const REQUIREMENTS: &str = r#"{% if settings.show_requirements %}
{{ indent(0, '#') }} Requirements

{% if not module.requirements %}
No requirements.
{% else %}
The following requirements are needed by this module:

{% for r in module.requirements %}
- {{ anchor(r.name, 'requirements') }} ({{ r.version | na }})
{% endfor %}
{% endif %}

{% endif %}
"#;

const PROVIDERS: &str = r#"{% if settings.show_providers %}
{{ indent(0, '#') }} Providers

{% if not module.providers %}
No provider.
{% else %}
The following providers are used by this module:

{% for p in module.providers %}
- {{ anchor(p.full_name, 'providers') }} ({{ p.version | na }})
{% endfor %}
{% endif %}

{% endif %}
"#;

const MODULES: &str = r#"{% if settings.show_module_calls %}
{{ indent(0, '#') }} Modules

{% if not module.module_calls %}
No Modules.
{% else %}
The following Modules are called:

{% for m in module.module_calls %}
{{ indent(1, '#') }} {{ anchor(m.name, 'modules') }}

Source: {{ m.source }}

Version: {{ m.version | na }}

{% endfor %}
{% endif %}

{% endif %}
"#;

const RESOURCES: &str = r#"{% if settings.show_resources %}
{{ indent(0, '#') }} Resources

{% if not module.resources %}
No resources.
{% else %}
The following resources are used by this module:

{% for r in module.resources %}
- {{ ('[' ~ r.full_type ~ '](' ~ r.url ~ ')') if r.url else r.full_type }} ({{ 'data source' if r.mode == 'data' else 'resource' }})
{% endfor %}
{% endif %}

{% endif %}
"#;

const INPUTS: &str = r#"{% if settings.show_inputs %}
{% if not module.inputs %}
{{ indent(0, '#') }} Inputs

No input.
{% elif settings.show_required %}
{{ indent(0, '#') }} Required Inputs

The following input variables are required:

{% for i in module.inputs if i.required %}
{{ indent(1, '#') }} {{ anchor(i.name, 'inputs') }}

Description: {{ i.description | sanitize_doc | na }}

Type: {{ i.type | type }}

{% else %}
No required input.

{% endfor %}
{{ indent(0, '#') }} Optional Inputs

The following input variables are optional (have default values):

{% for i in module.inputs if not i.required %}
{{ indent(1, '#') }} {{ anchor(i.name, 'inputs') }}

Description: {{ i.description | sanitize_doc | na }}

Type: {{ i.type | type }}

Default: {{ i.default | value }}

{% else %}
No optional input.

{% endfor %}
{% else %}
{{ indent(0, '#') }} Inputs

The following input variables are supported:

{% for i in module.inputs %}
{{ indent(1, '#') }} {{ anchor(i.name, 'inputs') }}

Description: {{ i.description | sanitize_doc | na }}

Type: {{ i.type | type }}

Default: {{ i.default | value }}

{% endfor %}
{% endif %}

{% endif %}
"#;

const OUTPUTS: &str = r#"{% if settings.show_outputs %}
{{ indent(0, '#') }} Outputs

{% if not module.outputs %}
No output.
{% else %}
The following outputs are exported:

{% for o in module.outputs %}
{{ indent(1, '#') }} {{ anchor(o.name, 'outputs') }}

Description: {{ o.description | sanitize_doc | na }}

{% if settings.output_values %}
Value: {{ output_value(o.sensitive, o.value) | value }}

{% if settings.show_sensitivity %}
Sensitive: {{ 'yes' if o.sensitive else 'no' }}

{% endif %}
{% endif %}
{% endfor %}
{% endif %}

{% endif %}
"#;

/// Markdown document printer, registered as `markdown document` and aliases.
pub struct MarkdownDocument {
    template: DocumentTemplate,
}

impl MarkdownDocument {
    pub fn new(settings: &Settings) -> Result<Self, RenderError> {
        let template = DocumentTemplate::new(
            settings,
            Markup::Markdown,
            Item::new("document", ROOT),
            &[
                Item::new("header", HEADER),
                Item::new("requirements", REQUIREMENTS),
                Item::new("providers", PROVIDERS),
                Item::new("modules", MODULES),
                Item::new("resources", RESOURCES),
                Item::new("inputs", INPUTS),
                Item::new("outputs", OUTPUTS),
            ],
            |env| register_code_filters(env, Markup::Markdown, false),
        )?;
        Ok(Self { template })
    }
}

impl Printer for MarkdownDocument {
    fn print(&self, module: &Module, _settings: &Settings) -> Result<String, RenderError> {
        let rendered = self.template.render(module)?;
        Ok(sanitize(&rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::only;
    use crate::module::{Input, Output, Provider, Resource};
    use serde_json::json;

    fn print(module: &Module, settings: &Settings) -> String {
        MarkdownDocument::new(settings)
            .unwrap()
            .print(module, settings)
            .unwrap()
    }

    fn inputs() -> Module {
        Module {
            inputs: vec![
                Input {
                    name: "name".into(),
                    r#type: "string".into(),
                    description: "Name of the\nthing".into(),
                    required: true,
                    ..Default::default()
                },
                Input {
                    name: "list".into(),
                    r#type: "list(string)".into(),
                    default: Some(json!(["a"])),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_required_and_optional_inputs() {
        let out = print(&inputs(), &only(|s| {
            s.show_inputs = true;
            s.show_anchors = false;
        }));
        assert_eq!(
            out,
            "## Required Inputs\n\n\
             The following input variables are required:\n\n\
             ### name\n\n\
             Description: Name of the  \nthing\n\n\
             Type: `string`\n\n\
             ## Optional Inputs\n\n\
             The following input variables are optional (have default values):\n\n\
             ### list\n\n\
             Description: n/a\n\n\
             Type: `list(string)`\n\n\
             Default:\n\n\
             ```json\n[\n  \"a\"\n]\n```"
        );
    }

    #[test]
    fn test_inputs_without_required_split() {
        let out = print(&inputs(), &only(|s| {
            s.show_inputs = true;
            s.show_required = false;
            s.show_anchors = false;
        }));
        assert!(out.starts_with("## Inputs\n\nThe following input variables are supported:\n\n### name\n"));
        assert!(out.contains("### name\n\nDescription: Name of the  \nthing\n\nType: `string`\n\nDefault: n/a\n\n### list"));
    }

    #[test]
    fn test_no_required_input() {
        let module = Module {
            inputs: vec![Input {
                name: "x".into(),
                default: Some(json!(null)),
                ..Default::default()
            }],
            ..Default::default()
        };
        let out = print(&module, &only(|s| s.show_inputs = true));
        assert!(out.contains("The following input variables are required:\n\nNo required input.\n\n## Optional Inputs"));
        assert!(out.contains("Type: n/a\n\nDefault: `null`"));
    }

    #[test]
    fn test_outputs_with_sensitive_value() {
        let module = Module {
            outputs: vec![Output {
                name: "password".into(),
                description: "Admin password".into(),
                value: Some(json!("hunter2")),
                sensitive: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        let out = print(&module, &only(|s| {
            s.show_outputs = true;
            s.output_values = true;
        }));
        assert_eq!(
            out,
            "## Outputs\n\n\
             The following outputs are exported:\n\n\
             ### <a name=\"outputs_password\"></a> [password](#outputs_password)\n\n\
             Description: Admin password\n\n\
             Value: `<sensitive>`\n\n\
             Sensitive: yes"
        );
    }

    #[test]
    fn test_providers_and_resources() {
        let module = Module {
            providers: vec![Provider {
                name: "aws".into(),
                alias: "east".into(),
                version: ">= 3.0".into(),
                ..Default::default()
            }],
            resources: vec![Resource {
                r#type: "ami".into(),
                name: "ubuntu".into(),
                provider_name: "aws".into(),
                provider_source: "hashicorp/aws".into(),
                mode: "data".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let out = print(&module, &only(|s| {
            s.show_providers = true;
            s.show_resources = true;
            s.show_anchors = false;
        }));
        assert_eq!(
            out,
            "## Providers\n\n\
             The following providers are used by this module:\n\n\
             - aws.east (>= 3.0)\n\n\
             ## Resources\n\n\
             The following resources are used by this module:\n\n\
             - [data.aws_ami](https://registry.terraform.io/providers/hashicorp/aws/latest/docs/data-sources/ami) (data source)"
        );
    }

    #[test]
    fn test_empty_sections() {
        let out = print(&Module::default(), &only(|s| {
            s.show_module_calls = true;
            s.show_inputs = true;
        }));
        assert_eq!(out, "## Modules\n\nNo Modules.\n\n## Inputs\n\nNo input.");
    }
}
