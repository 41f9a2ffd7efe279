//! Markdown with one table per section.

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
| Name | Version |
|------|---------|
{% for r in module.requirements %}
| {{ anchor(r.name, 'requirements') }} | {{ r.version | na }} |
{% endfor %}
{% endif %}

{% endif %}
"#;

const PROVIDERS: &str = r#"{% if settings.show_providers %}
{{ indent(0, '#') }} Providers

{% if not module.providers %}
No provider.
{% else %}
| Name | Version |
|------|---------|
{% for p in module.providers %}
| {{ anchor(p.full_name, 'providers') }} | {{ p.version | na }} |
{% endfor %}
{% endif %}

{% endif %}
"#;

const MODULES: &str = r#"{% if settings.show_module_calls %}
{{ indent(0, '#') }} Modules

{% if not module.module_calls %}
No Modules.
{% else %}
| Name | Source | Version |
|------|--------|---------|
{% for m in module.module_calls %}
| {{ anchor(m.name, 'modules') }} | {{ m.source }} | {{ m.version }} |
{% endfor %}
{% endif %}

{% endif %}
"#;

const RESOURCES: &str = r#"{% if settings.show_resources %}
{{ indent(0, '#') }} Resources

{% if not module.resources %}
No resources.
{% else %}
| Name |
|------|
{% for r in module.resources %}
| {{ ('[' ~ r.full_type ~ '](' ~ r.url ~ ')') if r.url else r.full_type }} |
{% endfor %}
{% endif %}

{% endif %}
"#;

const INPUTS: &str = r#"{% if settings.show_inputs %}
{{ indent(0, '#') }} Inputs

{% if not module.inputs %}
No input.
{% else %}
| Name | Description | Type | Default |{{ ' Required |' if settings.show_required else '' }}
|------|-------------|------|---------|{{ ':--------:|' if settings.show_required else '' }}
{% for i in module.inputs %}
| {{ anchor(i.name, 'inputs') }} | {{ i.description | sanitize_tbl }} | {{ i.type | type | sanitize_tbl }} | {{ i.default | value | sanitize_tbl }} |{{ (' yes |' if i.required else ' no |') if settings.show_required else '' }}
{% endfor %}
{% endif %}

{% endif %}
"#;

const OUTPUTS: &str = r#"{% if settings.show_outputs %}
{{ indent(0, '#') }} Outputs

{% if not module.outputs %}
No output.
{% else %}
{% set sensitivity = settings.output_values and settings.show_sensitivity %}
| Name | Description |{{ ' Value |' if settings.output_values else '' }}{{ ' Sensitive |' if sensitivity else '' }}
|------|-------------|{{ '-------|' if settings.output_values else '' }}{{ ':---------:|' if sensitivity else '' }}
{% for o in module.outputs %}
| {{ anchor(o.name, 'outputs') }} | {{ o.description | sanitize_tbl }} |{{ (' ' ~ (output_value(o.sensitive, o.value) | value | sanitize_tbl) ~ ' |') if settings.output_values else '' }}{{ (' yes |' if o.sensitive else ' no |') if sensitivity else '' }}
{% endfor %}
{% endif %}

{% endif %}
"#;

/// Markdown table printer, registered as `markdown table` and aliases.
pub struct MarkdownTable {
    template: DocumentTemplate,
}

impl MarkdownTable {
    pub fn new(settings: &Settings) -> Result<Self, RenderError> {
        let template = DocumentTemplate::new(
            settings,
            Markup::Markdown,
            Item::new("table", ROOT),
            &[
                Item::new("header", HEADER),
                Item::new("requirements", REQUIREMENTS),
                Item::new("providers", PROVIDERS),
                Item::new("modules", MODULES),
                Item::new("resources", RESOURCES),
                Item::new("inputs", INPUTS),
                Item::new("outputs", OUTPUTS),
            ],
            |env| register_code_filters(env, Markup::Markdown, true),
        )?;
        Ok(Self { template })
    }
}

impl Printer for MarkdownTable {
    fn print(&self, module: &Module, _settings: &Settings) -> Result<String, RenderError> {
        let rendered = self.template.render(module)?;
        Ok(sanitize(&rendered))
    }
}
