//! AsciiDoc as prose.

use super::{register_code_filters, Printer, HEADER, ROOT};
use crate::error::RenderError;
use crate::module::Module;
use crate::sanitize::sanitize;
use crate::settings::Settings;
use crate::template::{DocumentTemplate, Item, Markup};

const REQUIREMENTS: &str = r#"{% if settings.show_requirements %}
{{ indent(0, '=') }} Requirements

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
{{ indent(0, '=') }} Providers

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
{{ indent(0, '=') }} Modules

{% if not module.module_calls %}
No Modules.
{% else %}
The following Modules are called:

{% for m in module.module_calls %}
{{ indent(1, '=') }} {{ anchor(m.name, 'modules') }}

Source: {{ m.source }}

Version: {{ m.version | na }}

{% endfor %}
{% endif %}

{% endif %}
"#;

const RESOURCES: &str = r#"{% if settings.show_resources %}
{{ indent(0, '=') }} Resources

{% if not module.resources %}
No resources.
{% else %}
The following resources are used by this module:

{% for r in module.resources %}
- {{ (r.url ~ '[' ~ r.full_type ~ ']') if r.url else r.full_type }} ({{ 'data source' if r.mode == 'data' else 'resource' }})
{% endfor %}
{% endif %}

{% endif %}
"#;

const INPUTS: &str = r#"{% if settings.show_inputs %}
{% if not module.inputs %}
{{ indent(0, '=') }} Inputs

No input.
{% elif settings.show_required %}
{{ indent(0, '=') }} Required Inputs

The following input variables are required:

{% for i in module.inputs if i.required %}
{{ indent(1, '=') }} {{ anchor(i.name, 'inputs') }}

Description: {{ i.description | sanitize_doc | na }}

Type: {{ i.type | type }}

{% else %}
No required input.

{% endfor %}
{{ indent(0, '=') }} Optional Inputs

The following input variables are optional (have default values):

{% for i in module.inputs if not i.required %}
{{ indent(1, '=') }} {{ anchor(i.name, 'inputs') }}

Description: {{ i.description | sanitize_doc | na }}

Type: {{ i.type | type }}

Default: {{ i.default | value }}

{% else %}
No optional input.

{% endfor %}
{% else %}
{{ indent(0, '=') }} Inputs

The following input variables are supported:

{% for i in module.inputs %}
{{ indent(1, '=') }} {{ anchor(i.name, 'inputs') }}

Description: {{ i.description | sanitize_doc | na }}

Type: {{ i.type | type }}

Default: {{ i.default | value }}

{% endfor %}
{% endif %}

{% endif %}
"#;

const OUTPUTS: &str = r#"{% if settings.show_outputs %}
{{ indent(0, '=') }} Outputs

{% if not module.outputs %}
No output.
{% else %}
The following outputs are exported:

{% for o in module.outputs %}
{{ indent(1, '=') }} {{ anchor(o.name, 'outputs') }}

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

/// AsciiDoc document printer, registered as `asciidoc document` and aliases.
pub struct AsciidocDocument {
    template: DocumentTemplate,
}

impl AsciidocDocument {
    pub fn new(settings: &Settings) -> Result<Self, RenderError> {
        let template = DocumentTemplate::new(
            settings,
            Markup::AsciiDoc,
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
            |env| register_code_filters(env, Markup::AsciiDoc, false),
        )?;
        Ok(Self { template })
    }
}

impl Printer for AsciidocDocument {
    fn print(&self, module: &Module, _settings: &Settings) -> Result<String, RenderError> {
        let rendered = self.template.render(module)?;
        Ok(sanitize(&rendered))
    }
}
