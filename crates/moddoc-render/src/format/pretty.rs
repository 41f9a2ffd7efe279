//! Terminal listing, optionally colored.
//!
//! Entries print as `kind.name`, e.g. `input.vpc_id (required)`, followed by
//! their description. Names are cyan and descriptions dimmed when
//! `show_color` is on; styling is forced so piped output keeps its colors.

use console::Style;
use minijinja::Value;

use super::{Printer, ROOT};
use crate::error::RenderError;
use crate::module::Module;
use crate::sanitize::sanitize;
use crate::settings::Settings;
use crate::template::filters::text;
use crate::template::{DocumentTemplate, Item, Markup};

const HEADER: &str = r#"{% if settings.show_header and module.header %}
{{ module.header | colorize('muted') }}

{% endif %}
"#;

const REQUIREMENTS: &str = r#"{% if settings.show_requirements %}
{% for r in module.requirements %}
{{ ('requirement.' ~ r.name ~ ((' (' ~ r.version ~ ')') if r.version else '')) | colorize('name') }}
{% endfor %}

{% endif %}
"#;

const PROVIDERS: &str = r#"{% if settings.show_providers %}
{% for p in module.providers %}
{{ ('provider.' ~ p.full_name ~ ((' (' ~ p.version ~ ')') if p.version else '')) | colorize('name') }}
{% endfor %}

{% endif %}
"#;

const MODULES: &str = r#"{% if settings.show_module_calls %}
{% for m in module.module_calls %}
{{ ('module.' ~ m.name) | colorize('name') }} ({{ m.source }}{{ (' ' ~ m.version) if m.version else '' }})
{% endfor %}

{% endif %}
"#;

const RESOURCES: &str = r#"{% if settings.show_resources %}
{% for r in module.resources %}
{{ ('resource.' ~ r.full_type ~ '.' ~ r.name) | colorize('name') }}{{ (' (' ~ r.url ~ ')') if r.url else '' }}
{% endfor %}

{% endif %}
"#;

const INPUTS: &str = r#"{% if settings.show_inputs %}
{% for i in module.inputs %}
{{ ('input.' ~ i.name) | colorize('name') }} ({{ i.default if i.has_default else 'required' }})
{{ (i.description | trim or 'n/a') | colorize('muted') }}

{% endfor %}

{% endif %}
"#;

const OUTPUTS: &str = r#"{% if settings.show_outputs %}
{% for o in module.outputs %}
{{ ('output.' ~ o.name) | colorize('name') }}{{ (' (' ~ output_value(o.sensitive, o.value) ~ ')') if settings.output_values else '' }}
{{ (o.description | trim or 'n/a') | colorize('muted') }}

{% endfor %}

{% endif %}
"#;

/// Colored terminal printer, registered as `pretty`.
pub struct Pretty {
    template: DocumentTemplate,
}

impl Pretty {
    pub fn new(settings: &Settings) -> Result<Self, RenderError> {
        let color = settings.show_color;
        let template = DocumentTemplate::new(
            settings,
            Markup::Markdown,
            Item::new("pretty", ROOT),
            &[
                Item::new("header", HEADER),
                Item::new("requirements", REQUIREMENTS),
                Item::new("providers", PROVIDERS),
                Item::new("modules", MODULES),
                Item::new("resources", RESOURCES),
                Item::new("inputs", INPUTS),
                Item::new("outputs", OUTPUTS),
            ],
            |env| {
                env.add_filter("colorize", move |value: Value, role: String| -> String {
                    colorize(&text(&value), &role, color)
                })
            },
        )?;
        Ok(Self { template })
    }
}

impl Printer for Pretty {
    fn print(&self, module: &Module, _settings: &Settings) -> Result<String, RenderError> {
        let rendered = self.template.render(module)?;
        Ok(sanitize(&rendered))
    }
}

fn colorize(text: &str, role: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    let style = match role {
        "name" => Style::new().cyan(),
        "muted" => Style::new().black().bright(),
        _ => Style::new(),
    };
    style.force_styling(true).apply_to(text).to_string()
}
