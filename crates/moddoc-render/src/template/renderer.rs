//! Named-fragment document templates.
//!
//! A [`DocumentTemplate`] is one root template composing the section
//! fragments with `{% include %}`, compiled once together with the shared
//! function namespace (see [`super::filters`]) and any dialect helpers.
//!
//! ```rust
//! use moddoc_render::template::{DocumentTemplate, Item, Markup};
//! use moddoc_render::{Module, Settings};
//!
//! let settings = Settings::default();
//! let template = DocumentTemplate::new(
//!     &settings,
//!     Markup::Markdown,
//!     Item::new("doc", "{% include \"inputs\" %}"),
//!     &[Item::new("inputs", "{{ indent(0, '#') }} Inputs: {{ module.inputs | length }}")],
//!     |_| {},
//! )
//! .unwrap();
//!
//! assert_eq!(template.render(&Module::default()).unwrap(), "## Inputs: 0");
//! ```

use minijinja::Environment;

use super::context::TemplateContext;
use super::engine::{MiniJinjaEngine, TemplateEngine};
use super::filters::{register_functions, Markup};
use crate::error::RenderError;
use crate::module::Module;
use crate::settings::Settings;

/// Names every template may read besides registered globals.
const CONTEXT_KEYS: &[&str] = &["module", "settings", "loop"];

/// A named template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub name: &'static str,
    pub text: &'static str,
}

impl Item {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }
}

/// A compiled document: root template, fragments and bound functions.
pub struct DocumentTemplate {
    engine: Box<dyn TemplateEngine>,
    root: &'static str,
    settings: Settings,
}

impl DocumentTemplate {
    /// Compiles `root` and `items` with the shared functions bound to
    /// `settings`. `customize` registers dialect helpers before anything is
    /// checked.
    ///
    /// # Errors
    ///
    /// [`RenderError::TemplateError`] when a template does not parse, or
    /// reads a name that is neither a context key nor a registered function.
    pub fn new<F>(
        settings: &Settings,
        markup: Markup,
        root: Item,
        items: &[Item],
        customize: F,
    ) -> Result<Self, RenderError>
    where
        F: FnOnce(&mut Environment<'static>),
    {
        let mut engine = MiniJinjaEngine::new();
        register_functions(engine.environment_mut(), settings, markup);
        customize(engine.environment_mut());

        for item in items.iter().chain(std::iter::once(&root)) {
            engine.add_template(item.name, item.text)?;
        }
        for item in items.iter().chain(std::iter::once(&root)) {
            check_names(&engine, item.name)?;
        }

        Ok(Self {
            engine: Box::new(engine),
            root: root.name,
            settings: settings.clone(),
        })
    }

    /// Renders `module` through the root template.
    ///
    /// The output is raw: callers run [`crate::sanitize::sanitize`] over it.
    pub fn render(&self, module: &Module) -> Result<String, RenderError> {
        tracing::debug!(template = self.root, "rendering document");
        let context = TemplateContext::new(module, &self.settings);
        let data = serde_json::to_value(&context)?;
        self.engine.render_named(self.root, &data)
    }
}

fn check_names(engine: &dyn TemplateEngine, template: &str) -> Result<(), RenderError> {
    let mut unknown: Vec<String> = engine
        .undeclared_variables(template)?
        .into_iter()
        .filter(|name| !CONTEXT_KEYS.contains(&name.as_str()) && !engine.is_global(name))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort();
    Err(RenderError::TemplateError(format!(
        "template '{}' references undefined name(s): {}",
        template,
        unknown.join(", ")
    )))
}
