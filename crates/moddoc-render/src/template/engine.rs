//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait the document templates
//! render through. The implementation is [`MiniJinjaEngine`], configured for
//! line-oriented markup output.

use std::collections::HashSet;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::error::RenderError;

/// A template engine that can render named templates with data.
///
/// Template engines handle:
/// - Template compilation and caching
/// - Variable substitution and control flow
/// - Functions and filters registered on the environment
pub trait TemplateEngine: Send + Sync {
    /// Adds a named template to the engine.
    ///
    /// The template is compiled and cached for later use via
    /// [`render_named`](Self::render_named).
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;

    /// Names a template reads that it neither declares nor receives from an
    /// enclosing scope, e.g. context keys and global functions.
    fn undeclared_variables(&self, name: &str) -> Result<HashSet<String>, RenderError>;

    /// Whether `name` resolves to a global (a registered function or value).
    fn is_global(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// Blocks are trimmed (`trim_blocks`, `lstrip_blocks`), so a tag on its own
/// line leaves no trace in the output. Nothing is auto-escaped: every
/// dialect does its own escaping through the sanitizer filters.
///
/// # Example
///
/// ```rust
/// use moddoc_render::template::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let mut engine = MiniJinjaEngine::new();
/// engine
///     .add_template("list", "{% for i in items %}\n- {{ i }}\n{% endfor %}\n")
///     .unwrap();
/// let out = engine.render_named("list", &json!({ "items": ["a", "b"] })).unwrap();
/// assert_eq!(out, "- a\n- b\n");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        Self { env }
    }

    /// Returns a mutable reference to the underlying MiniJinja environment,
    /// for registering functions and filters.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    fn undeclared_variables(&self, name: &str) -> Result<HashSet<String>, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.undeclared_variables(false))
    }

    fn is_global(&self, name: &str) -> bool {
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return false;
        }
        let test = format!("{} is defined", name);
        self.env
            .compile_expression(&test)
            .and_then(|expr| expr.eval(()))
            .is_ok_and(|value| value.is_true())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_template() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("greeting", "Hello, {{ name }}!").unwrap();
        let output = engine
            .render_named("greeting", &json!({ "name": "World" }))
            .unwrap();
        assert_eq!(output, "Hello, World!");
    }

    #[test]
    fn test_blocks_are_trimmed() {
        let mut engine = MiniJinjaEngine::new();
        engine
            .add_template("t", "{% if on %}\n  shown\n{% endif %}\nend")
            .unwrap();
        assert_eq!(engine.render_named("t", &json!({ "on": true })).unwrap(), "  shown\nend");
        assert_eq!(engine.render_named("t", &json!({ "on": false })).unwrap(), "end");
    }

    #[test]
    fn test_no_auto_escape() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("t", "{{ v }}").unwrap();
        let out = engine.render_named("t", &json!({ "v": "<a name=\"x\">" })).unwrap();
        assert_eq!(out, "<a name=\"x\">");
    }

    #[test]
    fn test_syntax_error() {
        let mut engine = MiniJinjaEngine::new();
        let result = engine.add_template("bad", "{{ unclosed");
        assert!(matches!(result, Err(RenderError::TemplateError(_))));
    }

    #[test]
    fn test_missing_template() {
        let engine = MiniJinjaEngine::new();
        assert!(!engine.has_template("nope"));
        assert!(matches!(
            engine.render_named("nope", &json!({})),
            Err(RenderError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_undeclared_variables_and_globals() {
        let mut engine = MiniJinjaEngine::new();
        engine
            .environment_mut()
            .add_function("shout", |s: String| s.to_uppercase());
        engine
            .add_template("t", "{% for x in items %}{{ shout(x) }}{{ loud(x) }}{% endfor %}")
            .unwrap();

        let names = engine.undeclared_variables("t").unwrap();
        assert!(names.contains("items"));
        assert!(names.contains("shout"));
        assert!(names.contains("loud"));
        assert!(engine.is_global("shout"));
        assert!(engine.is_global("range"));
        assert!(!engine.is_global("loud"));
    }
}
