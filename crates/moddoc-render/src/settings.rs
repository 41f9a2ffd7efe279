//! Flat presentation settings consumed by the format adapters.

use serde::{Deserialize, Serialize};

/// Resolved, internally consistent presentation options.
///
/// Settings are built once per invocation (see the `moddoc` crate's config
/// resolver) and never change while a document renders. Templates read them
/// under the `settings` context key, using the field names below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub show_header: bool,
    pub show_inputs: bool,
    pub show_module_calls: bool,
    pub show_outputs: bool,
    pub show_providers: bool,
    pub show_requirements: bool,
    pub show_resources: bool,

    /// Backslash-escape markup characters in names and prose.
    pub escape_characters: bool,
    /// Heading depth of top-level sections.
    pub indent_level: usize,
    pub show_required: bool,
    pub show_sensitivity: bool,
    pub show_anchors: bool,
    pub output_values: bool,

    pub sort_by_name: bool,
    pub sort_by_required: bool,
    pub sort_by_type: bool,

    pub show_color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_header: true,
            show_inputs: true,
            show_module_calls: true,
            show_outputs: true,
            show_providers: true,
            show_requirements: true,
            show_resources: true,
            escape_characters: true,
            indent_level: 2,
            show_required: true,
            show_sensitivity: true,
            show_anchors: true,
            output_values: false,
            sort_by_name: true,
            sort_by_required: false,
            sort_by_type: false,
            show_color: true,
        }
    }
}

impl Settings {
    /// Settings with every section hidden; useful as a starting point.
    pub fn hide_all() -> Self {
        Self {
            show_header: false,
            show_inputs: false,
            show_module_calls: false,
            show_outputs: false,
            show_providers: false,
            show_requirements: false,
            show_resources: false,
            ..Self::default()
        }
    }
}
