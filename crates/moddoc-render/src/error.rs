//! Error types for document rendering.
//!
//! This module provides [`RenderError`], the error type for every fallible
//! operation in the crate. It abstracts over the template engine's and the
//! serializers' errors, providing a stable public API.
//!
//! Sanitization has no error class: every sanitizer function is total.

use std::fmt;

/// Error type for document rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error, unknown function or filter, or a failure
    /// raised while evaluating a fragment.
    TemplateError(String),

    /// A fragment referenced by name was never registered.
    TemplateNotFound(String),

    /// Structured output (JSON, YAML, XML) could not be serialized.
    SerializationError(String),

    /// No format adapter is registered under the requested name.
    UnknownFormat(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::UnknownFormat(name) => write!(f, "unknown format: '{}'", name),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<quick_xml::DeError> for RenderError {
    fn from(err: quick_xml::DeError) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            // Syntax, unknown function/filter and evaluation failures.
            _ => RenderError::TemplateError(err.to_string()),
        }
    }
}
