//! Document templates.
//!
//! Every markup dialect is a [`DocumentTemplate`]: a root template that
//! includes the section fragments in document order (`header`,
//! `requirements`, `providers`, `modules`, `resources`, `inputs`,
//! `outputs`). Fragments render against a `{ module, settings }` context and
//! call the sanitizer through the functions and filters registered in
//! [`filters`].
//!
//! ## Key Types
//!
//! - [`DocumentTemplate`]: compiled root plus fragments
//! - [`MiniJinjaEngine`]: the [`TemplateEngine`] underneath
//! - [`TemplateContext`]: the serialized render context

mod context;
mod engine;
pub mod filters;
mod renderer;

pub use context::{InputView, ModuleView, OutputView, ProviderView, ResourceView, TemplateContext};
pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use filters::{register_functions, Markup, SENSITIVE_PLACEHOLDER};
pub use renderer::{DocumentTemplate, Item};
