//! Template catalog
//!
//! Immutable, category-indexed registry of source-code templates.
//! Built once from the builtin definition set and passed by reference
//! into the pipeline; never mutated afterwards, so one catalog may be
//! shared freely across calls.

mod builtin;
mod registry;
mod template;

pub use registry::TemplateCatalog;
pub use template::{slot, CodeTemplate, TemplateKind};
