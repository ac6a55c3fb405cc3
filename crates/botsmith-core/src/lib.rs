//! Botsmith core library
//!
//! A deterministic, rule-based prompt-to-code synthesis engine: a
//! short natural-language request is analyzed for capabilities and
//! complexity, classified into a category, matched against an
//! immutable template catalog, and rendered into bot command source
//! with the requested name and features honored. No model inference,
//! no I/O, no shared mutable state: one `generate` call in, one
//! artifact out.

pub mod analyzer;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod customize;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod selector;
pub mod types;

// Re-export commonly used types
pub use catalog::{CodeTemplate, TemplateCatalog, TemplateKind};
pub use config::GeneratorConfig;
pub use error::{SmithError, SmithResult};
pub use pipeline::{frame, Generator};
pub use types::{
    Analysis, Category, Complexity, FeatureSet, FeatureTag, GeneratedArtifact, OutputFormat,
};
