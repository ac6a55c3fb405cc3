//! Category-indexed template registry

use super::template::{CodeTemplate, TemplateKind};
use crate::types::Category;
use std::collections::HashMap;

/// Immutable registry of code templates, indexed by category.
///
/// Built once (normally via [`TemplateCatalog::with_builtins`]) and
/// consulted read-only for the rest of the process lifetime.
/// Declaration order within a category is preserved; the selector's
/// first-match policy depends on it.
#[derive(Debug, Default)]
pub struct TemplateCatalog {
    templates: Vec<CodeTemplate>,
    by_category: HashMap<Category, Vec<usize>>,
}

impl TemplateCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog populated with the builtin template set.
    /// Every category carries at least one template of each kind, so
    /// category lookup on this catalog never comes back empty.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for template in super::builtin::builtin_templates() {
            catalog.register(template);
        }
        catalog
    }

    /// Register a template, keeping declaration order
    pub fn register(&mut self, template: CodeTemplate) {
        let index = self.templates.len();
        self.by_category
            .entry(template.category)
            .or_default()
            .push(index);
        self.templates.push(template);
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&CodeTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Templates of one kind in a category, in declaration order
    pub fn list(&self, category: Category, kind: TemplateKind) -> Vec<&CodeTemplate> {
        self.by_category
            .get(&category)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| &self.templates[i])
                    .filter(|t| t.kind == kind)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First-declared template of one kind in a category
    pub fn first(&self, category: Category, kind: TemplateKind) -> Option<&CodeTemplate> {
        self.list(category, kind).into_iter().next()
    }

    /// Categories with at least one registered template
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.by_category.keys().copied().collect();
        categories.sort();
        categories
    }

    /// Total template count
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
