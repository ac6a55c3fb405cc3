//! Code template implementation
//!
//! Templates are structured fragments: the body carries named
//! `{{slot}}` placeholders at every customization point (name
//! declaration, feature insertions) instead of bare substring anchors,
//! so customization is an explicit per-slot render rather than string
//! surgery, and a missing slot is detectable up front.

use crate::types::{Category, FeatureSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Well-known slot names shared between templates and the customizer.
pub mod slot {
    /// Name-declaration site (`.setName('{{command_name}}')`)
    pub const COMMAND_NAME: &str = "command_name";
    /// Insertion point for the thumbnail/visual-richness call
    pub const VISUAL_EMBED: &str = "visual_embed";
    /// Tail of the discord.js import list, for button symbols
    pub const BUTTON_IMPORTS: &str = "button_imports";
    /// Verbatim copy of the raw prompt (fallback bundle only)
    pub const REQUEST: &str = "request";
}

/// Selection strategy a template participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Single-command path: name resolution and feature insertions apply
    Customizable,
    /// Whole-system path: rendered as-is, no customization
    FixedBundle,
}

/// One catalog entry. Immutable at runtime; rendering always produces
/// a fresh string and never touches the entry itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeTemplate {
    /// Stable identifier
    pub id: String,
    /// Category this template serves
    pub category: Category,
    /// Human-readable description
    pub description: String,
    /// Name used when the prompt yields no usable name
    pub default_name: String,
    /// Which pipeline this template belongs to
    pub kind: TemplateKind,
    /// Body text with `{{slot}}` placeholders
    pub body: String,
    /// Slot names present in the body, in order of first appearance
    pub slots: Vec<String>,
    /// Per-slot values used when the renderer provides none
    pub slot_defaults: HashMap<String, String>,
    /// Feature tags this template is a natural fit for; consulted only
    /// by the optional ranking selector
    pub feature_affinity: FeatureSet,
}

impl CodeTemplate {
    /// Create a customizable template
    pub fn new(
        id: impl Into<String>,
        category: Category,
        default_name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        let slots = Self::extract_slots(&body);
        Self {
            id: id.into(),
            category,
            description: String::new(),
            default_name: default_name.into(),
            kind: TemplateKind::Customizable,
            body,
            slots,
            slot_defaults: HashMap::new(),
            feature_affinity: FeatureSet::new(),
        }
    }

    /// Create a fixed bundle template
    pub fn bundle(
        id: impl Into<String>,
        category: Category,
        default_name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let mut template = Self::new(id, category, default_name, body);
        template.kind = TemplateKind::FixedBundle;
        template
    }

    /// Set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set the default value rendered into a slot when no value is
    /// provided
    pub fn with_slot_default(mut self, name: &str, value: impl Into<String>) -> Self {
        self.slot_defaults.insert(name.to_string(), value.into());
        self
    }

    /// Declare feature affinity for the ranking selector
    pub fn with_affinity(mut self, features: FeatureSet) -> Self {
        self.feature_affinity = features;
        self
    }

    /// Whether the body carries a given named slot
    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.iter().any(|s| s == name)
    }

    /// Scan the body for `{{slot}}` placeholders, deduplicated, in
    /// order of first appearance
    fn extract_slots(body: &str) -> Vec<String> {
        let re = Regex::new(r"\{\{(\w+)\}\}").expect("invalid slot pattern");
        let mut slots = Vec::new();
        for cap in re.captures_iter(body) {
            let name = cap[1].to_string();
            if !slots.contains(&name) {
                slots.push(name);
            }
        }
        slots
    }

    /// Render the body with the provided slot values.
    ///
    /// Unfilled slots fall back to their declared default, then to the
    /// empty string. Pure: identical inputs yield byte-identical
    /// output.
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let map: HashMap<&str, &str> = values.iter().cloned().collect();
        let mut result = self.body.clone();
        for name in &self.slots {
            let placeholder = format!("{{{{{name}}}}}");
            let value = map
                .get(name.as_str())
                .copied()
                .or(self.slot_defaults.get(name).map(String::as_str))
                .unwrap_or("");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
