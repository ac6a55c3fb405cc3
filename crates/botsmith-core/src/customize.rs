//! Template customization
//!
//! Produces a derived copy of a template's source with the resolved
//! name and feature insertions rendered into their named slots. Each
//! enhancement fills its own slot, so composition is order-independent
//! and idempotent by construction. A requested enhancement whose slot
//! is absent from the template body is skipped with a warning; the
//! rest of the render proceeds.

use crate::catalog::{slot, CodeTemplate};
use crate::types::{FeatureSet, FeatureTag};
use tracing::warn;

/// Thumbnail call rendered into the visual-embed slot, indented to
/// sit inside the embed builder chain.
const VISUAL_EMBED_SNIPPET: &str = "\n            .setThumbnail(interaction.guild.iconURL())";

/// Button symbols appended to the discord.js import list.
const BUTTON_IMPORT_SNIPPET: &str = ", ActionRowBuilder, ButtonBuilder, ButtonStyle";

/// Result of one customization pass
#[derive(Debug, Clone)]
pub struct CustomizeOutcome {
    /// Rendered source text
    pub code: String,
    /// Subset of the requested features whose slot existed and was
    /// filled
    pub applied: FeatureSet,
}

/// Render a template with the resolved name and requested features.
///
/// Pure function of its inputs: identical `(template, name, features)`
/// always yields byte-identical code. The template itself is never
/// altered.
pub fn customize(template: &CodeTemplate, name: &str, features: &FeatureSet) -> CustomizeOutcome {
    let mut values: Vec<(&str, &str)> = Vec::new();
    let mut applied = FeatureSet::new();

    if template.has_slot(slot::COMMAND_NAME) {
        values.push((slot::COMMAND_NAME, name));
    } else {
        warn!(
            template = %template.id,
            "name-declaration slot not found; keeping the template's declared name"
        );
    }

    if features.contains(&FeatureTag::VisualEmbed) {
        if template.has_slot(slot::VISUAL_EMBED) {
            values.push((slot::VISUAL_EMBED, VISUAL_EMBED_SNIPPET));
            applied.insert(FeatureTag::VisualEmbed);
        } else {
            warn!(
                template = %template.id,
                "visual-embed slot not found; skipping visual enhancement"
            );
        }
    }

    if features.contains(&FeatureTag::InteractiveButtons) {
        if template.has_slot(slot::BUTTON_IMPORTS) {
            values.push((slot::BUTTON_IMPORTS, BUTTON_IMPORT_SNIPPET));
            applied.insert(FeatureTag::InteractiveButtons);
        } else {
            warn!(
                template = %template.id,
                "button-imports slot not found; skipping interactive enhancement"
            );
        }
    }

    CustomizeOutcome {
        code: template.render(&values),
        applied,
    }
}
