//! Core data types for the synthesis engine
//!
//! Everything here is an immutable value: an [`Analysis`] is derived
//! once per generation call and never mutated, and a
//! [`GeneratedArtifact`] has no lifecycle beyond being returned to the
//! caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Classification bucket assigned to a prompt.
///
/// This is an open enumeration: new categories may be added without
/// breaking existing matches. [`Category::Utility`] is the mandatory
/// fallback and is always present in the catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Support/ticket panels and flows
    Ticketing,
    /// Virtual currency, shops, daily rewards
    Economy,
    /// Ban/kick/mute/warn tooling
    Moderation,
    /// Music and audio playback
    MediaPlayback,
    /// Generic commands; also the fallback for unmatched prompts
    Utility,
}

impl Category {
    /// Stable string form, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ticketing => "ticketing",
            Self::Economy => "economy",
            Self::Moderation => "moderation",
            Self::MediaPlayback => "media-playback",
            Self::Utility => "utility",
        }
    }

    /// The designated fallback for prompts matching no keyword set
    pub const fn fallback() -> Self {
        Self::Utility
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A capability request detected in prompt text.
///
/// Open enumeration; detection patterns live in the analyzer and are
/// not mutually exclusive; one prompt may carry any number of tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureTag {
    /// Rich embeds, thumbnails, visual polish
    VisualEmbed,
    /// Buttons and other interactive components
    InteractiveButtons,
    /// Modals/forms for structured input
    StructuredInput,
    /// Permission or role gating
    PermissionGated,
    /// Persistent storage of state
    Persistence,
    /// Lookups against external services/APIs
    ExternalLookup,
    /// Time-based or recurring behavior
    Scheduled,
    /// Randomized outcomes (draws, dice, chance)
    Randomized,
}

impl FeatureTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VisualEmbed => "visual-embed",
            Self::InteractiveButtons => "interactive-buttons",
            Self::StructuredInput => "structured-input",
            Self::PermissionGated => "permission-gated",
            Self::Persistence => "persistence",
            Self::ExternalLookup => "external-lookup",
            Self::Scheduled => "scheduled",
            Self::Randomized => "randomized",
        }
    }
}

impl fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered set of detected features.
///
/// `BTreeSet` keeps iteration order stable so everything derived from
/// a feature set is deterministic.
pub type FeatureSet = BTreeSet<FeatureTag>;

/// Coarse complexity tier derived from prompt phrasing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Default for Complexity {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        };
        write!(f, "{s}")
    }
}

/// Immutable record derived from one prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Lowercased word tokens in prompt order
    pub tokens: Vec<String>,
    /// Deduplicated capability tags
    pub features: FeatureSet,
    /// Complexity tier
    pub complexity: Complexity,
}

impl Analysis {
    /// Whether a given feature was detected
    pub fn has_feature(&self, tag: FeatureTag) -> bool {
        self.features.contains(&tag)
    }
}

/// Final output of one generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// Resolved command/artifact name; never empty
    pub name: String,
    /// Generated source text
    pub code: String,
    /// Assigned category; always present in the catalog index
    pub category: Category,
    /// Feature tags actually honored during customization
    pub features_applied: FeatureSet,
}

/// Cosmetic output framing hint.
///
/// Affects only how `code` is framed for display, never
/// classification or customization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raw code text
    #[default]
    Plain,
    /// Code wrapped in a fenced markdown block
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::MediaPlayback.to_string(), "media-playback");
        assert_eq!(Category::fallback(), Category::Utility);
    }

    #[test]
    fn test_feature_tag_serde() {
        let json = serde_json::to_string(&FeatureTag::VisualEmbed).unwrap();
        assert_eq!(json, "\"visual-embed\"");
        let tag: FeatureTag = serde_json::from_str("\"interactive-buttons\"").unwrap();
        assert_eq!(tag, FeatureTag::InteractiveButtons);
    }

    #[test]
    fn test_complexity_default() {
        assert_eq!(Complexity::default(), Complexity::Medium);
    }

    #[test]
    fn test_feature_set_ordering_stable() {
        let mut a = FeatureSet::new();
        a.insert(FeatureTag::Randomized);
        a.insert(FeatureTag::VisualEmbed);

        let mut b = FeatureSet::new();
        b.insert(FeatureTag::VisualEmbed);
        b.insert(FeatureTag::Randomized);

        let first: Vec<_> = a.iter().collect();
        let second: Vec<_> = b.iter().collect();
        assert_eq!(first, second);
    }
}
