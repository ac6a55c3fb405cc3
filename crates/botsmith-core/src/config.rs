//! Generator configuration

use crate::error::SmithResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the synthesis pipeline. `Default` gives the
/// documented behavior with zero configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prompts longer than this are clamped (in characters) before
    /// analysis
    pub max_prompt_chars: usize,
    /// Rank candidate templates by feature-affinity overlap instead of
    /// always taking the first declared
    pub rank_by_features: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: 2000,
            rank_by_features: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> SmithResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> SmithResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
