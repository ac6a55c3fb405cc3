//! Generation pipeline
//!
//! Sequences analyzer → classifier → selector → name resolver →
//! customizer into a single synchronous `generate` call, plus the
//! whole-system variant that serves "complete bundle" requests from
//! the same catalog without customization. Each call derives its own
//! state; a shared [`Generator`] needs no synchronization.

use crate::analyzer;
use crate::catalog::{slot, TemplateCatalog, TemplateKind};
use crate::classifier;
use crate::config::GeneratorConfig;
use crate::customize;
use crate::error::{SmithError, SmithResult};
use crate::naming;
use crate::selector;
use crate::types::{FeatureSet, GeneratedArtifact, OutputFormat};
use std::borrow::Cow;
use tracing::debug;

/// The prompt-to-code generator. Owns an immutable template catalog
/// and the pipeline configuration.
#[derive(Debug)]
pub struct Generator {
    catalog: TemplateCatalog,
    config: GeneratorConfig,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator over the builtin catalog with default configuration
    pub fn new() -> Self {
        Self::with_catalog(TemplateCatalog::with_builtins())
    }

    /// Generator over a custom catalog; mainly for tests and embedders
    pub fn with_catalog(catalog: TemplateCatalog) -> Self {
        Self {
            catalog,
            config: GeneratorConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// The catalog this generator consults
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Validate the non-empty precondition and clamp over-long prompts
    /// to the configured character bound.
    fn prepare<'a>(&self, prompt: &'a str) -> SmithResult<Cow<'a, str>> {
        if prompt.trim().is_empty() {
            return Err(SmithError::EmptyPrompt);
        }
        let count = prompt.chars().count();
        if count > self.config.max_prompt_chars {
            debug!(count, max = self.config.max_prompt_chars, "clamping prompt");
            Ok(Cow::Owned(
                prompt.chars().take(self.config.max_prompt_chars).collect(),
            ))
        } else {
            Ok(Cow::Borrowed(prompt))
        }
    }

    /// Generate a single customizable command from a prompt.
    ///
    /// Deterministic: the same prompt always yields the same artifact.
    pub fn generate(&self, prompt: &str) -> SmithResult<GeneratedArtifact> {
        let prompt = self.prepare(prompt)?;
        let analysis = analyzer::analyze(&prompt);
        let category = classifier::classify(&analysis.tokens);
        debug!(
            %category,
            features = analysis.features.len(),
            complexity = %analysis.complexity,
            "classified prompt"
        );

        let template = selector::select(
            &self.catalog,
            category,
            TemplateKind::Customizable,
            &analysis,
            self.config.rank_by_features,
        )
        .ok_or_else(|| SmithError::other("catalog holds no customizable templates"))?;
        debug!(template = %template.id, "selected template");

        let name = naming::resolve_name(&prompt, template);
        let outcome = customize::customize(template, &name, &analysis.features);

        Ok(GeneratedArtifact {
            name,
            code: outcome.code,
            category,
            features_applied: outcome.applied,
        })
    }

    /// Generate a whole-system bundle from a prompt.
    ///
    /// Same classification, no feature extraction or name splicing:
    /// bundle templates render as-is. The fallback bundle carries a
    /// request slot that embeds the prompt verbatim.
    pub fn generate_system(&self, prompt: &str) -> SmithResult<GeneratedArtifact> {
        let prompt = self.prepare(prompt)?;
        let tokens = analyzer::tokenize(&prompt);
        let category = classifier::classify(&tokens);
        debug!(%category, "classified system request");

        let template = self
            .catalog
            .first(category, TemplateKind::FixedBundle)
            .or_else(|| {
                self.catalog
                    .first(crate::types::Category::fallback(), TemplateKind::FixedBundle)
            })
            .ok_or_else(|| SmithError::other("catalog holds no bundle templates"))?;
        debug!(template = %template.id, "selected bundle");

        let code = template.render(&[(slot::REQUEST, prompt.as_ref())]);

        Ok(GeneratedArtifact {
            name: template.default_name.clone(),
            code,
            category,
            features_applied: FeatureSet::new(),
        })
    }

    /// Generate and apply the cosmetic output framing
    pub fn generate_with_format(
        &self,
        prompt: &str,
        format: OutputFormat,
    ) -> SmithResult<GeneratedArtifact> {
        let mut artifact = self.generate(prompt)?;
        artifact.code = frame(&artifact.code, format);
        Ok(artifact)
    }
}

/// Frame generated code for display. Purely cosmetic; never affects
/// classification or customization.
pub fn frame(code: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => code.to_string(),
        OutputFormat::Markdown => format!("```js\n{}\n```", code.trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, FeatureTag};

    #[test]
    fn test_generate_rejects_empty_prompt() {
        let generator = Generator::new();
        assert!(matches!(generator.generate(""), Err(SmithError::EmptyPrompt)));
        assert!(matches!(
            generator.generate("   \t"),
            Err(SmithError::EmptyPrompt)
        ));
        assert!(matches!(
            generator.generate_system(""),
            Err(SmithError::EmptyPrompt)
        ));
    }

    #[test]
    fn test_generate_clamps_long_prompt() {
        let generator = Generator::with_catalog(TemplateCatalog::with_builtins()).with_config(
            GeneratorConfig {
                max_prompt_chars: 30,
                ..Default::default()
            },
        );
        // The ticket keyword sits past the clamp point, so it must not
        // influence classification.
        let prompt = format!("{} ticket", "a".repeat(40));
        let artifact = generator.generate(&prompt).unwrap();
        assert_eq!(artifact.category, Category::Utility);
    }

    #[test]
    fn test_generate_category_always_in_catalog() {
        let generator = Generator::new();
        let artifact = generator.generate("qualquer coisa sem palavra-chave").unwrap();
        assert!(generator
            .catalog()
            .first(artifact.category, TemplateKind::Customizable)
            .is_some());
    }

    #[test]
    fn test_generate_deterministic() {
        let generator = Generator::new();
        let prompt = "comando chamado sorteio com botões e embed";
        let first = generator.generate(prompt).unwrap();
        let second = generator.generate(prompt).unwrap();
        assert_eq!(first.code, second.code);
        assert_eq!(first.name, second.name);
        assert_eq!(first.features_applied, second.features_applied);
    }

    #[test]
    fn test_generate_applies_features() {
        let generator = Generator::new();
        let artifact = generator
            .generate("comando chamado painel com botões")
            .unwrap();
        assert_eq!(artifact.name, "painel");
        assert!(artifact
            .features_applied
            .contains(&FeatureTag::InteractiveButtons));
        assert!(artifact.code.contains("ButtonBuilder"));
    }

    #[test]
    fn test_generate_system_deterministic() {
        let generator = Generator::new();
        let prompt = "sistema de ticket com sistema de verificação";
        let first = generator.generate_system(prompt).unwrap();
        let second = generator.generate_system(prompt).unwrap();
        assert_eq!(first.code, second.code);
    }

    #[test]
    fn test_generate_system_fallback_embeds_prompt() {
        let generator = Generator::new();
        let prompt = "um sistema de boas-vindas personalizado";
        let artifact = generator.generate_system(prompt).unwrap();
        assert_eq!(artifact.category, Category::Utility);
        assert!(artifact.code.contains(prompt));
    }

    #[test]
    fn test_frame_markdown() {
        let framed = frame("const x = 1;\n", OutputFormat::Markdown);
        assert_eq!(framed, "```js\nconst x = 1;\n```");
    }

    #[test]
    fn test_format_is_cosmetic_only() {
        let generator = Generator::new();
        let prompt = "comando chamado oi";
        let plain = generator.generate(prompt).unwrap();
        let markdown = generator
            .generate_with_format(prompt, OutputFormat::Markdown)
            .unwrap();
        assert_eq!(plain.name, markdown.name);
        assert_eq!(plain.category, markdown.category);
        assert!(markdown.code.contains(&plain.code.trim_end().to_string()));
    }
}
