//! Command name resolution
//!
//! An ordered list of naming patterns is applied against the raw
//! prompt; the first capture that survives sanitization wins,
//! lowercased. No usable capture falls back to the template's default
//! name, so the result is never empty. The prompt is untrusted free
//! text, so captures are reduced to `[a-z0-9_-]` before being spliced
//! into a name-declaration site.

use crate::catalog::CodeTemplate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Naming patterns in priority order. The explicit "called X" forms
/// outrank the looser "command X" form so a prompt like
/// "comando chamado saudacao" resolves to "saudacao", not "chamado".
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r#"(?:chamad[oa]|nomead[oa])\s+['"`]?([\w-]+)"#,
        r#"(?:called|named)\s+['"`]?([\w-]+)"#,
        r#"(?:comando|command)\s+(?:de\s+)?['"`]?([\w-]+)"#,
    ]
    .iter()
    .map(|pat| Regex::new(pat).expect("invalid naming pattern"))
    .collect()
});

/// Filler words a loose pattern can capture by accident; never valid
/// command names.
const STOPWORDS: &[&str] = &[
    "que", "de", "do", "da", "para", "pra", "com", "um", "uma", "o", "a", "e", "chamado",
    "chamada", "nomeado", "nomeada", "the", "that", "called", "named",
];

/// Reduce a capture to the restricted character set. Empty result
/// means the capture is unusable.
fn sanitize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Resolve the artifact name from a prompt, falling back to the
/// selected template's default name. Guaranteed non-empty.
pub fn resolve_name(prompt: &str, template: &CodeTemplate) -> String {
    let lowered = prompt.to_lowercase();
    for pattern in NAME_PATTERNS.iter() {
        for cap in pattern.captures_iter(&lowered) {
            let name = sanitize(&cap[1]);
            if !name.is_empty() && !STOPWORDS.contains(&name.as_str()) {
                return name;
            }
        }
    }
    template.default_name.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn template() -> CodeTemplate {
        CodeTemplate::new("t", Category::Utility, "comando", "{{command_name}}")
    }

    #[test]
    fn test_resolve_chamado() {
        let name = resolve_name(
            "quero um comando chamado saudacao que manda uma mensagem bonita com embed",
            &template(),
        );
        assert_eq!(name, "saudacao");
    }

    #[test]
    fn test_resolve_called() {
        let name = resolve_name("a command called greet", &template());
        assert_eq!(name, "greet");
    }

    #[test]
    fn test_resolve_loose_comando() {
        let name = resolve_name("comando de ping para o servidor", &template());
        assert_eq!(name, "ping");
    }

    #[test]
    fn test_resolve_is_lowercased() {
        let name = resolve_name("comando chamado Saudacao", &template());
        assert_eq!(name, "saudacao");
    }

    #[test]
    fn test_resolve_sanitizes_untrusted_text() {
        let name = resolve_name("comando chamado oi!'); drop", &template());
        assert_eq!(name, "oi");
    }

    #[test]
    fn test_resolve_fallback_to_default() {
        let name = resolve_name("um sistema de boas-vindas", &template());
        assert_eq!(name, "comando");
    }

    #[test]
    fn test_resolve_never_empty() {
        let name = resolve_name("???", &template());
        assert!(!name.is_empty());
    }

    #[test]
    fn test_resolve_skips_stopword_capture() {
        // The loose pattern would capture "que"; the resolver must
        // keep looking instead of returning a filler word.
        let name = resolve_name("um comando que responde", &template());
        assert_eq!(name, "comando");
    }
}
