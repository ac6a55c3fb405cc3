//! Prompt analysis: tokenization, feature detection, complexity
//!
//! Detection is a fixed library of named patterns tested against the
//! lowercased prompt. Patterns are independent (a prompt may trigger
//! any number of feature tags) and the whole pass is pure, so the
//! same prompt always yields the same [`Analysis`].
//!
//! Prompts are frequently Portuguese, so every pattern family carries
//! both Portuguese and English forms (accented and unaccented).

use crate::types::{Analysis, Complexity, FeatureSet, FeatureTag};
use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered detection table. Order only affects tag insertion order,
/// never membership; the set dedupes.
static FEATURE_PATTERNS: Lazy<Vec<(FeatureTag, Regex)>> = Lazy::new(|| {
    let table: &[(FeatureTag, &str)] = &[
        (
            FeatureTag::VisualEmbed,
            r"\bembeds?\b|thumbnail|visual|bonit[ao]|imagem|banner",
        ),
        (
            FeatureTag::InteractiveButtons,
            r"\bbot(?:ão|ões|ao|oes)\b|\bbuttons?\b|interativ",
        ),
        (
            FeatureTag::StructuredInput,
            r"formul[áa]rio|\bmodal\b|\bform\b|campos",
        ),
        (
            FeatureTag::PermissionGated,
            r"permiss(?:ão|ões|ao|oes)|\bpermissions?\b|apenas (?:admin|staff)|somente (?:admin|staff)|\bcargos?\b|\broles?\b",
        ),
        (
            FeatureTag::Persistence,
            r"salvar|guardar|banco de dados|database|\bdb\b|persist",
        ),
        (
            FeatureTag::ExternalLookup,
            r"\bapi\b|buscar|consultar|\bfetch\b|\blookup\b",
        ),
        (
            FeatureTag::Scheduled,
            r"\bdaily\b|di[áa]ri[ao]s?\b|agendad|\bcron\b|schedule|todo dia|hor[áa]rio",
        ),
        (
            FeatureTag::Randomized,
            r"aleat[óo]ri|sorte(?:io|ios|ar)?\b|\brandom\b|\bdados?\b|\bchance\b",
        ),
    ];
    table
        .iter()
        .map(|(tag, pat)| (*tag, Regex::new(pat).expect("invalid feature pattern")))
        .collect()
});

/// Explicit "keep it small" phrasing
static EXPLICIT_SIMPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bsimples\b|\bsimple\b|\bb[áa]sic[ao]\b|\bbasic\b|minimalista|\bminimal\b")
        .expect("invalid simple pattern")
});

/// Explicit "give me everything" phrasing. Takes priority over the
/// simple family when both match.
static EXPLICIT_COMPLEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bcomplet[ao]s?\b|\bcomplex[ao]?\b|\bavan[çc]ad[ao]s?\b|\badvanced\b|\bfull\b|profissional",
    )
    .expect("invalid complex pattern")
});

/// Split a prompt into lowercased word tokens, in prompt order.
/// Unicode-aware: accented letters stay inside their token.
pub fn tokenize(prompt: &str) -> Vec<String> {
    prompt
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Detect requested capabilities in the lowercased prompt
pub fn extract_features(lowered: &str) -> FeatureSet {
    let mut features = FeatureSet::new();
    for (tag, pattern) in FEATURE_PATTERNS.iter() {
        if pattern.is_match(lowered) {
            features.insert(*tag);
        }
    }
    features
}

/// Assess the complexity tier from explicit phrasing.
///
/// Complex wins over simple when both families match; neither
/// matching defaults to medium.
pub fn assess_complexity(lowered: &str) -> Complexity {
    if EXPLICIT_COMPLEX.is_match(lowered) {
        Complexity::Complex
    } else if EXPLICIT_SIMPLE.is_match(lowered) {
        Complexity::Simple
    } else {
        Complexity::Medium
    }
}

/// Derive the full [`Analysis`] for one prompt
pub fn analyze(prompt: &str) -> Analysis {
    let lowered = prompt.to_lowercase();
    Analysis {
        tokens: tokenize(prompt),
        features: extract_features(&lowered),
        complexity: assess_complexity(&lowered),
    }
}
