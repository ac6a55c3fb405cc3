//! Category classification
//!
//! A fixed, ordered cascade of keyword sets. The first category whose
//! keyword set intersects the prompt's token set wins; declaration
//! order is part of the contract (a prompt satisfying two categories
//! resolves to the one declared earlier). No match falls back to
//! [`Category::Utility`].

use crate::types::Category;

/// Classification table, in priority order. Keywords are matched as
/// whole tokens, Portuguese and English forms side by side.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Ticketing,
        &[
            "ticket", "tickets", "atendimento", "suporte", "support", "denuncia", "denúncia",
        ],
    ),
    (
        Category::Economy,
        &[
            "economia", "economy", "coins", "moeda", "moedas", "dinheiro", "loja", "shop",
            "daily", "saldo", "balance", "banco",
        ],
    ),
    (
        Category::Moderation,
        &[
            "moderação", "moderacao", "moderation", "ban", "banir", "kick", "expulsar", "mute",
            "mutar", "silenciar", "warn", "aviso", "castigo",
        ],
    ),
    (
        Category::MediaPlayback,
        &[
            "música", "musica", "music", "play", "tocar", "toca", "som", "áudio", "audio", "song",
            "playlist", "radio", "rádio",
        ],
    ),
];

/// Classify a token sequence into exactly one category.
///
/// Never returns "no category": unmatched prompts resolve to the
/// designated fallback.
pub fn classify(tokens: &[String]) -> Category {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if tokens.iter().any(|t| keywords.contains(&t.as_str())) {
            return *category;
        }
    }
    Category::fallback()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::tokenize;

    #[test]
    fn test_classify_ticketing() {
        let tokens = tokenize("sistema de ticket com sistema de verificação");
        assert_eq!(classify(&tokens), Category::Ticketing);
    }

    #[test]
    fn test_classify_economy() {
        let tokens = tokenize("sistema de economia completo com loja e daily");
        assert_eq!(classify(&tokens), Category::Economy);
    }

    #[test]
    fn test_classify_moderation() {
        let tokens = tokenize("comando para banir membros");
        assert_eq!(classify(&tokens), Category::Moderation);
    }

    #[test]
    fn test_classify_media_playback() {
        let tokens = tokenize("quero um bot que toca música");
        assert_eq!(classify(&tokens), Category::MediaPlayback);
    }

    #[test]
    fn test_classify_fallback() {
        let tokens = tokenize("quero um comando chamado saudacao que manda uma mensagem bonita");
        assert_eq!(classify(&tokens), Category::Utility);
    }

    #[test]
    fn test_classify_declaration_order_wins() {
        // Both ticketing and economy keywords present; ticketing is
        // declared first and must win.
        let tokens = tokenize("ticket de suporte para a loja");
        assert_eq!(classify(&tokens), Category::Ticketing);
    }

    #[test]
    fn test_classify_keywords_are_whole_tokens() {
        // "playground" must not trip the "play" keyword.
        let tokens = tokenize("um comando sobre playground");
        assert_eq!(classify(&tokens), Category::Utility);
    }
}
