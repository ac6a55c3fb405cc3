//! End-to-end generation scenarios against the builtin catalog

use botsmith_core::{Category, FeatureTag, Generator, SmithError};

#[test]
fn ticket_with_verification_resolves_to_ticket_bundle() {
    let generator = Generator::new();
    let artifact = generator
        .generate_system("sistema de ticket com sistema de verificação")
        .unwrap();

    assert_eq!(artifact.category, Category::Ticketing);
    assert!(artifact.code.contains("ticketConfig"));
    assert!(artifact.code.contains("verifyConfig"));
}

#[test]
fn empty_prompt_is_rejected_before_generation() {
    let generator = Generator::new();
    assert!(matches!(generator.generate(""), Err(SmithError::EmptyPrompt)));
    assert!(matches!(
        generator.generate("  \n "),
        Err(SmithError::EmptyPrompt)
    ));
}

#[test]
fn named_greeting_command_with_embed() {
    let generator = Generator::new();
    let artifact = generator
        .generate("quero um comando chamado saudacao que manda uma mensagem bonita com embed")
        .unwrap();

    assert!(artifact.features_applied.contains(&FeatureTag::VisualEmbed));
    assert_eq!(artifact.category, Category::Utility);
    assert_eq!(artifact.name, "saudacao");
    assert!(artifact.code.contains(".setName('saudacao')"));
    assert!(artifact.code.contains(".setThumbnail("));
}

#[test]
fn full_economy_prompt_selects_economy_system() {
    let generator = Generator::new();
    let artifact = generator
        .generate("sistema de economia completo com loja e daily")
        .unwrap();

    assert_eq!(artifact.category, Category::Economy);
    assert!(artifact.code.contains("economyConfig"));
}

#[test]
fn system_generation_is_deterministic() {
    let generator = Generator::new();
    let prompt = "sistema de economia completo";
    let first = generator.generate_system(prompt).unwrap();
    let second = generator.generate_system(prompt).unwrap();

    assert_eq!(first.code, second.code);
    assert_eq!(first.name, second.name);
    assert_eq!(first.category, second.category);
}

#[test]
fn unmatched_prompt_falls_back_to_utility() {
    let generator = Generator::new();
    let artifact = generator.generate("algo totalmente diferente").unwrap();

    assert_eq!(artifact.category, Category::Utility);
    assert!(!artifact.name.is_empty());
}

#[test]
fn generated_name_is_never_empty() {
    let generator = Generator::new();
    for prompt in [
        "ticket",
        "loja",
        "ban",
        "música",
        "qualquer coisa",
        "comando chamado xp_rank",
    ] {
        let artifact = generator.generate(prompt).unwrap();
        assert!(!artifact.name.is_empty(), "empty name for prompt {prompt:?}");
    }
}
