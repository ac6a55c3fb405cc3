//! Botsmith CLI application
//!
//! Thin presentation layer over `botsmith-core`: validates the prompt,
//! runs one generation call, and prints or writes the result. All
//! decision logic lives in the core.

mod args;

use anyhow::{bail, Context, Result};
use args::Cli;
use botsmith_core::{frame, Generator, GeneratorConfig, OutputFormat};
use clap::Parser;
use colored::Colorize;

fn main() -> Result<()> {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    // Reject blank input here; the pipeline treats a non-empty prompt
    // as its precondition.
    if cli.prompt.trim().is_empty() {
        bail!("prompt is empty; describe the command you want");
    }

    let config = match &cli.config_file {
        Some(path) => GeneratorConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    let generator = Generator::new().with_config(config);

    let artifact = if cli.system {
        generator.generate_system(&cli.prompt)?
    } else {
        generator.generate(&cli.prompt)?
    };

    if cli.verbose {
        eprintln!(
            "{} {} ({}, {} feature{})",
            "generated".green().bold(),
            artifact.name.cyan(),
            artifact.category,
            artifact.features_applied.len(),
            if artifact.features_applied.len() == 1 { "" } else { "s" },
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&artifact)?);
        return Ok(());
    }

    let format: OutputFormat = cli.format.into();
    let code = frame(&artifact.code, format);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &code)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("{} {}", "wrote".green().bold(), path.display());
        }
        None => println!("{code}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_minimal() {
        let cli = Cli::parse_from(["botsmith", "comando de ping"]);
        assert_eq!(cli.prompt, "comando de ping");
        assert!(!cli.system);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "botsmith",
            "--system",
            "--output",
            "bot.js",
            "sistema de ticket",
        ]);
        assert!(cli.system);
        assert_eq!(cli.output.unwrap().to_str().unwrap(), "bot.js");
    }

    #[test]
    fn test_run_rejects_empty_prompt() {
        let cli = Cli::parse_from(["botsmith", "   "]);
        assert!(run(cli).is_err());
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saudacao.js");
        let cli = Cli::parse_from([
            "botsmith",
            "--output",
            path.to_str().unwrap(),
            "comando chamado saudacao com embed",
        ]);
        run(cli).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains(".setName('saudacao')"));
    }
}
