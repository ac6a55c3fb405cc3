//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "botsmith")]
#[command(about = "Botsmith - generate Discord bot command code from a prompt")]
#[command(
    long_about = r#"Botsmith - generate Discord bot command code from a prompt

USAGE:
  botsmith "comando chamado saudacao com embed"   # Single command
  botsmith --system "sistema de ticket completo"  # Whole bundle
  botsmith --output ping.js "comando de ping"     # Write to a file
  botsmith --json "comando de ping"               # Full artifact as JSON"#
)]
#[command(version)]
pub struct Cli {
    /// Prompt describing the desired command or system
    pub prompt: String,

    /// Generate a complete system bundle instead of a single command
    #[arg(long)]
    pub system: bool,

    /// Output framing for the generated code
    #[arg(long, value_enum, default_value = "plain")]
    pub format: FormatArg,

    /// Emit the full artifact (name, category, features, code) as JSON
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Write the generated code to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Raw code text
    Plain,
    /// Fenced markdown block
    Markdown,
}

impl From<FormatArg> for botsmith_core::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => Self::Plain,
            FormatArg::Markdown => Self::Markdown,
        }
    }
}
