use crate::config::toml_config::{GuestConfig, LogFormat};
use crate::domain::model::{NumericKind, Operation};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "guest-maths")]
#[command(about = "Host a maths guest component and invoke its operations")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Override the declared numeric family
    #[arg(long, global = true, value_enum)]
    pub numeric: Option<NumericKind>,

    /// Override the language segment of source tags
    #[arg(long, global = true)]
    pub language: Option<String>,

    #[arg(long, global = true, help = "Emit diagnostics as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Multiply two numbers
    Multiply(OperandArgs),
    /// Add two numbers
    Add(OperandArgs),
    /// Subtract the second number from the first
    Subtract(OperandArgs),
    /// Divide the first number by the second
    Divide(OperandArgs),
    /// Answer newline-delimited JSON invocations on stdin
    Serve,
}

#[derive(Debug, Clone, Args)]
pub struct OperandArgs {
    #[arg(allow_negative_numbers = true)]
    pub a: String,

    #[arg(allow_negative_numbers = true)]
    pub b: String,
}

impl Command {
    pub fn operation(&self) -> Option<(Operation, &OperandArgs)> {
        match self {
            Command::Multiply(args) => Some((Operation::Multiply, args)),
            Command::Add(args) => Some((Operation::Add, args)),
            Command::Subtract(args) => Some((Operation::Subtract, args)),
            Command::Divide(args) => Some((Operation::Divide, args)),
            Command::Serve => None,
        }
    }
}

impl CliConfig {
    /// Command-line flags win over the file.
    pub fn apply_overrides(&self, config: &mut GuestConfig) {
        if let Some(numeric) = self.numeric {
            config.component.numeric = numeric;
        }
        if let Some(language) = &self.language {
            config.component.language = language.clone();
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }
    }
}
