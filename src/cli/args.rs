use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use super::commands;

/// Entry point for the `query_llms` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "query_llms",
    about = "Ask ChatGPT and Gemini the same question and print both answers as JSON",
    version,
    long_about = None
)]
pub struct Cli {
    /// Key/value file with API keys and model overrides (defaults to ./.env)
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Skip local CLI tools (codex, gemini) and call the APIs directly
    #[arg(long = "api-only")]
    pub api_only: bool,

    /// Log provider selection and HTTP activity to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Prompt text; all words are joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub prompt: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        commands::run(self).await
    }
}
