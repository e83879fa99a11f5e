mod cli;
mod client;
mod config;
mod dispatch;
mod exec;
mod gemini;
mod openai;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.run().await
}
