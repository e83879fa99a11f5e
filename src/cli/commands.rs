use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::client::{set_verbose_logging, verbose_log};
use crate::config::Config;
use crate::dispatch::Dispatcher;

use super::args::Cli;
use super::output;

pub(crate) async fn run(cli: Cli) -> Result<ExitCode> {
    set_verbose_logging(cli.verbose);

    let Some(prompt) = prompt_from_words(&cli.prompt) else {
        println!("{}", output::render_usage_error()?);
        return Ok(ExitCode::FAILURE);
    };

    let env_file = Config::env_file_path(cli.env_file.as_deref());
    let mut config = Config::load(&env_file);
    if cli.api_only {
        config.runtime.cli_enabled = false;
    }
    verbose_log(
        "config",
        format!(
            "chatgpt model {}, gemini model {}, cli tools {}",
            config.openai.model,
            config.gemini.model,
            if config.runtime.cli_enabled { "enabled" } else { "disabled" }
        ),
    );

    let report = Dispatcher::new(config).query_all(&prompt).await;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output::render_report(&report)?).context("Failed to write report")?;
    Ok(ExitCode::SUCCESS)
}

/// Joins the prompt words verbatim; `None` only when no words were given.
fn prompt_from_words(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
