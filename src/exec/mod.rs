//! Local CLI tools: PATH lookup and bounded, captured invocation.

use std::env;
use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::client::verbose_log;

/// Why a CLI attempt produced no answer.
#[derive(Debug)]
pub enum CliFailure {
    NonZeroExit { tool: String, stderr: String },
    EmptyOutput { tool: String },
    TimedOut { tool: String, secs: u64 },
    Io { tool: String, source: io::Error },
}

impl fmt::Display for CliFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliFailure::NonZeroExit { tool, stderr } => write!(f, "{tool} error: {stderr}"),
            CliFailure::EmptyOutput { tool } => write!(f, "{tool} returned no output"),
            CliFailure::TimedOut { tool, secs } => write!(f, "{tool} timed out after {secs}s"),
            CliFailure::Io { tool, source } => write!(f, "{tool} exception: {source}"),
        }
    }
}

impl std::error::Error for CliFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliFailure::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Finds `name` in `search_path` (or `$PATH` when `None`), like `command -v`.
///
/// Honors `PATHEXT` on Windows, so `codex.cmd` shims resolve too.
pub fn find_executable(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let found = match search_path {
        Some(paths) => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            which::which_in(name, Some(paths), cwd)
        }
        None => which::which(name),
    };

    found.ok()
}

/// Runs `<program> -p <prompt>` and returns its trimmed stdout.
///
/// The child is killed if it outlives `timeout_secs`. `tool` names the tool in
/// failure messages; `program` is the resolved executable path.
pub async fn run_prompt(
    tool: &str,
    program: &Path,
    prompt: &str,
    timeout_secs: u64,
) -> Result<String, CliFailure> {
    verbose_log("cli", format!("running {} -p <prompt>", program.display()));

    let output = TokioCommand::new(program)
        .arg("-p")
        .arg(prompt)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = match timeout(Duration::from_secs(timeout_secs), output).await {
        Ok(Ok(output)) => output,
        Ok(Err(source)) => {
            return Err(CliFailure::Io {
                tool: tool.to_string(),
                source,
            });
        }
        Err(_) => {
            return Err(CliFailure::TimedOut {
                tool: tool.to_string(),
                secs: timeout_secs,
            });
        }
    };

    if !output.status.success() {
        verbose_log("cli", format!("{tool} exited with {}", output.status));
        return Err(CliFailure::NonZeroExit {
            tool: tool.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        return Err(CliFailure::EmptyOutput {
            tool: tool.to_string(),
        });
    }

    Ok(stdout)
}
