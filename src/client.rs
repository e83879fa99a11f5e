use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use colored::Colorize;
use reqwest::{Client, Response, StatusCode};

use crate::config::default_user_agent;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose_logging(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn verbose_enabled() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Writes a diagnostic line to stderr when `--verbose` is on. Stdout carries only JSON.
pub fn verbose_log(scope: &str, message: impl Display) {
    if verbose_enabled() {
        eprintln!("{} {}", format!("[{scope}]").cyan().bold(), message);
    }
}

/// A provider endpoint that turns a single prompt into a single answer.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub type DynCompletionClient = Box<dyn CompletionClient>;

/// Sampling parameters shared by every provider request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

pub(crate) fn build_http_client(timeout_secs: u64, provider: &str) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(default_user_agent())
        .build()
        .with_context(|| format!("Failed to build {provider} HTTP client"))
}

pub(crate) fn sanitize_base_url(base_url: impl Into<String>) -> Result<String> {
    let sanitized = base_url.into().trim_end_matches('/').to_string();
    if sanitized.is_empty() {
        return Err(anyhow!("Base URL cannot be empty"));
    }
    Ok(sanitized)
}

/// Passes successful responses through and maps everything else to a readable error.
pub(crate) async fn ensure_success(response: Response, provider: &str) -> Result<Response> {
    let status = response.status();
    verbose_log(provider, format!("HTTP {status}"));

    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow!(
                "Rate limit exceeded. Please wait before trying again. (API response: {})",
                error_text
            ))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow!(
            "Invalid API key. Please check your {provider} API key configuration. ({status})"
        )),
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow!("Invalid request ({status}): {error_text}"))
        }
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => Err(anyhow!(
            "{provider} service is temporarily unavailable ({status}). Please try again later."
        )),
        status => {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(anyhow!("{provider} API error (status {status}): {error_text}"))
        }
    }
}
