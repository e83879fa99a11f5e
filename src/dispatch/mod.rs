//! Per-provider fallback: local CLI tool first, then the HTTPS API, then an
//! explanatory error string. Nothing in here returns an error to the caller;
//! every failure ends up in the provider's `response` text.

mod types;

use std::ffi::OsString;

use anyhow::Result;

use crate::client::{DynCompletionClient, Sampling, verbose_log};
use crate::config::{Config, Provider, ProviderSettings};
use crate::exec::{self, CliFailure};
use crate::gemini::GeminiClient;
use crate::openai::OpenAiClient;

pub use types::{CouncilReport, ProviderResult, Source};

pub struct Dispatcher {
    config: Config,
    search_path: Option<OsString>,
}

impl Dispatcher {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            search_path: None,
        }
    }

    /// Looks CLI tools up in `paths` instead of `$PATH`.
    #[cfg(test)]
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    /// Queries both providers. They share nothing, so they run concurrently.
    pub async fn query_all(&self, prompt: &str) -> CouncilReport {
        let (chatgpt, gemini) = tokio::join!(
            self.query(Provider::ChatGpt, prompt),
            self.query(Provider::Gemini, prompt)
        );

        CouncilReport {
            prompt: prompt.to_string(),
            chatgpt,
            gemini,
        }
    }

    pub async fn query(&self, provider: Provider, prompt: &str) -> ProviderResult {
        let settings = self.config.provider(provider);

        let cli_failure = if self.config.runtime.cli_enabled {
            match self.try_cli(provider, settings, prompt).await {
                Ok(answer) => return self.finish(settings, Source::Cli, answer),
                Err(failure) => failure,
            }
        } else {
            None
        };

        if let Some(api_key) = settings.api_key.as_deref() {
            let response = match self.try_api(provider, settings, api_key, prompt).await {
                Ok(answer) => answer,
                Err(err) => {
                    verbose_log(&provider.to_string(), format!("API call failed: {err:#}"));
                    format!(
                        "Error querying {} ({}): {err:#}",
                        provider.display_name(),
                        settings.model
                    )
                }
            };
            let source = Source::Api {
                model: settings.model.clone(),
            };
            return self.finish(settings, source, response);
        }

        let key_var = provider.api_key_env_var();
        let response = match (self.config.runtime.cli_enabled, cli_failure) {
            (false, _) => format!("Error: {key_var} not found"),
            (true, Some(failure)) => format!(
                "Error: {} CLI failed ({failure}) and {key_var} not found",
                settings.cli_tool
            ),
            (true, None) => format!(
                "Error: {} CLI not available and {key_var} not found",
                settings.cli_tool
            ),
        };
        self.finish(settings, Source::None, response)
    }

    /// `Ok` carries the answer; `Err(None)` means the tool is not installed.
    async fn try_cli(
        &self,
        provider: Provider,
        settings: &ProviderSettings,
        prompt: &str,
    ) -> Result<String, Option<CliFailure>> {
        let tool = settings.cli_tool.as_str();
        let Some(program) = exec::find_executable(tool, self.search_path.as_deref()) else {
            verbose_log(&provider.to_string(), format!("{tool} not found on PATH"));
            return Err(None);
        };

        exec::run_prompt(tool, &program, prompt, self.config.runtime.cli_timeout_secs)
            .await
            .map_err(|failure| {
                verbose_log(
                    &provider.to_string(),
                    format!("{failure}, falling back to API"),
                );
                Some(failure)
            })
    }

    async fn try_api(
        &self,
        provider: Provider,
        settings: &ProviderSettings,
        api_key: &str,
        prompt: &str,
    ) -> Result<String> {
        self.api_client(provider, settings, api_key)?
            .complete(prompt)
            .await
    }

    fn api_client(
        &self,
        provider: Provider,
        settings: &ProviderSettings,
        api_key: &str,
    ) -> Result<DynCompletionClient> {
        let runtime = &self.config.runtime;
        let sampling = Sampling {
            temperature: runtime.temperature,
            max_tokens: runtime.max_tokens,
        };

        let client: DynCompletionClient = match provider {
            Provider::ChatGpt => Box::new(OpenAiClient::new(
                settings,
                api_key,
                sampling,
                runtime.api_timeout_secs,
            )?),
            Provider::Gemini => Box::new(GeminiClient::new(
                settings,
                api_key,
                sampling,
                runtime.api_timeout_secs,
            )?),
        };
        Ok(client)
    }

    fn finish(
        &self,
        settings: &ProviderSettings,
        source: Source,
        response: String,
    ) -> ProviderResult {
        ProviderResult {
            model: settings.model.clone(),
            source: self.config.runtime.cli_enabled.then_some(source),
            response,
        }
    }
}

#[cfg(all(test, unix))]
mod tests;
