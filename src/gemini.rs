use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::client::{
    CompletionClient, Sampling, build_http_client, ensure_success, sanitize_base_url, verbose_log,
};
use crate::config::ProviderSettings;

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    sampling: Sampling,
}

impl GeminiClient {
    pub fn new(
        settings: &ProviderSettings,
        api_key: impl Into<String>,
        sampling: Sampling,
        timeout_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            http: build_http_client(timeout_secs, "Gemini")?,
            base_url: sanitize_base_url(settings.base_url.as_str())?,
            api_key: api_key.into(),
            model: settings.model.clone(),
            sampling,
        })
    }

    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        // The key travels as a query parameter; keep it out of the log line.
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        verbose_log("gemini", format!("POST {url}"));

        let response = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request to Gemini generateContent endpoint")?;

        ensure_success(response, "Gemini")
            .await?
            .json::<GenerateContentResponse>()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse Gemini generateContent response JSON")
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.sampling.temperature,
                max_output_tokens: self.sampling.max_tokens,
            },
        };

        let response = self.generate_content(request).await?;
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Gemini returned no candidates"))?;

        if let Some(reason) = candidate.finish_reason.as_deref() {
            verbose_log("gemini", format!("finishReason={reason}"));
        }

        candidate
            .content
            .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
            .ok_or_else(|| anyhow!("Gemini candidate had no text parts"))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}
