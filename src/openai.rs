use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::client::{
    CompletionClient, Sampling, build_http_client, ensure_success, sanitize_base_url, verbose_log,
};
use crate::config::ProviderSettings;

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    sampling: Sampling,
}

impl OpenAiClient {
    pub fn new(
        settings: &ProviderSettings,
        api_key: impl Into<String>,
        sampling: Sampling,
        timeout_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            http: build_http_client(timeout_secs, "OpenAI")?,
            base_url: sanitize_base_url(settings.base_url.as_str())?,
            api_key: api_key.into(),
            model: settings.model.clone(),
            sampling,
        })
    }

    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        verbose_log("openai", format!("POST {url} (model {})", request.model));

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to OpenAI chat completions endpoint")?;

        ensure_success(response, "OpenAI")
            .await?
            .json::<ChatCompletionResponse>()
            .await
            .context("Failed to parse OpenAI chat completion response JSON")
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: ChatMessageRole::User,
                content: prompt.to_string(),
            }],
            max_tokens: Some(self.sampling.max_tokens),
            temperature: Some(self.sampling.temperature),
        };

        let response = self.chat_completion(request).await?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("OpenAI returned no choices"))?;

        if let Some(reason) = choice.finish_reason.as_deref() {
            verbose_log("openai", format!("finish_reason={reason}"));
        }

        choice
            .message
            .content
            .ok_or_else(|| anyhow!("OpenAI response had no message content"))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatMessageRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    User,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}
