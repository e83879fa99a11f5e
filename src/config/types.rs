use std::fmt;

use super::constants::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
    GEMINI_API_KEY, GEMINI_BASE_URL, GEMINI_MODEL, OPENAI_API_KEY, OPENAI_BASE_URL, OPENAI_MODEL,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub openai: ProviderSettings,
    pub gemini: ProviderSettings,
    pub runtime: RuntimeSettings,
}

impl Config {
    pub fn provider(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::ChatGpt => &self.openai,
            Provider::Gemini => &self.gemini,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub cli_tool: String,
}

#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    /// When false, local CLI tools are never consulted and results carry no source.
    pub cli_enabled: bool,
    pub cli_timeout_secs: u64,
    pub api_timeout_secs: u64,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    ChatGpt,
    Gemini,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::ChatGpt => write!(f, "chatgpt"),
            Provider::Gemini => write!(f, "gemini"),
        }
    }
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::ChatGpt, Provider::Gemini];

    pub fn display_name(self) -> &'static str {
        match self {
            Provider::ChatGpt => "ChatGPT",
            Provider::Gemini => "Gemini",
        }
    }

    pub fn default_cli_tool(self) -> &'static str {
        match self {
            Provider::ChatGpt => "codex",
            Provider::Gemini => "gemini",
        }
    }

    pub fn api_key_env_var(self) -> &'static str {
        match self {
            Provider::ChatGpt => OPENAI_API_KEY,
            Provider::Gemini => GEMINI_API_KEY,
        }
    }

    pub fn model_env_var(self) -> &'static str {
        match self {
            Provider::ChatGpt => OPENAI_MODEL,
            Provider::Gemini => GEMINI_MODEL,
        }
    }

    pub fn base_url_env_var(self) -> &'static str {
        match self {
            Provider::ChatGpt => OPENAI_BASE_URL,
            Provider::Gemini => GEMINI_BASE_URL,
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Provider::ChatGpt => DEFAULT_OPENAI_MODEL,
            Provider::Gemini => DEFAULT_GEMINI_MODEL,
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Provider::ChatGpt => DEFAULT_OPENAI_BASE_URL,
            Provider::Gemini => DEFAULT_GEMINI_BASE_URL,
        }
    }
}
