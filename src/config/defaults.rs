use super::constants::*;
use super::types::{Provider, ProviderSettings, RuntimeSettings};

impl ProviderSettings {
    pub fn defaults_for(provider: Provider) -> Self {
        Self {
            api_key: None,
            model: provider.default_model().to_string(),
            base_url: provider.default_base_url().to_string(),
            cli_tool: provider.default_cli_tool().to_string(),
        }
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            cli_enabled: true,
            cli_timeout_secs: DEFAULT_CLI_TIMEOUT_SECS,
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("query-llms/{}", env!("CARGO_PKG_VERSION"))
}
