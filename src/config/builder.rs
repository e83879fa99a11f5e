use super::types::{Config, Provider, ProviderSettings, RuntimeSettings};

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) openai: ProviderSettings,
    pub(super) gemini: ProviderSettings,
    pub(super) runtime: RuntimeSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            openai: ProviderSettings::defaults_for(Provider::ChatGpt),
            gemini: ProviderSettings::defaults_for(Provider::Gemini),
            runtime: RuntimeSettings::default(),
        }
    }

    pub fn with_provider<F>(mut self, provider: Provider, update: F) -> Self
    where
        F: FnOnce(&mut ProviderSettings),
    {
        match provider {
            Provider::ChatGpt => update(&mut self.openai),
            Provider::Gemini => update(&mut self.gemini),
        }
        self
    }

    pub fn with_runtime<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut RuntimeSettings),
    {
        update(&mut self.runtime);
        self
    }

    pub fn build(self) -> Config {
        Config {
            openai: self.openai,
            gemini: self.gemini,
            runtime: self.runtime,
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
