use std::path::{Path, PathBuf};

use dirs::home_dir;

use super::builder::ConfigBuilder;
use super::constants::{API_TIMEOUT_SECS, CLI_TIMEOUT_SECS, DEFAULT_ENV_FILE};
use super::env_file::EnvFile;
use super::environment::{lookup, lookup_secs};
use super::types::{Config, Provider};

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Resolves the path of the key/value file, expanding a leading `~/`.
    pub fn env_file_path(explicit: Option<&Path>) -> PathBuf {
        let Some(path) = explicit else {
            return PathBuf::from(DEFAULT_ENV_FILE);
        };

        match (path.strip_prefix("~"), home_dir()) {
            (Ok(rest), Some(home)) => home.join(rest),
            _ => path.to_path_buf(),
        }
    }

    /// Loads the optional file at `path` and layers it over the environment.
    pub fn load(path: &Path) -> Self {
        Self::resolve(&EnvFile::load(path))
    }

    /// File values beat environment values, which beat built-in defaults.
    pub fn resolve(file: &EnvFile) -> Self {
        let mut builder = ConfigBuilder::new();

        for provider in Provider::ALL {
            builder = builder.with_provider(provider, |settings| {
                settings.api_key = lookup(file, provider.api_key_env_var());
                if let Some(model) = lookup(file, provider.model_env_var()) {
                    settings.model = model;
                }
                if let Some(base_url) = lookup(file, provider.base_url_env_var()) {
                    settings.base_url = base_url.trim_end_matches('/').to_string();
                }
            });
        }

        builder
            .with_runtime(|runtime| {
                if let Some(secs) = lookup_secs(file, CLI_TIMEOUT_SECS) {
                    runtime.cli_timeout_secs = secs;
                }
                if let Some(secs) = lookup_secs(file, API_TIMEOUT_SECS) {
                    runtime.api_timeout_secs = secs;
                }
            })
            .build()
    }
}
