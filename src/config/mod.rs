//! Configuration resolution for query-llms.
//!
//! Settings come from three layers, highest precedence first:
//! - an optional dotenv-style `KEY=VALUE` file
//! - process environment variables
//! - built-in defaults (models, endpoints, timeouts; API keys have none)
//!
//! Resolution never fails: anything missing or malformed falls through to
//! the next layer.

mod builder;
mod constants;
mod defaults;
mod env_file;
mod environment;
mod loader;
mod types;

pub use defaults::default_user_agent;
pub use types::{Config, Provider, ProviderSettings};

#[cfg(test)]
pub(crate) mod test_support;
