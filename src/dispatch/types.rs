use std::fmt;

use serde::{Serialize, Serializer};

/// Which access path produced a provider's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Cli,
    Api { model: String },
    None,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Cli => write!(f, "cli"),
            Source::Api { model } => write!(f, "api ({model})"),
            Source::None => write!(f, "none"),
        }
    }
}

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderResult {
    pub model: String,
    /// Absent when CLI tools are disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouncilReport {
    pub prompt: String,
    pub chatgpt: ProviderResult,
    pub gemini: ProviderResult,
}
