pub const DEFAULT_ENV_FILE: &str = ".env";

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-5-nano";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_CLI_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const CLI_TIMEOUT_SECS: &str = "LLM_CLI_TIMEOUT_SECS";
pub const API_TIMEOUT_SECS: &str = "LLM_API_TIMEOUT_SECS";
