use std::sync::{Mutex, MutexGuard, OnceLock};

const MANAGED_VARS: &[&str] = &[
    "OPENAI_API_KEY",
    "GEMINI_API_KEY",
    "OPENAI_MODEL",
    "GEMINI_MODEL",
    "OPENAI_BASE_URL",
    "GEMINI_BASE_URL",
    "LLM_CLI_TIMEOUT_SECS",
    "LLM_API_TIMEOUT_SECS",
];

pub(crate) fn env_lock<'a>() -> MutexGuard<'a, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Clears every variable the resolver reads, then applies `vars`.
    pub(crate) fn new(vars: &[(&str, &str)]) -> Self {
        let saved = MANAGED_VARS
            .iter()
            .map(|key| (key.to_string(), std::env::var(key).ok()))
            .collect::<Vec<_>>();
        for key in MANAGED_VARS {
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in vars {
            unsafe { std::env::set_var(key, value) };
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
