use std::env;

use crate::client::verbose_log;

use super::env_file::EnvFile;

/// Reads a process environment variable; unset or non-UTF-8 values are absent.
pub fn env_string(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(val) => Some(val),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            verbose_log("config", format!("{key} contains invalid UTF-8, ignoring"));
            None
        }
    }
}

/// Looks `key` up in the file first, then the environment. Blank values count as unset.
pub fn lookup(file: &EnvFile, key: &str) -> Option<String> {
    file.get(key)
        .map(str::to_string)
        .filter(|value| !value.trim().is_empty())
        .or_else(|| env_string(key).filter(|value| !value.trim().is_empty()))
}

/// Like [`lookup`], for positive integers. Unparseable values are reported and skipped.
pub fn lookup_secs(file: &EnvFile, key: &str) -> Option<u64> {
    let raw = lookup(file, key)?;
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => {
            verbose_log(
                "config",
                format!("{key}='{raw}' is not a positive number of seconds, using default"),
            );
            None
        }
    }
}
