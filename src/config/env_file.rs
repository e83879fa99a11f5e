use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::client::verbose_log;

/// Key/value pairs read from a dotenv-style file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Reads `path`; a missing or unreadable file yields an empty mapping.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let file = Self::parse(&contents);
                if file.is_empty() {
                    verbose_log("config", format!("{} has no settings", path.display()));
                } else {
                    verbose_log(
                        "config",
                        format!("loaded {} entries from {}", file.len(), path.display()),
                    );
                }
                file
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                verbose_log("config", format!("no config file at {}", path.display()));
                Self::default()
            }
            Err(err) => {
                verbose_log(
                    "config",
                    format!("ignoring unreadable config file {}: {err}", path.display()),
                );
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Self {
        let values = contents
            .lines()
            .filter_map(parse_line)
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    Some((key.trim(), strip_quotes(value.trim())))
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
