use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::ConfigError;

/// Environment lookup: process variables first, then the `.env` file.
///
/// The `.env` content is kept in a map rather than pushed into the process
/// environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    file_vars: HashMap<String, String>,
    use_process_env: bool,
}

impl EnvSource {
    // Process env plus the .env at the given path, if it exists
    pub fn load<P: AsRef<Path>>(dotenv_path: P) -> Self {
        let path = dotenv_path.as_ref();
        let file_vars = if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => {
                    let vars = parse_dotenv(&content);
                    debug!(path = %path.display(), count = vars.len(), "loaded .env");
                    vars
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to read .env");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Self {
            file_vars,
            use_process_env: true,
        }
    }

    // Isolated source, ignores the process environment
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            file_vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            use_process_env: false,
        }
    }

    // Empty values count as unset
    pub fn get(&self, key: &str) -> Option<String> {
        let from_process = if self.use_process_env {
            std::env::var(key).ok()
        } else {
            None
        };

        from_process
            .or_else(|| self.file_vars.get(key).cloned())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn require(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingVar(key.to_string()))
    }

    pub fn get_u64(&self, key: &str, default: u64) -> Result<u64, ConfigError> {
        match self.get(key) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
                key: key.to_string(),
                value,
            }),
            None => Ok(default),
        }
    }
}

// KEY=value lines; blank lines, comments and lines without '=' are skipped.
// Trailing "# comment" and one pair of matching quotes are stripped.
pub fn parse_dotenv(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };

        let value = value.trim();
        let value = if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            &value[1..value.len() - 1]
        } else {
            value.split(" #").next().unwrap_or("").trim()
        };

        vars.insert(key.trim().to_string(), value.to_string());
    }

    vars
}
