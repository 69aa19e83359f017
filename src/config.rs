use std::env;
use std::path::Path;

use crate::error::ChatError;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 50;
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DOTENV_FILE: &str = ".env";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    fn from_env_with(mut get_var: impl FnMut(&str) -> Option<String>) -> Self {
        let base_url = get_var("OPENAI_BASE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = parse_timeout_secs(get_var("CHAT_TIMEOUT_SECS").as_deref());

        Self {
            api_key: get_var("OPEN_API_KEY").unwrap_or_default(),
            base_url,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        if let Some(max_tokens) = max_tokens {
            self.max_tokens = max_tokens;
        }
        self
    }

    /// The credential as configured, or `MissingCredential` when it is
    /// empty or blank.
    pub fn api_key(&self) -> Result<&str, ChatError> {
        if self.api_key.trim().is_empty() {
            return Err(ChatError::MissingCredential);
        }
        Ok(&self.api_key)
    }
}

/// Overlays `./.env` onto the process environment. Variables that are
/// already set keep their values. Returns whether a file was loaded.
pub fn load_dotenv() -> Result<bool, ChatError> {
    load_dotenv_from(Path::new(DOTENV_FILE))
}

pub fn load_dotenv_from(path: &Path) -> Result<bool, ChatError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(err) if err.not_found() => Ok(false),
        Err(err) => Err(ChatError::ConfigLoad(err)),
    }
}

fn parse_positive_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

fn parse_timeout_secs(raw: Option<&str>) -> u64 {
    parse_positive_u64(raw, DEFAULT_TIMEOUT_SECS)
}

/// Shows just enough of a key to tell keys apart in logs.
pub fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(4).collect();
    format!("{prefix}****")
}
