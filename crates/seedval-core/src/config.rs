//! Generative-model provider configuration.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SEEDVAL_GEMINI_API_KEY` | — | API key (falls back to `GEMINI_API_KEY`, then `API_KEY`) |
//! | `SEEDVAL_GEMINI_MODEL` | `gemini-2.5-flash` | Model name |
//! | `SEEDVAL_GEMINI_BASE_URL` | Google endpoint | API base URL |
//!
//! Keys are only ever sent as a request header and never logged.

use std::fmt::{Debug, Formatter};

use crate::retry::RetryPolicy;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const API_KEY_VARS: [&str; 3] = ["SEEDVAL_GEMINI_API_KEY", "GEMINI_API_KEY", "API_KEY"];

#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
    pub retry: RetryPolicy,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: String::from(DEFAULT_MODEL),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retry: RetryPolicy::default(),
        }
    }
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            api_key: API_KEY_VARS.iter().find_map(|name| read(name)),
            model: read("SEEDVAL_GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: read("SEEDVAL_GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or(defaults.base_url),
            ..defaults
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("retry", &self.retry)
            .finish()
    }
}
