/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_API_URL, DEFAULT_SERVER_KEY, DEFAULT_TIMEOUT_MS, DEFAULT_USER_DOWNLOADS_LIMIT,
};
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Bassa API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Retry policy of the transport
    pub retry: RetryConfig,
    /// Fallback values for optional request parameters
    pub defaults: RequestDefaults,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Bassa server, e.g. `http://localhost:5000`
    pub base_url: String,
    /// Timeout in milliseconds for each HTTP request
    pub timeout_ms: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Explicit fallbacks for parameters callers may leave out
///
/// `None` disables the fallback and makes the parameter mandatory.
pub struct RequestDefaults {
    /// Server key used when a download start/kill is called with an empty key
    pub server_key: Option<String>,
    /// Limit used when the per-user download listing is called without one
    pub user_downloads_limit: Option<u32>,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            server_key: Some(DEFAULT_SERVER_KEY.to_string()),
            user_downloads_limit: Some(DEFAULT_USER_DOWNLOADS_LIMIT),
        }
    }
}

impl RequestDefaults {
    /// No fallbacks at all: every parameter must be given
    pub fn strict() -> Self {
        Self {
            server_key: None,
            user_downloads_limit: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Config {
    /// Builds a configuration from explicit values
    ///
    /// # Arguments
    /// * `base_url` - Server base URL
    /// * `timeout_ms` - Per-request timeout in milliseconds
    /// * `retry_count` - Retries after the first attempt on transient failures
    pub fn new(base_url: &str, timeout_ms: u64, retry_count: u32) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout_ms,
            },
            retry: RetryConfig::with_max_retries(retry_count),
            defaults: RequestDefaults::default(),
        }
    }

    /// Loads the configuration from the environment (and `.env` if present)
    ///
    /// Recognised variables: `BASSA_API_URL`, `BASSA_TIMEOUT_MS`,
    /// `BASSA_SERVER_KEY` plus the retry variables read by
    /// [`RetryConfig::from_env`].
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("BASSA_API_URL", String::from(DEFAULT_API_URL));
        let timeout_ms = get_env_or_default("BASSA_TIMEOUT_MS", DEFAULT_TIMEOUT_MS);
        let server_key = get_env_or_default("BASSA_SERVER_KEY", String::from(DEFAULT_SERVER_KEY));

        if base_url == DEFAULT_API_URL {
            debug!("BASSA_API_URL not set, using {}", DEFAULT_API_URL);
        }

        Config {
            rest_api: RestApiConfig {
                base_url,
                timeout_ms,
            },
            retry: RetryConfig::from_env(),
            defaults: RequestDefaults {
                server_key: Some(server_key),
                ..RequestDefaults::default()
            },
        }
    }

    /// Replaces the retry policy
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Replaces the parameter fallbacks
    pub fn with_defaults(mut self, defaults: RequestDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Checks the base URL and timeout, returning the parsed URL
    ///
    /// # Errors
    /// `AppError::Config` when the URL is empty, unparseable or not http(s),
    /// or when the timeout is zero.
    pub fn validate(&self) -> Result<Url, AppError> {
        let raw = self.rest_api.base_url.trim();
        if raw.is_empty() {
            error!("Base URL is empty");
            return Err(AppError::Config("base URL must not be empty".to_string()));
        }
        if self.rest_api.timeout_ms == 0 {
            error!("Timeout is zero");
            return Err(AppError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        let url = Url::parse(raw).map_err(|e| {
            error!("Invalid base URL {}: {}", raw, e);
            AppError::Config(format!("invalid base URL {raw}: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            error!("Unsupported base URL {}", raw);
            return Err(AppError::Config(format!(
                "base URL must be an http(s) URL: {raw}"
            )));
        }
        Ok(url)
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.rest_api.timeout_ms)
    }
}
