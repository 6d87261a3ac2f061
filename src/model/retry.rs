/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BACKOFF_INTERVAL_MS, DEFAULT_MAX_JITTER_MS, DEFAULT_MAX_RETRY_COUNT,
    RETRYABLE_STATUS_CODES,
};
use crate::utils::config::get_env_or_default;
use rand::Rng;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry policy applied inside the transport
///
/// Waits are constant: `backoff_interval_ms` plus a random jitter in
/// `0..=max_jitter_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt (0 = single attempt)
    pub max_retry_count: u32,
    /// Constant wait between attempts in milliseconds
    pub backoff_interval_ms: u64,
    /// Maximum random jitter added to each wait in milliseconds
    pub max_jitter_ms: u64,
}

impl RetryConfig {
    /// Creates a retry configuration with the crate defaults
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_retries(DEFAULT_MAX_RETRY_COUNT)
    }

    /// Single attempt, no retries
    #[must_use]
    pub fn none() -> Self {
        Self::with_max_retries(0)
    }

    /// Default backoff with a custom number of retries
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: max_retries,
            backoff_interval_ms: DEFAULT_BACKOFF_INTERVAL_MS,
            max_jitter_ms: DEFAULT_MAX_JITTER_MS,
        }
    }

    /// Default retry count with a custom backoff
    #[must_use]
    pub fn with_backoff(interval_ms: u64, max_jitter_ms: u64) -> Self {
        Self::with_max_retries_and_backoff(DEFAULT_MAX_RETRY_COUNT, interval_ms, max_jitter_ms)
    }

    /// Custom retry count and backoff
    #[must_use]
    pub fn with_max_retries_and_backoff(
        max_retries: u32,
        interval_ms: u64,
        max_jitter_ms: u64,
    ) -> Self {
        Self {
            max_retry_count: max_retries,
            backoff_interval_ms: interval_ms,
            max_jitter_ms,
        }
    }

    /// Loads the policy from `BASSA_MAX_RETRY_COUNT`, `BASSA_RETRY_BACKOFF_MS`
    /// and `BASSA_RETRY_MAX_JITTER_MS`, falling back to the defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_retry_count: get_env_or_default("BASSA_MAX_RETRY_COUNT", DEFAULT_MAX_RETRY_COUNT),
            backoff_interval_ms: get_env_or_default(
                "BASSA_RETRY_BACKOFF_MS",
                DEFAULT_BACKOFF_INTERVAL_MS,
            ),
            max_jitter_ms: get_env_or_default("BASSA_RETRY_MAX_JITTER_MS", DEFAULT_MAX_JITTER_MS),
        }
    }

    /// Gets the maximum retry count
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count
    }

    /// Computes the next wait, jitter included
    #[must_use]
    pub fn delay(&self) -> Duration {
        let jitter = rand::rng().random_range(0..=self.max_jitter_ms);
        Duration::from_millis(self.backoff_interval_ms.saturating_add(jitter))
    }

    /// Returns true when a response with this status should be retried
    #[must_use]
    pub fn should_retry_status(status: StatusCode) -> bool {
        RETRYABLE_STATUS_CODES.contains(&status.as_u16())
    }

    /// Returns true when a transport error should be retried
    #[must_use]
    pub fn should_retry_error(error: &reqwest::Error) -> bool {
        error.is_timeout() || error.is_connect()
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}
