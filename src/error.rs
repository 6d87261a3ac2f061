/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types returned by every client operation

use reqwest::StatusCode;
use std::fmt;

/// Coarse classification of an [`AppError`]
///
/// Callers that only need to decide between "fix the input", "try again later"
/// and "give up" can match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid client configuration (base URL, timeout)
    Configuration,
    /// A parameter was empty, zero where forbidden, or badly formatted
    Validation,
    /// The request could not be delivered or the server answered with a non-2xx status
    Transport,
    /// A body could not be encoded or a response could not be decoded
    Decode,
    /// The server answered but broke the expected protocol (e.g. missing header)
    Protocol,
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Invalid configuration
    Config(String),
    /// Missing or empty required parameter
    InvalidInput(String),
    /// Parameter present but malformed (e.g. email address)
    InvalidFormat(String),
    /// Network level failure reported by reqwest
    Network(reqwest::Error),
    /// 401 or 403 from the server
    Unauthorized,
    /// 404 from the server
    NotFound,
    /// 429 from the server after all retries were used
    RateLimitExceeded,
    /// Any other non-success status
    Unexpected(StatusCode),
    /// JSON decoding failure
    Json(serde_json::Error),
    /// Request body could not be serialized
    SerializationError(String),
    /// Expected response header was absent or unreadable
    MissingHeader(String),
    /// Local I/O failure (log file)
    Io(std::io::Error),
}

impl AppError {
    /// Returns the coarse kind of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Config(_) => ErrorKind::Configuration,
            AppError::InvalidInput(_) | AppError::InvalidFormat(_) => ErrorKind::Validation,
            AppError::Network(_)
            | AppError::Unauthorized
            | AppError::NotFound
            | AppError::RateLimitExceeded
            | AppError::Unexpected(_)
            | AppError::Io(_) => ErrorKind::Transport,
            AppError::Json(_) | AppError::SerializationError(_) => ErrorKind::Decode,
            AppError::MissingHeader(_) => ErrorKind::Protocol,
        }
    }

    /// Whether repeating the same call later could succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Network(e) => e.is_timeout() || e.is_connect(),
            AppError::RateLimitExceeded => true,
            AppError::Unexpected(status) => status.is_server_error(),
            _ => false,
        }
    }

    /// Maps a non-success HTTP status to an error
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized,
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded,
            other => AppError::Unexpected(other),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "configuration error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::InvalidFormat(msg) => write!(f, "invalid format: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::MissingHeader(name) => write!(f, "missing response header: {name}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}

/// Shorthand result type used across the crate
pub type BassaResult<T> = Result<T, AppError>;
