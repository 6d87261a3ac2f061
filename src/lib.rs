//! # Bassa Client
//!
//! Async Rust client for the Bassa download manager REST API.
//!
//! Every method maps to a single endpoint: authenticate, manage users (add,
//! remove, update, approve, block), manage the download queue (start, kill,
//! add, remove, rate, list), run compression jobs and fetch files.
//!
//! ## Features
//!
//! - Session token captured at login and attached to every later call
//! - Per-request timeout and transparent retry with constant backoff
//! - Parameter validation (empty fields, email format) before any request
//! - Typed errors ([`error::AppError`]) grouped by [`error::ErrorKind`]
//! - Responses decoded as generic JSON and logged pretty-printed through `tracing`
//!
//! ## Usage
//!
//! ```ignore
//! use bassa_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::init("http://localhost:5000", 5000, 2)?;
//!     client.login("rand", "pass").await?;
//!     client.add_download("http://www.scorelab.org/assets/img/score.jpg").await?;
//!     let downloads = client.get_downloads(1).await?;
//!     println!("{}", downloads.pretty()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`Config::from_env`](application::config::Config::from_env) reads
//! `BASSA_API_URL`, `BASSA_TIMEOUT_MS`, `BASSA_MAX_RETRY_COUNT`,
//! `BASSA_RETRY_BACKOFF_MS`, `BASSA_RETRY_MAX_JITTER_MS` and
//! `BASSA_SERVER_KEY` (a `.env` file is loaded first). `LOGLEVEL` controls
//! [`utils::logger::setup_logger`].

/// Client, session and configuration
pub mod application;
/// Crate-wide constants (defaults, headers, endpoint paths)
pub mod constants;
/// Error types
pub mod error;
/// Transport, request/response models, retry policy and validation
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
