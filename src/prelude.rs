/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Bassa Client Prelude
//!
//! ```rust
//! use bassa_client::prelude::*;
//!
//! let config = Config::new("http://localhost:5000", 5000, 1);
//! assert!(config.validate().is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, RequestDefaults, RestApiConfig};
pub use crate::model::retry::RetryConfig;
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AppError, BassaResult, ErrorKind};

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

pub use crate::application::auth::{Auth, Session};
pub use crate::application::client::Client;
pub use crate::model::http::HttpClient;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::compression::CompressionService;
pub use crate::application::interfaces::download::DownloadService;
pub use crate::application::interfaces::file::FileService;
pub use crate::application::interfaces::user::UserService;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{
    AuthLevel, CompressionRequest, DownloadRequest, NewUserRequest, RateRequest,
    UpdateUserRequest,
};
pub use crate::model::responses::ApiResponse;
pub use crate::model::utils::validate_format;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::{setup_default_file_logger, setup_file_logger, setup_logger};
