/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Bassa API
//!
//! One method per endpoint. Parameters are validated before any request is
//! built, so validation errors never touch the network.
//!
//! # Example
//! ```ignore
//! use bassa_client::prelude::*;
//!
//! let client = Client::init("http://localhost:5000", 5000, 2)?;
//! client.login("rand", "pass").await?;
//! client.add_download("http://www.scorelab.org/assets/img/score.jpg").await?;
//! let downloads = client.get_downloads(1).await?;
//! println!("{}", downloads.pretty()?);
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::interfaces::compression::CompressionService;
use crate::application::interfaces::download::DownloadService;
use crate::application::interfaces::file::FileService;
use crate::application::interfaces::user::UserService;
use crate::constants::{
    COMPRESS_PATH, COMPRESSION_PROGRESS_PATH, DOWNLOAD_KILL_PATH, DOWNLOAD_PATH,
    DOWNLOAD_START_PATH, DOWNLOADS_PATH, FILE_PATH, REGULAR_USER_PATH, SERVER_KEY_HEADER,
    USER_APPROVE_PATH, USER_BLOCKED_PATH, USER_DOWNLOADS_PATH, USER_HEAVY_PATH, USER_PATH,
    USER_REQUESTS_PATH,
};
use crate::error::AppError;
use crate::model::http::{HttpClient, RequestBody};
use crate::model::requests::{
    AuthLevel, CompressionRequest, DownloadRequest, NewUserRequest, RateRequest,
    UpdateUserRequest,
};
use crate::model::responses::ApiResponse;
use crate::model::utils::{require_non_empty, require_positive, validate_format};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Bassa API client
///
/// Cheap to clone; clones share the transport and the session.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates an unauthenticated client from a configuration
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready for `login` or anonymous calls
    /// * `Err(AppError::Config)` - Invalid base URL or zero timeout
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client from a base URL, timeout (ms) and retry count
    pub fn init(base_url: &str, timeout_ms: u64, retry_count: u32) -> Result<Self, AppError> {
        Self::new(Config::new(base_url, timeout_ms, retry_count))
    }

    /// Creates a client from `BASSA_*` environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env())
    }

    /// Logs in; the token is attached to every later call
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        self.http_client.login(username, password).await
    }

    /// Forgets the current token
    pub async fn logout(&self) {
        self.http_client.logout().await
    }

    /// Gets the current session
    pub async fn get_session(&self) -> Option<Session> {
        self.http_client.get_session().await
    }

    /// Gets the underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn resolve_server_key<'a>(&'a self, server_key: &'a str) -> Result<&'a str, AppError> {
        if !server_key.is_empty() {
            return Ok(server_key);
        }
        match self.http_client.config().defaults.server_key.as_deref() {
            Some(fallback) => {
                info!("Server key not given, continuing with: {}", fallback);
                Ok(fallback)
            }
            None => {
                error!("Server key not given and no default configured");
                Err(AppError::InvalidInput(
                    "server_key must not be empty".to_string(),
                ))
            }
        }
    }

    async fn send_with_server_key(
        &self,
        path: &str,
        server_key: &str,
    ) -> Result<ApiResponse, AppError> {
        let key = self.resolve_server_key(server_key)?;
        let url = self.http_client.url(path, &[])?;
        self.http_client
            .request(
                Method::GET,
                url,
                RequestBody::Empty,
                &[(SERVER_KEY_HEADER, key)],
            )
            .await
    }
}

#[async_trait]
impl UserService for Client {
    async fn add_regular_user(
        &self,
        user_name: &str,
        password: &str,
        email: &str,
    ) -> Result<ApiResponse, AppError> {
        require_non_empty(&[
            ("user_name", user_name),
            ("password", password),
            ("email", email),
        ])?;
        validate_format(email)?;

        info!("Adding regular user: {}", user_name);
        let body = NewUserRequest::regular(user_name, password, email);
        let url = self.http_client.url(REGULAR_USER_PATH, &[])?;
        self.http_client.post(url, Some(&body)).await
    }

    async fn add_user(
        &self,
        user_name: &str,
        password: &str,
        email: &str,
        auth_level: AuthLevel,
    ) -> Result<ApiResponse, AppError> {
        require_non_empty(&[
            ("user_name", user_name),
            ("password", password),
            ("email", email),
        ])?;
        validate_format(email)?;

        info!("Adding user {} with level {:?}", user_name, auth_level);
        let body = NewUserRequest::with_level(user_name, password, email, auth_level);
        let url = self.http_client.url(USER_PATH, &[])?;
        self.http_client.post(url, Some(&body)).await
    }

    async fn remove_user(&self, user_name: &str) -> Result<ApiResponse, AppError> {
        require_non_empty(&[("user_name", user_name)])?;
        info!("Removing user: {}", user_name);
        let url = self.http_client.url(USER_PATH, &[user_name])?;
        self.http_client.delete(url).await
    }

    async fn update_user(
        &self,
        user_name: &str,
        new_user_name: &str,
        password: &str,
        auth_level: AuthLevel,
        email: &str,
    ) -> Result<ApiResponse, AppError> {
        require_non_empty(&[
            ("user_name", user_name),
            ("new_user_name", new_user_name),
            ("password", password),
            ("email", email),
        ])?;
        validate_format(email)?;

        info!("Updating user {} -> {}", user_name, new_user_name);
        let body = UpdateUserRequest {
            user_name: new_user_name.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            auth_level: auth_level.into(),
        };
        let url = self.http_client.url(USER_PATH, &[user_name])?;
        self.http_client.put(url, &body).await
    }

    async fn get_users(&self) -> Result<ApiResponse, AppError> {
        let url = self.http_client.url(USER_PATH, &[])?;
        self.http_client.get(url).await
    }

    async fn get_signup_requests(&self) -> Result<ApiResponse, AppError> {
        let url = self.http_client.url(USER_REQUESTS_PATH, &[])?;
        self.http_client.get(url).await
    }

    async fn approve_user(&self, user_name: &str) -> Result<ApiResponse, AppError> {
        require_non_empty(&[("user_name", user_name)])?;
        info!("Approving user: {}", user_name);
        let url = self.http_client.url(USER_APPROVE_PATH, &[user_name])?;
        self.http_client.post::<()>(url, None).await
    }

    async fn get_blocked_users(&self) -> Result<ApiResponse, AppError> {
        let url = self.http_client.url(USER_BLOCKED_PATH, &[])?;
        self.http_client.get(url).await
    }

    async fn block_user(&self, user_name: &str) -> Result<ApiResponse, AppError> {
        require_non_empty(&[("user_name", user_name)])?;
        info!("Blocking user: {}", user_name);
        let url = self.http_client.url(USER_BLOCKED_PATH, &[user_name])?;
        self.http_client.post::<()>(url, None).await
    }

    async fn unblock_user(&self, user_name: &str) -> Result<ApiResponse, AppError> {
        require_non_empty(&[("user_name", user_name)])?;
        info!("Unblocking user: {}", user_name);
        let url = self.http_client.url(USER_BLOCKED_PATH, &[user_name])?;
        self.http_client.delete(url).await
    }

    async fn get_user_downloads(&self, limit: Option<u32>) -> Result<ApiResponse, AppError> {
        let limit = match limit {
            Some(limit) => limit,
            None => match self.http_client.config().defaults.user_downloads_limit {
                Some(fallback) => {
                    debug!("No limit given, using default {}", fallback);
                    fallback
                }
                None => {
                    error!("Limit not given and no default configured");
                    return Err(AppError::InvalidInput("limit is required".to_string()));
                }
            },
        };
        require_positive("limit", limit)?;

        let limit = limit.to_string();
        let url = self.http_client.url(USER_DOWNLOADS_PATH, &[limit.as_str()])?;
        self.http_client.get(url).await
    }

    async fn get_heaviest_users(&self) -> Result<ApiResponse, AppError> {
        let url = self.http_client.url(USER_HEAVY_PATH, &[])?;
        self.http_client.get(url).await
    }
}

#[async_trait]
impl DownloadService for Client {
    async fn start_download(&self, server_key: &str) -> Result<ApiResponse, AppError> {
        info!("Starting downloads");
        self.send_with_server_key(DOWNLOAD_START_PATH, server_key)
            .await
    }

    async fn kill_download(&self, server_key: &str) -> Result<ApiResponse, AppError> {
        info!("Killing downloads");
        self.send_with_server_key(DOWNLOAD_KILL_PATH, server_key)
            .await
    }

    async fn add_download(&self, link: &str) -> Result<ApiResponse, AppError> {
        require_non_empty(&[("link", link)])?;
        info!("Adding download: {}", link);
        let body = DownloadRequest {
            link: link.to_string(),
        };
        let url = self.http_client.url(DOWNLOAD_PATH, &[])?;
        self.http_client.post(url, Some(&body)).await
    }

    async fn remove_download(&self, id: u64) -> Result<ApiResponse, AppError> {
        info!("Removing download: {}", id);
        let id = id.to_string();
        let url = self.http_client.url(DOWNLOAD_PATH, &[id.as_str()])?;
        self.http_client.delete(url).await
    }

    async fn rate_download(&self, id: u64, rate: u32) -> Result<ApiResponse, AppError> {
        if rate == 0 {
            info!("Continuing with 0 rating");
        }
        let body = RateRequest { rate };
        let id = id.to_string();
        let url = self.http_client.url(DOWNLOAD_PATH, &[id.as_str()])?;
        self.http_client.post(url, Some(&body)).await
    }

    async fn get_downloads(&self, limit: u32) -> Result<ApiResponse, AppError> {
        require_positive("limit", limit)?;
        let limit = limit.to_string();
        let url = self.http_client.url(DOWNLOADS_PATH, &[limit.as_str()])?;
        self.http_client.get(url).await
    }

    async fn get_download(&self, id: u64) -> Result<ApiResponse, AppError> {
        let id = id.to_string();
        let url = self.http_client.url(DOWNLOAD_PATH, &[id.as_str()])?;
        self.http_client.get(url).await
    }
}

#[async_trait]
impl CompressionService for Client {
    async fn start_compression(&self, gids: &[String]) -> Result<ApiResponse, AppError> {
        if gids.is_empty() {
            error!("No job identifiers given for compression");
            return Err(AppError::InvalidInput("gid list must not be empty".to_string()));
        }
        for gid in gids {
            require_non_empty(&[("gid", gid.as_str())])?;
        }

        info!("Starting compression of {} jobs", gids.len());
        let body = CompressionRequest {
            gid: gids.to_vec(),
        };
        let url = self.http_client.url(COMPRESS_PATH, &[])?;
        self.http_client.post(url, Some(&body)).await
    }

    async fn get_compression_progress(&self, id: u64) -> Result<ApiResponse, AppError> {
        let id = id.to_string();
        let url = self.http_client.url(COMPRESSION_PROGRESS_PATH, &[id.as_str()])?;
        self.http_client.get(url).await
    }
}

#[async_trait]
impl FileService for Client {
    async fn get_file(&self, gid: &str) -> Result<ApiResponse, AppError> {
        require_non_empty(&[("gid", gid)])?;
        let mut url = self.http_client.url(FILE_PATH, &[])?;
        url.query_pairs_mut().append_pair("gid", gid);
        debug!("Requesting file for job {}", gid);
        self.http_client.get(url).await
    }
}
