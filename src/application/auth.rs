/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session handling for the Bassa API
//!
//! A client is either unauthenticated (no session) or authenticated with the
//! token returned by the last successful login. Logging in again replaces the
//! token; `logout` drops it locally.

use crate::application::config::Config;
use crate::constants::{LOGIN_PATH, TOKEN_HEADER};
use crate::error::AppError;
use crate::model::http::{RequestBody, endpoint_url, make_http_request};
use crate::model::utils::require_non_empty;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, Url};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Session established by a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque token sent back on every authenticated call
    pub token: String,
    /// User that logged in
    pub username: String,
    /// When the token was obtained
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session from a token
    #[must_use]
    pub fn new(token: &str, username: &str) -> Self {
        Self {
            token: token.to_string(),
            username: username.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Seconds since login
    #[must_use]
    pub fn age_secs(&self) -> i64 {
        (Utc::now() - self.created_at).num_seconds()
    }
}

/// Authentication manager for the Bassa API
///
/// The session lives behind a `RwLock` so one `Auth` can be shared by
/// concurrent callers.
pub struct Auth {
    config: Arc<Config>,
    base_url: Url,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates an unauthenticated `Auth`
    ///
    /// # Arguments
    /// * `config` - Client configuration (retry policy is reused for login)
    /// * `base_url` - Already validated base URL
    /// * `client` - Shared HTTP client
    pub fn new(config: Arc<Config>, base_url: Url, client: Client) -> Self {
        Self {
            config,
            base_url,
            client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Logs in and stores the returned token
    ///
    /// Credentials are posted form-encoded to `/api/login`; the token comes
    /// back in the `token` response header.
    ///
    /// # Returns
    /// * `Ok(Session)` - The new session, also stored for later calls
    /// * `Err(AppError)` - Empty credentials, transport failure or missing token header
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        require_non_empty(&[("username", username), ("password", password)])?;

        let url = endpoint_url(&self.base_url, LOGIN_PATH, &[])?;
        debug!("Sending login request to: {}", url);

        let body = RequestBody::Form(vec![
            ("user_name".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ]);
        let headers = vec![("Accept", "application/json")];

        let response = make_http_request(
            &self.client,
            Method::POST,
            url,
            headers,
            &body,
            &self.config.retry,
        )
        .await?;

        let token = match response
            .headers()
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
        {
            Some(token) if !token.is_empty() => token,
            _ => {
                error!("{} header not found in login response", TOKEN_HEADER);
                return Err(AppError::MissingHeader(TOKEN_HEADER.to_string()));
            }
        };

        let session = Session::new(&token, username);
        let mut sess = self.session.write().await;
        *sess = Some(session.clone());

        info!("✓ Login successful, user: {}", username);
        Ok(session)
    }

    /// Gets the current session, if any
    pub async fn get_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Gets the current token, if any
    pub async fn token(&self) -> Option<String> {
        self.session.read().await.as_ref().map(|s| s.token.clone())
    }

    /// True once a login has succeeded and no logout followed
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Installs a session obtained elsewhere (e.g. persisted by the caller)
    pub async fn set_session(&self, session: Session) {
        debug!("Installing session for user {}", session.username);
        let mut sess = self.session.write().await;
        *sess = Some(session);
    }

    /// Drops the stored session; no request is sent
    pub async fn logout(&self) {
        info!("Logging out");
        let mut session = self.session.write().await;
        *session = None;
        info!("✓ Logged out successfully");
    }
}
