/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::{TOKEN_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::model::retry::RetryConfig;
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Body attached to a request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body
    Empty,
    /// `application/json` body
    Json(Value),
    /// `application/x-www-form-urlencoded` body
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Serializes any body type into a JSON request body
    pub fn json<B: Serialize>(body: &B) -> Result<Self, AppError> {
        serde_json::to_value(body)
            .map(RequestBody::Json)
            .map_err(|e| AppError::SerializationError(e.to_string()))
    }
}

/// Transport shared by all endpoint methods
///
/// Owns the configured `reqwest` client (timeout, user agent), the validated
/// base URL and the session manager. Each call reads the current token,
/// attaches it and runs the retry loop in [`make_http_request`].
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    base_url: Url,
    config: Arc<Config>,
}

impl HttpClient {
    /// Validates the configuration and builds the transport
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Unauthenticated transport
    /// * `Err(AppError::Config)` - Empty/invalid base URL or zero timeout
    pub fn new(config: Config) -> Result<Self, AppError> {
        let base_url = config.validate()?;
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(
            config.clone(),
            base_url.clone(),
            http_client.clone(),
        ));

        debug!(
            "HTTP client ready for {} (timeout {} ms, {} retries)",
            base_url,
            config.rest_api.timeout_ms,
            config.retry.max_retries()
        );

        Ok(Self {
            auth,
            http_client,
            base_url,
            config,
        })
    }

    /// Builds the absolute URL of an endpoint
    pub fn url(&self, path: &str, segments: &[&str]) -> Result<Url, AppError> {
        endpoint_url(&self.base_url, path, segments)
    }

    /// Makes a GET request
    pub async fn get(&self, url: Url) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, url, RequestBody::Empty, &[]).await
    }

    /// Makes a POST request with an optional JSON body
    pub async fn post<B: Serialize>(
        &self,
        url: Url,
        body: Option<&B>,
    ) -> Result<ApiResponse, AppError> {
        let body = match body {
            Some(b) => RequestBody::json(b)?,
            None => RequestBody::Empty,
        };
        self.request(Method::POST, url, body, &[]).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize>(&self, url: Url, body: &B) -> Result<ApiResponse, AppError> {
        self.request(Method::PUT, url, RequestBody::json(body)?, &[])
            .await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, url: Url) -> Result<ApiResponse, AppError> {
        self.request(Method::DELETE, url, RequestBody::Empty, &[])
            .await
    }

    /// Makes a request, attaching the session token when one exists
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `url` - Absolute endpoint URL
    /// * `body` - Request body
    /// * `extra_headers` - Headers added after the token (e.g. server key)
    ///
    /// # Returns
    /// The decoded response, also logged pretty-printed at `info` level
    pub async fn request(
        &self,
        method: Method,
        url: Url,
        body: RequestBody,
        extra_headers: &[(&str, &str)],
    ) -> Result<ApiResponse, AppError> {
        let token = self.auth.token().await;

        let mut headers = vec![("Accept", "application/json")];
        match token.as_deref() {
            Some(token) => headers.push((TOKEN_HEADER, token)),
            None => debug!("No active session, sending {} {} without token", method, url),
        }
        headers.extend_from_slice(extra_headers);

        let response = make_http_request(
            &self.http_client,
            method,
            url,
            headers,
            &body,
            &self.config.retry,
        )
        .await?;

        let response = parse_response(response).await?;
        info!("{}", response.pretty()?);
        Ok(response)
    }

    /// Logs in through the session manager
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        self.auth.login(username, password).await
    }

    /// Gets the current session
    pub async fn get_session(&self) -> Option<Session> {
        self.auth.get_session().await
    }

    /// Logs out
    pub async fn logout(&self) {
        self.auth.logout().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration the transport was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the validated base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Base URL + fixed path + percent-encoded extra segments
///
/// A trailing `/` on the base URL is ignored; any path already present on
/// the base URL is kept as a prefix.
pub fn endpoint_url(base: &Url, path: &str, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = base.clone();
    {
        let mut parts = url
            .path_segments_mut()
            .map_err(|_| AppError::Config(format!("base URL cannot carry a path: {base}")))?;
        parts.pop_if_empty();
        parts.extend(path.split('/').filter(|p| !p.is_empty()));
        parts.extend(segments);
    }
    Ok(url)
}

/// Sends a request, retrying transient failures with constant backoff
///
/// Timeouts, connection failures and the statuses listed in
/// [`crate::constants::RETRYABLE_STATUS_CODES`] are retried up to
/// `retry_config.max_retries()` times. Any other failure returns at once.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, PUT, DELETE, etc.)
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Request body
/// * `retry_config` - Retry count and backoff
///
/// # Returns
///
/// * `Ok(Response)` - Successful (2xx) HTTP response
/// * `Err(AppError)` - Last failure once retries are exhausted
///
/// # Example
///
/// ```ignore
/// use bassa_client::model::http::{make_http_request, RequestBody};
/// use bassa_client::model::retry::RetryConfig;
/// use reqwest::{Client, Method, Url};
///
/// let client = Client::new();
/// let url = Url::parse("http://localhost:5000/api/user")?;
/// let response = make_http_request(
///     &client,
///     Method::GET,
///     url,
///     vec![("token", "abc")],
///     &RequestBody::Empty,
///     &RetryConfig::with_max_retries(3),
/// ).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: Url,
    headers: Vec<(&str, &str)>,
    body: &RequestBody,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count = 0;
    let max_retries = retry_config.max_retries();

    loop {
        debug!("{} {}", method, url);

        let mut request = client.request(method.clone(), url.clone());
        for (name, value) in &headers {
            request = request.header(*name, *value);
        }
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(value),
            RequestBody::Form(fields) => request.form(fields),
        };

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                debug!("Response status: {}", status);

                if status.is_success() {
                    return Ok(response);
                }

                if RetryConfig::should_retry_status(status) && retry_count < max_retries {
                    retry_count += 1;
                    let delay = retry_config.delay();
                    warn!(
                        "{} {} returned {} (retry {}/{}), waiting {:?}",
                        method, url, status, retry_count, max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }

                let body_text = response.text().await.unwrap_or_default();
                error!("Request failed with status {}: {}", status, body_text);
                return Err(AppError::from_status(status));
            }
            Err(e) => {
                if RetryConfig::should_retry_error(&e) && retry_count < max_retries {
                    retry_count += 1;
                    let delay = retry_config.delay();
                    warn!(
                        "{} {} failed: {} (retry {}/{}), waiting {:?}",
                        method, url, e, retry_count, max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                error!("{} {} failed: {}", method, url, e);
                return Err(AppError::Network(e));
            }
        }
    }
}

/// Reads and decodes a response body
pub async fn parse_response(response: Response) -> Result<ApiResponse, AppError> {
    let text = response.text().await?;
    ApiResponse::from_text(&text)
}
