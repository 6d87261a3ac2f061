use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Download queue endpoints
#[async_trait]
pub trait DownloadService: Send + Sync {
    /// Starts processing the queue (`GET /api/download/start`)
    ///
    /// An empty `server_key` falls back to the configured default key.
    async fn start_download(&self, server_key: &str) -> Result<ApiResponse, AppError>;

    /// Kills running downloads (`GET /api/download/kill`)
    ///
    /// An empty `server_key` falls back to the configured default key.
    async fn kill_download(&self, server_key: &str) -> Result<ApiResponse, AppError>;

    /// Queues a link (`POST /api/download`)
    async fn add_download(&self, link: &str) -> Result<ApiResponse, AppError>;

    /// Removes a queued download (`DELETE /api/download/{id}`)
    async fn remove_download(&self, id: u64) -> Result<ApiResponse, AppError>;

    /// Rates a download (`POST /api/download/{id}`)
    async fn rate_download(&self, id: u64, rate: u32) -> Result<ApiResponse, AppError>;

    /// Lists downloads (`GET /api/downloads/{limit}`), `limit` must be non-zero
    async fn get_downloads(&self, limit: u32) -> Result<ApiResponse, AppError>;

    /// Gets one download (`GET /api/download/{id}`)
    async fn get_download(&self, id: u64) -> Result<ApiResponse, AppError>;
}
