use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Compression job endpoints
#[async_trait]
pub trait CompressionService: Send + Sync {
    /// Starts compressing the given jobs (`POST /api/compress`)
    async fn start_compression(&self, gids: &[String]) -> Result<ApiResponse, AppError>;

    /// Polls a compression job (`GET /api/compression-progress/{id}`)
    async fn get_compression_progress(&self, id: u64) -> Result<ApiResponse, AppError>;
}
