use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// File transfer endpoint
#[async_trait]
pub trait FileService: Send + Sync {
    /// Requests the file produced by job `gid` (`GET /api/file?gid={gid}`)
    async fn get_file(&self, gid: &str) -> Result<ApiResponse, AppError>;
}
