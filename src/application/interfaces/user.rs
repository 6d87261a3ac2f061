use crate::error::AppError;
use crate::model::requests::AuthLevel;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// User management endpoints
#[async_trait]
pub trait UserService: Send + Sync {
    /// Self-signup of a regular user (`POST /api/regularuser`)
    async fn add_regular_user(
        &self,
        user_name: &str,
        password: &str,
        email: &str,
    ) -> Result<ApiResponse, AppError>;

    /// Adds a user with an explicit authorization level (`POST /api/user`)
    async fn add_user(
        &self,
        user_name: &str,
        password: &str,
        email: &str,
        auth_level: AuthLevel,
    ) -> Result<ApiResponse, AppError>;

    /// Removes a user (`DELETE /api/user/{user_name}`)
    async fn remove_user(&self, user_name: &str) -> Result<ApiResponse, AppError>;

    /// Replaces name, password, level and email of `user_name`
    /// (`PUT /api/user/{user_name}`)
    async fn update_user(
        &self,
        user_name: &str,
        new_user_name: &str,
        password: &str,
        auth_level: AuthLevel,
        email: &str,
    ) -> Result<ApiResponse, AppError>;

    /// Lists users (`GET /api/user`)
    async fn get_users(&self) -> Result<ApiResponse, AppError>;

    /// Lists pending signups (`GET /api/user/requests`)
    async fn get_signup_requests(&self) -> Result<ApiResponse, AppError>;

    /// Approves a pending signup (`POST /api/user/approve/{user_name}`)
    async fn approve_user(&self, user_name: &str) -> Result<ApiResponse, AppError>;

    /// Lists blocked users (`GET /api/user/blocked`)
    async fn get_blocked_users(&self) -> Result<ApiResponse, AppError>;

    /// Blocks a user (`POST /api/user/blocked/{user_name}`)
    async fn block_user(&self, user_name: &str) -> Result<ApiResponse, AppError>;

    /// Unblocks a user (`DELETE /api/user/blocked/{user_name}`)
    async fn unblock_user(&self, user_name: &str) -> Result<ApiResponse, AppError>;

    /// Downloads of the logged-in user (`GET /api/user/downloads/{limit}`)
    ///
    /// `None` uses the configured default limit; `Some(0)` is rejected.
    async fn get_user_downloads(&self, limit: Option<u32>) -> Result<ApiResponse, AppError>;

    /// Users ranked by downloaded volume (`GET /api/user/heavy`)
    async fn get_heaviest_users(&self) -> Result<ApiResponse, AppError>;
}
