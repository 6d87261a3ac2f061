/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Authorization level of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AuthLevel {
    /// Administrator (level 0)
    Admin,
    /// Regular user (level 1)
    #[default]
    Regular,
}

impl From<AuthLevel> for u8 {
    fn from(level: AuthLevel) -> Self {
        match level {
            AuthLevel::Admin => 0,
            AuthLevel::Regular => 1,
        }
    }
}

/// Body of the add-user endpoints
///
/// `auth` is left out for the self-signup endpoint, which always creates
/// regular users.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUserRequest {
    /// Login name
    pub user_name: String,
    /// Plain password, sent over the configured transport
    pub password: String,
    /// Contact email, validated before sending
    pub email: String,
    /// Authorization level as the server encodes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<u8>,
}

impl NewUserRequest {
    /// Self-signup request for a regular user
    pub fn regular(user_name: &str, password: &str, email: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            auth: None,
        }
    }

    /// Administrative request carrying an explicit level
    pub fn with_level(user_name: &str, password: &str, email: &str, level: AuthLevel) -> Self {
        Self {
            auth: Some(level.into()),
            ..Self::regular(user_name, password, email)
        }
    }
}

/// Body of `PUT /api/user/{name}`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// New login name
    pub user_name: String,
    /// New password
    pub password: String,
    /// New email
    pub email: String,
    /// New authorization level
    pub auth_level: u8,
}

/// Body of `POST /api/download`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Link of the resource to fetch
    pub link: String,
}

/// Body of `POST /api/download/{id}`
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateRequest {
    /// Rating given to the download
    pub rate: u32,
}

/// Body of `POST /api/compress`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompressionRequest {
    /// Job identifiers of the files to compress
    pub gid: Vec<String>,
}
