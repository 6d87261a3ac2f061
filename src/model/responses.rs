/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded JSON reply of any endpoint
///
/// The server does not publish a schema, so the body is kept as a generic
/// JSON value. Key order is preserved when it is printed again.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct ApiResponse {
    /// Raw JSON body (`null` when the server sent nothing)
    pub body: Value,
}

impl ApiResponse {
    /// Wraps an already decoded value
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Decodes a response body; blank text becomes `null`
    pub fn from_text(text: &str) -> Result<Self, AppError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(Self {
            body: serde_json::from_str(text)?,
        })
    }

    /// Pretty-printed JSON, as written to the log
    pub fn pretty(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&self.body)?)
    }

    /// Borrow the JSON value
    pub fn as_value(&self) -> &Value {
        &self.body
    }

    /// Take the JSON value
    pub fn into_inner(self) -> Value {
        self.body
    }

    /// Field lookup on an object body
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// True when the server sent an empty body or a JSON `null`
    pub fn is_null(&self) -> bool {
        self.body.is_null()
    }
}

impl From<Value> for ApiResponse {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}
