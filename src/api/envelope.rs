//! JSON envelope shared by every API response

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";

pub const SUCCESS_MESSAGE: &str = "NPV calculations completed successfully";
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred while processing your request";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// `{ success, data?, error?, message?, timestamp }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
            timestamp: Utc::now(),
        }
    }

    pub fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.into(),
            }),
            message: None,
            timestamp: Utc::now(),
        }
    }
}
