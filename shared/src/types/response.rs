//! Response structures returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body sent to clients when a request is rejected.
///
/// The token core never writes this to a transport; the HTTP boundary
/// builds one from the reason string the core supplies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,

    /// HTTP status code mirrored into the body
    pub code: u16,

    /// Path of the rejected request
    pub path: String,

    /// Timestamp of when the rejection occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>, code: u16, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            path: path.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a 401 response body
    pub fn unauthorized(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(message, 401, path)
    }
}
