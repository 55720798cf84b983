//! Token-specific error types
//!
//! Distinguished failure kinds for token validation and generation. These
//! are logged for diagnostics; the validation boundary collapses them into
//! a single opaque rejection before they reach callers.

use thiserror::Error;

/// Token validation and generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Unknown role: {role}")]
    UnknownRole { role: String },

    #[error("Token generation failed")]
    GenerationFailed,
}
