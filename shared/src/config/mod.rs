//! Configuration module
//!
//! - `auth` - Token signing and authentication configuration

pub mod auth;

// Re-export commonly used types
pub use auth::{generate_secret, JwtConfig};
