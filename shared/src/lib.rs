//! Shared utilities and common types for the cinema booking server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Client-facing response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{generate_secret, JwtConfig};
pub use types::ErrorResponse;
