//! Configuration for the token service

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use ct_shared::config::auth::{generate_secret, JwtConfig};

use crate::errors::{DomainError, DomainResult};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secret(),
            algorithm: Algorithm::HS512,
        }
    }
}

impl TokenServiceConfig {
    /// Builds the service configuration from injected deployment config.
    ///
    /// Only HMAC algorithms are accepted; verification shares the issuing
    /// secret.
    pub fn from_jwt_config(config: &JwtConfig) -> DomainResult<Self> {
        let algorithm =
            Algorithm::from_str(&config.algorithm).map_err(|_| DomainError::Internal {
                message: format!("Unsupported signing algorithm: {}", config.algorithm),
            })?;

        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::Internal {
                message: format!("Signing algorithm is not symmetric: {}", config.algorithm),
            });
        }

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
        })
    }
}
