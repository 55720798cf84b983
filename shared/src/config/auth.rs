//! Authentication and token signing configuration

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of a generated signing secret, sized for the HS512 key space
const GENERATED_SECRET_LEN: usize = 64;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,

    /// Issuer claim stamped into every token
    pub issuer: String,

    /// Token validity window in milliseconds
    pub validity_ms: i64,

    /// Algorithm for JWT signing (default: HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: generate_secret(),
            issuer: String::from("VTI"),
            validity_ms: 864_000_000, // 10 days
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Without `JWT_SECRET` set, a fresh secret is generated for this
    /// process: tokens issued before a restart become unverifiable.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| generate_secret());
        Self {
            secret,
            ..Default::default()
        }
    }
}

/// Generates a random alphanumeric signing secret
pub fn generate_secret() -> String {
    let mut rng = rand::thread_rng();
    (0..GENERATED_SECRET_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..62u8);
            match idx {
                0..10 => (b'0' + idx) as char,
                10..36 => (b'a' + idx - 10) as char,
                36..62 => (b'A' + idx - 36) as char,
                _ => unreachable!(),
            }
        })
        .collect()
}

fn default_algorithm() -> String {
    String::from("HS512")
}
