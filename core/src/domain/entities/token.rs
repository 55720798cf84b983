//! Token claims for signed access tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::principal::{Principal, Role};
use crate::errors::TokenError;

/// Access token validity window in milliseconds (10 days)
pub const TOKEN_VALIDITY_MS: i64 = 864_000_000;

/// Token issuer
pub const TOKEN_ISSUER: &str = "VTI";

/// Scheme prefix expected on incoming token strings
pub const BEARER_PREFIX: &str = "Bearer";

/// Claims structure for the signed token payload.
///
/// Field names follow the wire schema consumed by existing clients,
/// including the `user-Agent` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Token id, set to the principal's account id
    pub jti: String,

    /// Subject (the principal's phone number)
    pub sub: String,

    /// Issued-at timestamp (epoch seconds)
    pub iat: i64,

    /// Issuer
    pub iss: String,

    /// Expiration timestamp (epoch seconds)
    pub exp: i64,

    /// Role claim, carried as its wire name
    pub authorities: String,

    /// Originating client context
    #[serde(rename = "user-Agent")]
    pub user_agent: String,
}

impl Claims {
    /// Creates the claims for a freshly issued token.
    ///
    /// Expiration is issued-at plus the fixed validity window.
    pub fn for_principal(principal: &Principal) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::milliseconds(TOKEN_VALIDITY_MS);

        Self {
            jti: principal.account_id.to_string(),
            sub: principal.phone.clone(),
            iat: now.timestamp(),
            iss: TOKEN_ISSUER.to_string(),
            exp: expiry.timestamp(),
            authorities: principal.role.as_str().to_string(),
            user_agent: principal.user_agent.clone(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are currently valid
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }

    /// Parses the role claim against the closed role set
    pub fn role(&self) -> Result<Role, TokenError> {
        self.authorities.parse()
    }

    /// Numeric parse of the token id.
    ///
    /// Issued tokens always carry the account id here; `None` means the
    /// token was minted with a non-numeric id.
    pub fn account_id(&self) -> Option<i64> {
        self.jti.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_principal() -> Principal {
        Principal::new(42, "0900000000", Role::Admin, "test-agent")
    }

    #[test]
    fn test_claims_for_principal() {
        let claims = Claims::for_principal(&sample_principal());

        assert_eq!(claims.jti, "42");
        assert_eq!(claims.sub, "0900000000");
        assert_eq!(claims.iss, TOKEN_ISSUER);
        assert_eq!(claims.authorities, "ADMIN");
        assert_eq!(claims.user_agent, "test-agent");
        assert!(claims.is_valid());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_validity_window_is_ten_days() {
        let claims = Claims::for_principal(&sample_principal());
        assert_eq!(claims.exp - claims.iat, TOKEN_VALIDITY_MS / 1000);
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::for_principal(&sample_principal());
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_role_claim_parsing() {
        let claims = Claims::for_principal(&sample_principal());
        assert_eq!(claims.role().unwrap(), Role::Admin);

        let mut tampered = claims;
        tampered.authorities = "ROOT".to_string();
        assert_eq!(
            tampered.role(),
            Err(TokenError::UnknownRole {
                role: "ROOT".to_string()
            })
        );
    }

    #[test]
    fn test_account_id_parsing() {
        let claims = Claims::for_principal(&sample_principal());
        assert_eq!(claims.account_id(), Some(42));

        let mut tampered = claims;
        tampered.jti = "not-a-number".to_string();
        assert_eq!(tampered.account_id(), None);
    }

    #[test]
    fn test_wire_schema_field_names() {
        let claims = Claims::for_principal(&sample_principal());
        let json = serde_json::to_value(&claims).unwrap();

        for key in ["jti", "sub", "iat", "iss", "exp", "authorities", "user-Agent"] {
            assert!(json.get(key).is_some(), "missing claim key {key}");
        }
        assert!(json.get("user_agent").is_none());
        assert_eq!(json["iss"], "VTI");
        assert_eq!(json["authorities"], "ADMIN");
    }

    #[test]
    fn test_claims_serialization_roundtrip() {
        let claims = Claims::for_principal(&sample_principal());

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
