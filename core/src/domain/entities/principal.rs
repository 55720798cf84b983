//! Principal entities carried inside signed access tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

/// Authorization role of an account.
///
/// The set is closed: a role claim outside it never falls back to a
/// default, it fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Back-office administrator
    Admin,
    /// Registered customer account
    User,
}

impl Role {
    /// Wire name of the role as carried in the `authorities` claim
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl FromStr for Role {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(TokenError::UnknownRole {
                role: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated subject a token is issued for.
///
/// All fields are required at issuance; contents are the caller's
/// responsibility and are not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Account identifier
    pub account_id: i64,

    /// Display subject (phone number used as the login name)
    pub phone: String,

    /// Authorization role
    pub role: Role,

    /// Originating client context (user agent string)
    pub user_agent: String,
}

impl Principal {
    /// Creates a new principal
    pub fn new(
        account_id: i64,
        phone: impl Into<String>,
        role: Role,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            account_id,
            phone: phone.into(),
            role,
            user_agent: user_agent.into(),
        }
    }
}

/// Identity reconstructed from a validated token.
///
/// Carries no account id: validation extracts only the subject, role,
/// and client context from the claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Display subject from the `sub` claim
    pub phone: String,

    /// Role parsed from the `authorities` claim
    pub role: Role,

    /// Client context from the `user-Agent` claim
    pub user_agent: String,
}

impl AuthContext {
    /// Builds an authentication context from verified claims.
    ///
    /// Fails with `UnknownRole` if the role claim is outside the closed
    /// role set.
    pub fn from_claims(claims: &Claims) -> Result<Self, TokenError> {
        let role = claims.role()?;
        Ok(Self {
            phone: claims.sub.clone(),
            role,
            user_agent: claims.user_agent.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn test_role_parsing_is_case_sensitive() {
        let result = "admin".parse::<Role>();
        assert_eq!(
            result,
            Err(TokenError::UnknownRole {
                role: "admin".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = "SUPERVISOR".parse::<Role>();
        assert_eq!(
            result,
            Err(TokenError::UnknownRole {
                role: "SUPERVISOR".to_string()
            })
        );
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");

        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, "\"USER\"");
    }

    #[test]
    fn test_role_wire_name() {
        assert_eq!(Role::Admin.as_str(), "ADMIN");
        assert_eq!(Role::User.to_string(), "USER");
    }

    #[test]
    fn test_principal_creation() {
        let principal = Principal::new(42, "0900000000", Role::Admin, "test-agent");

        assert_eq!(principal.account_id, 42);
        assert_eq!(principal.phone, "0900000000");
        assert_eq!(principal.role, Role::Admin);
        assert_eq!(principal.user_agent, "test-agent");
    }

    #[test]
    fn test_auth_context_from_claims() {
        let principal = Principal::new(7, "0911222333", Role::User, "android-app");
        let claims = Claims::for_principal(&principal);

        let context = AuthContext::from_claims(&claims).unwrap();
        assert_eq!(context.phone, "0911222333");
        assert_eq!(context.role, Role::User);
        assert_eq!(context.user_agent, "android-app");
    }

    #[test]
    fn test_auth_context_rejects_unknown_role() {
        let principal = Principal::new(7, "0911222333", Role::User, "android-app");
        let mut claims = Claims::for_principal(&principal);
        claims.authorities = "MANAGER".to_string();

        let result = AuthContext::from_claims(&claims);
        assert_eq!(
            result,
            Err(TokenError::UnknownRole {
                role: "MANAGER".to_string()
            })
        );
    }
}
