//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::principal::{AuthContext, Principal};
use crate::domain::entities::token::{Claims, BEARER_PREFIX, TOKEN_ISSUER};
use crate::domain::value_objects::auth_decision::{AuthDecision, RejectReason};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and validating signed access tokens.
///
/// The signing key is fixed at construction and never mutated; every
/// operation is synchronous and free of I/O, so a single instance can be
/// shared across any number of threads without locking.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration carrying the signing secret
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed access token for a principal.
    ///
    /// Expiration is the issue time plus the fixed validity window.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact signed token
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(&self, principal: &Principal) -> DomainResult<String> {
        let claims = Claims::for_principal(principal);
        self.encode_jwt(&claims)
    }

    /// Validates a token string and reconstructs the identity it carries.
    ///
    /// Accepts the compact token with or without the `Bearer` prefix.
    /// Every failure surfaces as the same `DomainError::Unauthorized`,
    /// whether the signature, the expiry, or a claim was at fault; the
    /// distinguished reason is only logged.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthContext)` - The identity reconstructed from the claims
    /// * `Err(DomainError::Unauthorized)` - Validation failed
    pub fn validate(&self, token: &str) -> DomainResult<AuthContext> {
        self.decode_token(token).map_err(|err| {
            match err {
                TokenError::InvalidSignature => {
                    tracing::warn!(reason = %err, "token rejected");
                }
                _ => {
                    tracing::debug!(reason = %err, "token rejected");
                }
            }
            DomainError::Unauthorized
        })
    }

    /// Gates a request on its token string.
    ///
    /// The scheme prefix must match `Bearer` exactly (case-sensitive);
    /// blank input or a missing prefix is rejected as malformed without
    /// being parsed.
    pub fn authorize(&self, token: &str) -> AuthDecision {
        if token.trim().is_empty() || !token.starts_with(BEARER_PREFIX) {
            return AuthDecision::Rejected {
                reason: RejectReason::Malformed,
            };
        }

        match self.validate(token) {
            Ok(context) => AuthDecision::Authorized(context),
            Err(_) => AuthDecision::Rejected {
                reason: RejectReason::InvalidOrExpired,
            },
        }
    }

    /// Full validation pipeline with distinguished failures
    pub(crate) fn decode_token(&self, raw: &str) -> Result<AuthContext, TokenError> {
        if raw.trim().is_empty() {
            return Err(TokenError::Malformed);
        }

        let token = Self::strip_scheme(raw);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer
                    | jsonwebtoken::errors::ErrorKind::Json(_)
                    | jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(_) => {
                        TokenError::InvalidClaims
                    }
                    _ => TokenError::Malformed,
                }
            })?;

        AuthContext::from_claims(&token_data.claims)
    }

    /// Strips the scheme prefix and surrounding whitespace
    fn strip_scheme(raw: &str) -> &str {
        raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim()
    }

    /// Encodes claims into a signed compact token
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }
}
