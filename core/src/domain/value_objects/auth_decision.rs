//! Authorization decision returned by the request gate.

use crate::domain::entities::principal::AuthContext;

/// Why a token string was rejected at the gate.
///
/// Every validation failure collapses to `InvalidOrExpired`; callers are
/// not told whether the signature, the expiry, or a claim was at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Blank input or missing scheme prefix
    Malformed,
    /// Signature, expiration, or claim validation failed
    InvalidOrExpired,
}

impl RejectReason {
    /// Machine-readable reason string
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::Malformed => "malformed",
            RejectReason::InvalidOrExpired => "invalid-or-expired",
        }
    }

    /// Message the boundary layer puts into its 401 body
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::Malformed => "Token is not valid",
            RejectReason::InvalidOrExpired => "Token does not exist or has expired",
        }
    }
}

/// Outcome of gating a request on its token string.
///
/// Pure value; emitting the transport-level response is the boundary's
/// job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// Token verified; carries the reconstructed identity
    Authorized(AuthContext),
    /// Token rejected
    Rejected { reason: RejectReason },
}

impl AuthDecision {
    /// Whether the decision admits the request
    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthDecision::Authorized(_))
    }
}
