//! Error types for credential issuance and validation.
//!
//! Every variant belongs to one [`ErrorClass`], which is what the HTTP layer
//! uses to pick a status code. The display strings are for server-side logs;
//! callers only ever see a generic message per class.

use thiserror::Error;

/// Coarse classification of an [`IdentityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Startup-time problem with signing credentials.
    Configuration,
    /// The bearer token is missing or not acceptable.
    Authentication,
    /// The token is acceptable but does not carry the required role.
    Authorization,
    /// Token minting failed.
    Internal,
}

/// Errors that can occur in credential operations.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Signing credentials are missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// No bearer token was presented
    #[error("Missing bearer token")]
    MissingToken,

    /// Token cannot be decoded
    #[error("Invalid token format: {0}")]
    InvalidTokenFormat(String),

    /// Token signature does not verify under the configured secret
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token was signed with an algorithm other than HS256
    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Issuer claim does not match
    #[error("Invalid issuer: {0}")]
    InvalidIssuer(String),

    /// Audience claim does not match
    #[error("Invalid audience: {0}")]
    InvalidAudience(String),

    /// Required claim is missing
    #[error("Missing claim: {0}")]
    MissingClaim(String),

    /// Token has expired
    #[error("Token expired")]
    TokenExpired,

    /// Token not yet valid (nbf claim in future)
    #[error("Token not yet valid")]
    TokenNotYetValid,

    /// Caller lacks the role the operation requires
    #[error("Role '{actual}' is not permitted; '{required}' required")]
    InsufficientRole { required: String, actual: String },

    /// Identity provider refused or failed to assert an identity
    #[error("Identity assertion failed: {0}")]
    IdentityAssertion(String),

    /// Token could not be encoded
    #[error("Token encoding failed: {0}")]
    TokenEncoding(String),
}

impl IdentityError {
    pub fn class(&self) -> ErrorClass {
        match self {
            IdentityError::Config(_) => ErrorClass::Configuration,
            IdentityError::InsufficientRole { .. } => ErrorClass::Authorization,
            IdentityError::IdentityAssertion(_) | IdentityError::TokenEncoding(_) => {
                ErrorClass::Internal
            }
            IdentityError::MissingToken
            | IdentityError::InvalidTokenFormat(_)
            | IdentityError::InvalidSignature
            | IdentityError::UnsupportedAlgorithm(_)
            | IdentityError::InvalidIssuer(_)
            | IdentityError::InvalidAudience(_)
            | IdentityError::MissingClaim(_)
            | IdentityError::TokenExpired
            | IdentityError::TokenNotYetValid => ErrorClass::Authentication,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        IdentityError::Config(msg.into())
    }
}

impl From<jsonwebtoken::errors::Error> for IdentityError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => IdentityError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                IdentityError::UnsupportedAlgorithm("only HS256 is accepted".into())
            }
            ErrorKind::MissingRequiredClaim(claim) => IdentityError::MissingClaim(claim.clone()),
            ErrorKind::ExpiredSignature => IdentityError::TokenExpired,
            ErrorKind::ImmatureSignature => IdentityError::TokenNotYetValid,
            ErrorKind::InvalidIssuer => IdentityError::InvalidIssuer("issuer mismatch".into()),
            ErrorKind::InvalidAudience => {
                IdentityError::InvalidAudience("audience mismatch".into())
            }
            _ => IdentityError::InvalidTokenFormat(err.to_string()),
        }
    }
}

/// Result type for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;
