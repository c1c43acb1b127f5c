//! Bearer token claims.
//!
//! Tokens are compact HS256 JWTs:
//!
//! ```json
//! {
//!   "sub": "demo-user",
//!   "role": "crypto-user",
//!   "iss": "crypto-gateway",
//!   "aud": "crypto-gateway-clients",
//!   "exp": 1700000900,
//!   "nbf": 1700000000,
//!   "iat": 1700000000,
//!   "jti": "6f1c2b1e-..."
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Claims carried by every token the service issues.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject identity.
    pub sub: String,
    /// Role the subject acts in.
    pub role: String,
    /// Issuer.
    pub iss: String,
    /// Audience.
    pub aud: String,
    /// Expiration time (seconds since epoch).
    pub exp: i64,
    /// Not before (seconds since epoch).
    pub nbf: i64,
    /// Issued at (seconds since epoch).
    pub iat: i64,
    /// Unique token identifier.
    pub jti: String,
}

/// A freshly minted bearer token and the claims inside it.
#[derive(Clone)]
pub struct IssuedToken {
    token: String,
    claims: TokenClaims,
}

impl IssuedToken {
    pub(crate) fn new(token: String, claims: TokenClaims) -> Self {
        Self { token, claims }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &TokenClaims {
        &self.claims
    }

    pub fn expires_at(&self) -> i64 {
        self.claims.exp
    }

    pub fn into_string(self) -> String {
        self.token
    }
}

// Bearer strings are credentials and stay out of Debug output.
impl fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedToken")
            .field("token", &"<redacted>")
            .field("claims", &self.claims)
            .finish()
    }
}
