//! Credential validator: the gate in front of sign and verify.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. structure, algorithm (HS256 only) and signature
//! 2. issuer
//! 3. audience
//! 4. validity window, with no clock skew: a token is expired once
//!    `now >= exp`
//! 5. role
//!
//! There is no revocation list. A token stays valid until it expires.

use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::collections::HashSet;
use std::sync::Arc;

use crate::credentials::SigningCredentials;
use crate::error::{IdentityError, IdentityResult};
use crate::identity::REQUIRED_ROLE;
use crate::token::TokenClaims;

const REQUIRED_SPEC_CLAIMS: &[&str] = &["exp", "nbf", "iss", "aud", "sub"];

pub struct CredentialValidator {
    credentials: Arc<SigningCredentials>,
    decoding_key: DecodingKey,
    validation: Validation,
    required_role: String,
}

impl CredentialValidator {
    pub fn new(credentials: Arc<SigningCredentials>) -> Self {
        let decoding_key = credentials.decoding_key();

        // Signature and algorithm are left to jsonwebtoken; the time, issuer
        // and audience checks are done below so their order and the exact
        // expiry boundary are under our control.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = REQUIRED_SPEC_CLAIMS
            .iter()
            .map(|claim| claim.to_string())
            .collect::<HashSet<String>>();

        Self {
            credentials,
            decoding_key,
            validation,
            required_role: REQUIRED_ROLE.to_string(),
        }
    }

    pub fn with_required_role(mut self, role: impl Into<String>) -> Self {
        self.required_role = role.into();
        self
    }

    pub fn required_role(&self) -> &str {
        &self.required_role
    }

    /// Validates `token` against the current time.
    pub fn validate(&self, token: &str) -> IdentityResult<TokenClaims> {
        self.validate_at(token, Utc::now().timestamp())
    }

    /// Validates `token` as if the current time were `now` (seconds since
    /// epoch).
    pub fn validate_at(&self, token: &str, now: i64) -> IdentityResult<TokenClaims> {
        if token.trim().is_empty() {
            return Err(IdentityError::MissingToken);
        }

        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        if claims.iss != self.credentials.issuer() {
            return Err(IdentityError::InvalidIssuer(claims.iss));
        }

        if claims.aud != self.credentials.audience() {
            return Err(IdentityError::InvalidAudience(claims.aud));
        }

        if claims.nbf > now {
            return Err(IdentityError::TokenNotYetValid);
        }

        if now >= claims.exp {
            return Err(IdentityError::TokenExpired);
        }

        if claims.role != self.required_role {
            return Err(IdentityError::InsufficientRole {
                required: self.required_role.clone(),
                actual: claims.role,
            });
        }

        Ok(claims)
    }
}
