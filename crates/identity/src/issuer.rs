//! Credential issuer: mints short-lived HS256 bearer tokens.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;
use uuid::Uuid;

use crate::credentials::SigningCredentials;
use crate::error::{IdentityError, IdentityResult};
use crate::identity::{FixedIdentityProvider, IdentityProvider};
use crate::token::{IssuedToken, TokenClaims};

pub struct CredentialIssuer {
    credentials: Arc<SigningCredentials>,
    provider: Arc<dyn IdentityProvider>,
    encoding_key: EncodingKey,
}

impl CredentialIssuer {
    /// Issuer asserting the fixed demo identity.
    pub fn new(credentials: Arc<SigningCredentials>) -> Self {
        Self::with_provider(credentials, Arc::new(FixedIdentityProvider::default()))
    }

    pub fn with_provider(
        credentials: Arc<SigningCredentials>,
        provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        let encoding_key = credentials.encoding_key();
        Self {
            credentials,
            provider,
            encoding_key,
        }
    }

    /// Issues a token valid from now for the configured lifetime.
    pub fn issue_token(&self) -> IdentityResult<IssuedToken> {
        self.issue_token_at(Utc::now().timestamp())
    }

    /// Issues a token as if the current time were `now` (seconds since epoch).
    pub fn issue_token_at(&self, now: i64) -> IdentityResult<IssuedToken> {
        let identity = self.provider.assert_identity()?;
        let exp = now
            .checked_add(self.credentials.lifetime_secs())
            .ok_or_else(|| IdentityError::TokenEncoding("token expiry out of range".into()))?;

        let claims = TokenClaims {
            sub: identity.subject,
            role: identity.role,
            iss: self.credentials.issuer().to_string(),
            aud: self.credentials.audience().to_string(),
            exp,
            nbf: now,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| IdentityError::TokenEncoding(e.to_string()))?;

        tracing::debug!(
            sub = %claims.sub,
            role = %claims.role,
            exp = claims.exp,
            "Issued bearer token"
        );

        Ok(IssuedToken::new(token, claims))
    }
}
