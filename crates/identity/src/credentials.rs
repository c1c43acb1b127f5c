//! Token signing credentials.

use cryptogate_core::JwtConfig;
use jsonwebtoken::{DecodingKey, EncodingKey};
use std::fmt;
use zeroize::Zeroizing;

use crate::error::{IdentityError, IdentityResult};

/// HS256 keys shorter than this are accepted but logged as weak.
pub const RECOMMENDED_SECRET_LEN: usize = 32;

/// Longest accepted token lifetime: 100 years of minutes.
pub const MAX_LIFETIME_MINUTES: i64 = 100 * 366 * 24 * 60;

/// Issuer, audience, secret and lifetime shared by the issuer and validator.
///
/// Immutable once built; the secret is zeroized on drop.
pub struct SigningCredentials {
    issuer: String,
    audience: String,
    secret: Zeroizing<Vec<u8>>,
    lifetime_minutes: i64,
}

impl SigningCredentials {
    /// Validates and builds credentials.
    ///
    /// The secret is used as its UTF-8 bytes. A blank secret, blank issuer or
    /// audience, or a lifetime outside `1..=MAX_LIFETIME_MINUTES` is a
    /// configuration error.
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        secret: &str,
        lifetime_minutes: i64,
    ) -> IdentityResult<Self> {
        let issuer = issuer.into();
        let audience = audience.into();

        if secret.trim().is_empty() {
            return Err(IdentityError::config("JWT signing key is missing or empty"));
        }
        if issuer.trim().is_empty() {
            return Err(IdentityError::config("JWT issuer is missing or empty"));
        }
        if audience.trim().is_empty() {
            return Err(IdentityError::config("JWT audience is missing or empty"));
        }
        if lifetime_minutes <= 0 {
            return Err(IdentityError::config(format!(
                "JWT token lifetime must be a positive number of minutes, got {}",
                lifetime_minutes
            )));
        }
        if lifetime_minutes > MAX_LIFETIME_MINUTES {
            return Err(IdentityError::config(format!(
                "JWT token lifetime must be at most {} minutes, got {}",
                MAX_LIFETIME_MINUTES, lifetime_minutes
            )));
        }

        if secret.len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                secret_len = secret.len(),
                recommended = RECOMMENDED_SECRET_LEN,
                "JWT signing key is shorter than recommended for HS256"
            );
        }

        Ok(Self {
            issuer,
            audience,
            secret: Zeroizing::new(secret.as_bytes().to_vec()),
            lifetime_minutes,
        })
    }

    /// Builds credentials from the `[jwt]` configuration section.
    pub fn from_config(config: &JwtConfig) -> IdentityResult<Self> {
        let secret = config
            .signing_key
            .as_deref()
            .ok_or_else(|| IdentityError::config("JWT signing key is missing or empty"))?;
        let issuer = config
            .issuer
            .as_deref()
            .ok_or_else(|| IdentityError::config("JWT issuer is missing"))?;
        let audience = config
            .audience
            .as_deref()
            .ok_or_else(|| IdentityError::config("JWT audience is missing"))?;
        let lifetime = config.token_lifetime_minutes.ok_or_else(|| {
            IdentityError::config("JWT token lifetime minutes must be a valid integer")
        })?;

        Self::new(issuer, audience, secret, lifetime)
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn lifetime_minutes(&self) -> i64 {
        self.lifetime_minutes
    }

    pub fn lifetime_secs(&self) -> i64 {
        self.lifetime_minutes * 60
    }

    pub(crate) fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.secret)
    }

    pub(crate) fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.secret)
    }
}

impl fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("secret", &"<redacted>")
            .field("lifetime_minutes", &self.lifetime_minutes)
            .finish()
    }
}
