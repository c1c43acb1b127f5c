use cryptogate_core::{Config, DEFAULT_MAX_BODY_BYTES};
use cryptogate_crypto::{CryptoOperations, EcdsaCryptoService, KeyMaterial};
use cryptogate_identity::{CredentialIssuer, CredentialValidator, SigningCredentials};
use std::sync::Arc;
use tracing::info;

use crate::error::StartupError;

/// Shared, read-only service state.
///
/// Built once before the listener is bound; nothing in it is mutated while
/// requests are served.
pub struct AppState {
    pub crypto: Arc<dyn CryptoOperations>,
    pub issuer: CredentialIssuer,
    pub validator: CredentialValidator,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(crypto: Arc<dyn CryptoOperations>, credentials: Arc<SigningCredentials>) -> Self {
        Self {
            crypto,
            issuer: CredentialIssuer::new(credentials.clone()),
            validator: CredentialValidator::new(credentials),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Decodes credentials and key material from configuration.
    ///
    /// Any missing or malformed secret or key is an error; the caller must not
    /// start serving in that case.
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let credentials = SigningCredentials::from_config(&config.jwt)
            .map_err(StartupError::Credentials)?;

        let keys = KeyMaterial::from_base64(
            config.crypto_keys.private_key.as_deref(),
            config.crypto_keys.public_key.as_deref(),
        )?;

        info!(
            key_id = keys.key_id(),
            issuer = credentials.issuer(),
            audience = credentials.audience(),
            token_lifetime_minutes = credentials.lifetime_minutes(),
            "Loaded signing credentials and key material"
        );

        let crypto = EcdsaCryptoService::new(keys).into_shared();

        Ok(Self::new(crypto, Arc::new(credentials))
            .with_max_body_bytes(config.server.max_body_bytes))
    }
}
