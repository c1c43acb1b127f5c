//! Cryptographic key management
//!
//! The service holds exactly one ECDSA P-256 key pair for its lifetime. It is
//! supplied as base64-encoded DER (PKCS#8 private key, SubjectPublicKeyInfo
//! public key), decoded once at startup and never encoded back out.

use base64::{engine::general_purpose::STANDARD, Engine};
use p256::ecdsa::{SigningKey, VerifyingKey};
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};
use std::fmt;
use zeroize::Zeroizing;

use crate::error::{CryptoError, CryptoResult};

/// Decoded signing/verification key pair.
pub struct KeyMaterial {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
    key_id: String,
}

impl KeyMaterial {
    /// Decodes key material from the configured base64 blobs.
    ///
    /// Absent or blank values are reported as [`CryptoError::MissingKey`].
    pub fn from_base64(private_key: Option<&str>, public_key: Option<&str>) -> CryptoResult<Self> {
        let private_b64 = require(private_key, "private")?;
        let public_b64 = require(public_key, "public")?;

        let private_der = Zeroizing::new(STANDARD.decode(private_b64).map_err(|e| {
            CryptoError::KeyEncoding {
                which: "private",
                reason: e.to_string(),
            }
        })?);
        let public_der = STANDARD
            .decode(public_b64)
            .map_err(|e| CryptoError::KeyEncoding {
                which: "public",
                reason: e.to_string(),
            })?;

        Self::from_der(&private_der, &public_der)
    }

    /// Decodes a PKCS#8 private key and an SPKI public key.
    ///
    /// Both must be P-256 and the public key must be derived from the private
    /// key.
    pub fn from_der(private_der: &[u8], public_der: &[u8]) -> CryptoResult<Self> {
        let signing_key =
            SigningKey::from_pkcs8_der(private_der).map_err(|e| CryptoError::KeyDecode {
                which: "private",
                reason: e.to_string(),
            })?;
        let verifying_key =
            VerifyingKey::from_public_key_der(public_der).map_err(|e| CryptoError::KeyDecode {
                which: "public",
                reason: e.to_string(),
            })?;

        if signing_key.verifying_key() != &verifying_key {
            return Err(CryptoError::KeyMismatch);
        }

        let key_id = generate_key_id(&verifying_key);
        tracing::debug!(key_id = %key_id, "Decoded P-256 key pair");

        Ok(Self {
            signing_key,
            verifying_key,
            key_id,
        })
    }

    /// Stable short identifier of the public key, safe to log.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("algorithm", &"ECDSA P-256")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

fn require<'a>(value: Option<&'a str>, which: &'static str) -> CryptoResult<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(CryptoError::MissingKey { which })
}

/// First 16 bytes of the BLAKE3 hash of the uncompressed SEC1 point, hex.
fn generate_key_id(verifying_key: &VerifyingKey) -> String {
    let point = verifying_key.to_encoded_point(false);
    let hash = blake3::hash(point.as_bytes());
    hex::encode(&hash.as_bytes()[..16])
}
