//! Hash, sign and verify behind one capability interface.
//!
//! # Signature format
//!
//! ECDSA over P-256 with SHA-256 as the message digest. Signatures are the
//! fixed-length `r || s` encoding (64 bytes, IEEE P1363). Nonces are derived
//! per RFC 6979, so signing the same input twice yields the same bytes.
//!
//! # Verification contract
//!
//! [`CryptoOperations::verify`] answers only true or false for anything that
//! has the shape of a signature. A 64-byte value whose scalars are out of
//! range is a failed verification, not an error; only a value of the wrong
//! length is reported as [`CryptoError::MalformedSignature`].

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::Signature;
use std::sync::Arc;

use crate::error::{CryptoError, CryptoResult};
use crate::hashing::sha256_digest;
use crate::keys::KeyMaterial;

/// Length of an encoded signature.
pub const SIGNATURE_LEN: usize = 64;

/// The three operations the gateway exposes.
///
/// Implementations are shared across request tasks and must not carry
/// per-call mutable state.
pub trait CryptoOperations: Send + Sync {
    /// Digest of `input`; empty for empty input.
    fn hash(&self, input: &str) -> Vec<u8>;

    /// Signature over the UTF-8 bytes of `input`.
    fn sign(&self, input: &str) -> CryptoResult<Vec<u8>>;

    /// Checks `signature` against the UTF-8 bytes of `input`.
    fn verify(&self, input: &str, signature: &[u8]) -> CryptoResult<bool>;

    /// Identifier of the key in use, for logs.
    fn key_id(&self) -> &str;
}

/// ECDSA P-256 / SHA-256 implementation of [`CryptoOperations`].
#[derive(Debug)]
pub struct EcdsaCryptoService {
    keys: KeyMaterial,
}

impl EcdsaCryptoService {
    pub fn new(keys: KeyMaterial) -> Self {
        Self { keys }
    }

    /// Convenience for wiring into shared service state.
    pub fn into_shared(self) -> Arc<dyn CryptoOperations> {
        Arc::new(self)
    }
}

impl CryptoOperations for EcdsaCryptoService {
    fn hash(&self, input: &str) -> Vec<u8> {
        sha256_digest(input)
    }

    fn sign(&self, input: &str) -> CryptoResult<Vec<u8>> {
        let signature = Signer::<Signature>::try_sign(self.keys.signing_key(), input.as_bytes())
            .map_err(|e| CryptoError::Signing {
                reason: e.to_string(),
            })?;

        Ok(signature.to_bytes().to_vec())
    }

    fn verify(&self, input: &str, signature: &[u8]) -> CryptoResult<bool> {
        if signature.len() != SIGNATURE_LEN {
            return Err(CryptoError::MalformedSignature {
                expected: SIGNATURE_LEN,
                actual: signature.len(),
            });
        }

        // Zero or out-of-range scalars cannot verify under any key.
        let signature = match Signature::from_slice(signature) {
            Ok(sig) => sig,
            Err(_) => return Ok(false),
        };

        Ok(self
            .keys
            .verifying_key()
            .verify(input.as_bytes(), &signature)
            .is_ok())
    }

    fn key_id(&self) -> &str {
        self.keys.key_id()
    }
}
