//! Error types for key loading and the sign/verify operations.

use thiserror::Error;

/// Errors raised by the crypto crate.
///
/// The key-loading variants only occur at startup; `Signing` and
/// `MalformedSignature` are request-time errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// A key was not provided
    #[error("Missing key material: {which}")]
    MissingKey { which: &'static str },

    /// Key blob was not valid base64
    #[error("Key '{which}' is not valid base64: {reason}")]
    KeyEncoding { which: &'static str, reason: String },

    /// Key blob did not decode as a P-256 key in the expected DER structure
    #[error("Key '{which}' could not be decoded: {reason}")]
    KeyDecode { which: &'static str, reason: String },

    /// Public key does not belong to the private key
    #[error("Public key does not match the private key")]
    KeyMismatch,

    /// Signature bytes cannot be a signature at all
    #[error("Malformed signature: expected {expected} bytes, got {actual}")]
    MalformedSignature { expected: usize, actual: usize },

    /// Signing primitive failed
    #[error("Signing failed: {reason}")]
    Signing { reason: String },
}

impl CryptoError {
    /// True for the errors that can only happen while loading key material.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CryptoError::MissingKey { .. }
                | CryptoError::KeyEncoding { .. }
                | CryptoError::KeyDecode { .. }
                | CryptoError::KeyMismatch
        )
    }
}

pub type CryptoResult<T> = Result<T, CryptoError>;
