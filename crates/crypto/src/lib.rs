//! Cryptographic operations for the CryptoGate service.
//!
//! This crate owns the service key pair and the three operations exposed
//! over HTTP:
//!
//! - **Hashing**: SHA-256 content digests
//! - **Signing**: ECDSA P-256 over SHA-256, fixed-length `r || s` encoding
//! - **Verification**: boolean check against the matching public key
//!
//! All three sit behind the [`CryptoOperations`] trait so the gateway can hold
//! a single shared capability.
//!
//! # Security Principles
//!
//! - Key material is decoded once at startup and never encoded back out
//! - Secrets are never logged; only a public-key fingerprint is
//! - A mismatched or undecodable key pair is a startup failure

pub mod error;
pub mod hashing;
pub mod keys;
pub mod signing;

#[cfg(test)]
mod test_vectors;

pub use error::{CryptoError, CryptoResult};
pub use hashing::{sha256_digest, DIGEST_LEN};
pub use keys::KeyMaterial;
pub use signing::{CryptoOperations, EcdsaCryptoService, SIGNATURE_LEN};
