//! Content hashing.

use sha2::{Digest, Sha256};

/// Length of a non-empty digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// SHA-256 over the UTF-8 bytes of `input`.
///
/// An empty input yields an empty digest rather than the SHA-256 of zero
/// bytes. Callers that must reject empty input do so before getting here.
pub fn sha256_digest(input: &str) -> Vec<u8> {
    if input.is_empty() {
        return Vec::new();
    }

    Sha256::digest(input.as_bytes()).to_vec()
}
