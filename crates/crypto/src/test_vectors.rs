//! Known-answer tests pinning the algorithms to their standards.
//!
//! - SHA-256 vectors from FIPS 180-2.
//! - The P-256 / SHA-256 "sample" vector from RFC 6979 appendix A.2.5.

use base64::{engine::general_purpose::STANDARD, Engine};
use p256::ecdsa::SigningKey;
use p256::pkcs8::{EncodePrivateKey, EncodePublicKey};

use crate::hashing::sha256_digest;
use crate::keys::KeyMaterial;
use crate::signing::{CryptoOperations, EcdsaCryptoService};

/// RFC 6979 A.2.5 private scalar.
///
/// ⚠️ Publicly known key, for known-answer tests only.
const RFC6979_PRIVATE_KEY_HEX: &str =
    "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";
const RFC6979_PUBLIC_X_HEX: &str =
    "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6";
const RFC6979_PUBLIC_Y_HEX: &str =
    "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299";
const RFC6979_SAMPLE_R_HEX: &str =
    "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716";
const RFC6979_SAMPLE_S_HEX: &str =
    "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8";

struct HashVector {
    input: &'static str,
    expected_hex: &'static str,
}

const HASH_VECTORS: &[HashVector] = &[
    HashVector {
        input: "abc",
        expected_hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    HashVector {
        input: "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        expected_hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    HashVector {
        input: "hello",
        expected_hex: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
    },
];

fn rfc6979_service() -> EcdsaCryptoService {
    let scalar = hex::decode(RFC6979_PRIVATE_KEY_HEX).unwrap();
    let signing_key = SigningKey::from_slice(&scalar).unwrap();

    let private_der = signing_key.to_pkcs8_der().unwrap();
    let public_der = signing_key.verifying_key().to_public_key_der().unwrap();
    let keys = KeyMaterial::from_base64(
        Some(&STANDARD.encode(private_der.as_bytes())),
        Some(&STANDARD.encode(public_der.as_bytes())),
    )
    .unwrap();

    EcdsaCryptoService::new(keys)
}

#[test]
fn test_sha256_vectors() {
    for vector in HASH_VECTORS {
        assert_eq!(
            hex::encode(sha256_digest(vector.input)),
            vector.expected_hex,
            "digest mismatch for {:?}",
            vector.input
        );
    }
}

#[test]
fn test_rfc6979_public_key() {
    let scalar = hex::decode(RFC6979_PRIVATE_KEY_HEX).unwrap();
    let signing_key = SigningKey::from_slice(&scalar).unwrap();
    let point = signing_key.verifying_key().to_encoded_point(false);

    assert_eq!(hex::encode(point.x().unwrap()), RFC6979_PUBLIC_X_HEX);
    assert_eq!(hex::encode(point.y().unwrap()), RFC6979_PUBLIC_Y_HEX);
}

#[test]
fn test_rfc6979_sample_signature_verifies() {
    let service = rfc6979_service();

    let mut signature = hex::decode(RFC6979_SAMPLE_R_HEX).unwrap();
    signature.extend(hex::decode(RFC6979_SAMPLE_S_HEX).unwrap());

    assert!(service.verify("sample", &signature).unwrap());
    assert!(!service.verify("samples", &signature).unwrap());
}

#[test]
fn test_rfc6979_fixed_key_roundtrip() {
    let service = rfc6979_service();
    let signature = service.sign("sample").unwrap();
    assert!(service.verify("sample", &signature).unwrap());
}
