//! Startup must refuse incomplete or inconsistent configuration

use crate::test_utils::*;
use crypto_gateway::{AppState, StartupError};
use cryptogate_crypto::CryptoOperations;

#[test]
fn test_complete_config_starts() {
    let state = AppState::from_config(&test_config()).unwrap();
    assert_eq!(state.max_body_bytes, 10 * 1024);
    assert_eq!(state.crypto.key_id().len(), 32);
}

#[test]
fn test_missing_signing_key_fails() {
    let mut config = test_config();
    config.jwt.signing_key = None;
    assert!(matches!(
        AppState::from_config(&config),
        Err(StartupError::Credentials(_))
    ));
}

#[test]
fn test_missing_private_key_fails() {
    let mut config = test_config();
    config.crypto_keys.private_key = None;
    assert!(matches!(
        AppState::from_config(&config),
        Err(StartupError::Keys(_))
    ));
}

#[test]
fn test_undecodable_public_key_fails() {
    let mut config = test_config();
    config.crypto_keys.public_key = Some("!!!not base64!!!".to_string());
    assert!(matches!(
        AppState::from_config(&config),
        Err(StartupError::Keys(_))
    ));
}

#[test]
fn test_mismatched_key_pair_fails() {
    let mut config = test_config();
    let (_, other_public) = generate_key_pair_base64();
    config.crypto_keys.public_key = Some(other_public);
    assert!(matches!(
        AppState::from_config(&config),
        Err(StartupError::Keys(_))
    ));
}

#[test]
fn test_non_positive_lifetime_fails() {
    let mut config = test_config();
    config.jwt.token_lifetime_minutes = Some(0);
    assert!(AppState::from_config(&config).is_err());
}

#[test]
fn test_configured_body_limit_is_applied() {
    let mut config = test_config();
    config.server.max_body_bytes = 2048;
    let state = AppState::from_config(&config).unwrap();
    assert_eq!(state.max_body_bytes, 2048);
}
