//! Core functionality shared by the CryptoGate crates.
//!
//! This crate provides the configuration model, the core error type and the
//! logging setup used by the gateway service and its tests.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    Config, CryptoKeysConfig, JwtConfig, LogFormat, ServerConfig, DEFAULT_MAX_BODY_BYTES,
};
pub use error::{CoreError, Result};
