//! Core error types

use thiserror::Error;

/// Core error type for CryptoGate
#[derive(Debug, Error)]
pub enum CoreError {
    /// A configuration value was present but could not be used
    #[error("Invalid configuration value '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the core crate
pub type Result<T> = std::result::Result<T, CoreError>;
