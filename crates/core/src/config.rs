//! Configuration management for CryptoGate.
//!
//! Configuration is read from an optional TOML file and then overlaid with
//! environment variables. Values here are raw: secrets and key blobs are
//! validated by the crates that own them when the service state is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{CoreError, Result};

pub const ENV_BIND_ADDR: &str = "CRYPTOGATE_BIND_ADDR";
pub const ENV_MAX_BODY_BYTES: &str = "CRYPTOGATE_MAX_BODY_BYTES";
pub const ENV_LOG_FORMAT: &str = "CRYPTOGATE_LOG_FORMAT";
pub const ENV_JWT_SIGNING_KEY: &str = "JWT_SIGNING_KEY";
pub const ENV_JWT_ISSUER: &str = "JWT_ISSUER";
pub const ENV_JWT_AUDIENCE: &str = "JWT_AUDIENCE";
pub const ENV_JWT_TOKEN_LIFETIME_MINUTES: &str = "JWT_TOKEN_LIFETIME_MINUTES";
pub const ENV_CRYPTO_PRIVATE_KEY: &str = "CRYPTO_PRIVATE_KEY";
pub const ENV_CRYPTO_PUBLIC_KEY: &str = "CRYPTO_PUBLIC_KEY";

/// Default cap on request bodies (10 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub crypto_keys: CryptoKeysConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(CoreError::invalid(
                ENV_LOG_FORMAT,
                format!("unknown log format '{}'", other),
            )),
        }
    }
}

/// Bearer token settings as configured.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    pub signing_key: Option<String>,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub token_lifetime_minutes: Option<i64>,
}

// Secrets never reach log output through Debug.
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("signing_key", &self.signing_key.as_ref().map(|_| "<redacted>"))
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("token_lifetime_minutes", &self.token_lifetime_minutes)
            .finish()
    }
}

/// Base64-encoded DER key blobs as configured.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoKeysConfig {
    pub private_key: Option<String>,
    pub public_key: Option<String>,
}

impl fmt::Debug for CryptoKeysConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoKeysConfig")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("public_key", &self.public_key)
            .finish()
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the file at `path` when given, then applies process environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlays values returned by `lookup` on top of the current ones.
    ///
    /// Empty strings count as unset so that an exported-but-blank variable
    /// does not mask a file value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(addr) = get(ENV_BIND_ADDR) {
            self.server.bind_addr = addr;
        }
        if let Some(raw) = get(ENV_MAX_BODY_BYTES) {
            self.server.max_body_bytes = raw.trim().parse().map_err(|e| {
                CoreError::invalid(ENV_MAX_BODY_BYTES, format!("{}", e))
            })?;
        }
        if let Some(raw) = get(ENV_LOG_FORMAT) {
            self.server.log_format = raw.parse()?;
        }

        if let Some(key) = get(ENV_JWT_SIGNING_KEY) {
            self.jwt.signing_key = Some(key);
        }
        if let Some(issuer) = get(ENV_JWT_ISSUER) {
            self.jwt.issuer = Some(issuer);
        }
        if let Some(audience) = get(ENV_JWT_AUDIENCE) {
            self.jwt.audience = Some(audience);
        }
        if let Some(raw) = get(ENV_JWT_TOKEN_LIFETIME_MINUTES) {
            let minutes = raw.trim().parse::<i64>().map_err(|_| {
                CoreError::invalid(
                    ENV_JWT_TOKEN_LIFETIME_MINUTES,
                    "must be a valid integer",
                )
            })?;
            self.jwt.token_lifetime_minutes = Some(minutes);
        }

        if let Some(key) = get(ENV_CRYPTO_PRIVATE_KEY) {
            self.crypto_keys.private_key = Some(key);
        }
        if let Some(key) = get(ENV_CRYPTO_PUBLIC_KEY) {
            self.crypto_keys.public_key = Some(key);
        }

        Ok(())
    }
}
