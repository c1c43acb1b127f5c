//! Identity assertion for token issuance.

use serde::{Deserialize, Serialize};

use crate::error::IdentityResult;

/// Subject the service issues tokens for.
pub const DEFAULT_SUBJECT: &str = "demo-user";

/// Role required by the sign and verify operations.
pub const REQUIRED_ROLE: &str = "crypto-user";

/// Who a token speaks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub subject: String,
    pub role: String,
}

impl Identity {
    pub fn new(subject: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            role: role.into(),
        }
    }
}

/// Decides which identity a newly issued token asserts.
///
/// The issuance endpoint takes no caller input, so a provider only has
/// its own configuration to go on. A provider backed by a user store would
/// plug in here.
pub trait IdentityProvider: Send + Sync {
    fn assert_identity(&self) -> IdentityResult<Identity>;
}

/// Always asserts the same identity.
#[derive(Debug, Clone)]
pub struct FixedIdentityProvider {
    identity: Identity,
}

impl FixedIdentityProvider {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

impl Default for FixedIdentityProvider {
    fn default() -> Self {
        Self::new(Identity::new(DEFAULT_SUBJECT, REQUIRED_ROLE))
    }
}

impl IdentityProvider for FixedIdentityProvider {
    fn assert_identity(&self) -> IdentityResult<Identity> {
        Ok(self.identity.clone())
    }
}
