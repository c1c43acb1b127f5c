//! Bearer-token identity for the CryptoGate service.
//!
//! This crate mints and checks the short-lived tokens that gate the sign and
//! verify operations.
//!
//! # Core Concepts
//!
//! - **Signing credentials**: issuer, audience, HMAC secret and lifetime,
//!   loaded once at startup
//! - **Credential issuer**: mints HS256 JWTs for the identity asserted by an
//!   [`IdentityProvider`]
//! - **Credential validator**: signature, issuer, audience, expiry (no clock
//!   skew) and role checks, in that order
//!
//! Tokens are stateless. Nothing is stored server-side and a token cannot be
//! revoked before it expires.

pub mod credentials;
pub mod error;
pub mod identity;
pub mod issuer;
pub mod token;
pub mod validator;

pub use credentials::{SigningCredentials, MAX_LIFETIME_MINUTES, RECOMMENDED_SECRET_LEN};
pub use error::{ErrorClass, IdentityError, IdentityResult};
pub use identity::{
    FixedIdentityProvider, Identity, IdentityProvider, DEFAULT_SUBJECT, REQUIRED_ROLE,
};
pub use issuer::CredentialIssuer;
pub use token::{IssuedToken, TokenClaims};
pub use validator::CredentialValidator;
