//! Bearer-token gate for the sign and verify routes.
//!
//! [`AuthenticatedCaller`] is an extractor: any handler that takes it can only
//! run once the `Authorization` header carries a token the validator accepts.
//! It reads only request parts, so it runs before the body is parsed.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use cryptogate_identity::{IdentityError, TokenClaims};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

/// Claims of a caller that passed the credential gate.
#[derive(Debug, Clone)]
pub struct AuthenticatedCaller(pub TokenClaims);

impl AuthenticatedCaller {
    pub fn subject(&self) -> &str {
        &self.0.sub
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively; anything other than `Bearer`
/// yields `None`.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    let (scheme, token) = auth_header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthenticatedCaller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(extract_bearer_token)
            .ok_or(ApiError::Authentication(IdentityError::MissingToken))?;

        let claims = state.validator.validate(token)?;
        Ok(AuthenticatedCaller(claims))
    }
}
