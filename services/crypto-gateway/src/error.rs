//! Request and startup errors for the gateway.
//!
//! [`ApiError`] is what handlers and extractors return. Its response body is
//! always `{"error": "<message>"}` where the message is generic per error
//! class; the underlying cause only goes to the server log.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use cryptogate_crypto::CryptoError;
use cryptogate_identity::{ErrorClass, IdentityError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, expired or foreign bearer token.
    #[error("authentication failed: {0}")]
    Authentication(#[source] IdentityError),

    /// Valid token without the required role.
    #[error("authorization failed: {0}")]
    Authorization(#[source] IdentityError),

    /// Request input rejected before any cryptographic work.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("request body too large")]
    PayloadTooLarge,

    /// Unexpected failure inside hash/sign/verify.
    #[error("{operation} operation failed: {source}")]
    CryptoOperation {
        operation: &'static str,
        #[source]
        source: CryptoError,
    },

    /// Token minting failed.
    #[error("token issuance failed: {0}")]
    Issuance(#[source] IdentityError),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn crypto(operation: &'static str, source: CryptoError) -> Self {
        ApiError::CryptoOperation { operation, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::Authorization(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::CryptoOperation { .. } | ApiError::Issuance(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message returned to the caller.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Authentication(_) => "Invalid or missing bearer token".to_string(),
            ApiError::Authorization(_) => "Insufficient permissions".to_string(),
            ApiError::Validation(msg) => msg.clone(),
            ApiError::PayloadTooLarge => "Request body too large".to_string(),
            ApiError::CryptoOperation { operation, .. } => {
                format!("{} operation failed", operation)
            }
            ApiError::Issuance(_) => "Token issuance failed".to_string(),
        }
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err.class() {
            ErrorClass::Authentication => ApiError::Authentication(err),
            ErrorClass::Authorization => ApiError::Authorization(err),
            ErrorClass::Configuration | ErrorClass::Internal => ApiError::Issuance(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Authentication(cause) | ApiError::Authorization(cause) => {
                warn!(reason = %cause, "Rejected request");
            }
            ApiError::Validation(msg) => {
                warn!(reason = %msg, "Rejected invalid request");
            }
            ApiError::PayloadTooLarge => {
                warn!("Rejected oversized request body");
            }
            ApiError::CryptoOperation { operation, source } => {
                error!(operation = *operation, error = %source, "Crypto operation failed");
            }
            ApiError::Issuance(cause) => {
                error!(error = %cause, "Token issuance failed");
            }
        }

        let status = self.status();
        let body = Json(ErrorBody {
            error: self.public_message(),
        });
        let mut response = (status, body).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

/// Fatal errors while building the service state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("signing credentials rejected: {0}")]
    Credentials(#[source] IdentityError),

    #[error("key material rejected: {0}")]
    Keys(#[from] CryptoError),
}
