//! Request and response bodies, and the input checks that run before any
//! cryptographic work.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Maximum characters of `data` for sign and verify.
pub const MAX_DATA_CHARS: usize = 4096;

/// Maximum characters of the base64 `signature` for verify.
pub const MAX_SIGNATURE_CHARS: usize = 8192;

#[derive(Debug, Deserialize)]
pub struct HashRequest {
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignRequest {
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HashResponse {
    pub hash: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignResponse {
    pub signature: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub verified: bool,
}

/// Verify input after validation: the data and the decoded signature bytes.
#[derive(Debug)]
pub struct VerifyInput {
    pub data: String,
    pub signature: Vec<u8>,
}

impl HashRequest {
    pub fn into_data(self) -> Result<String, ApiError> {
        non_empty(self.data).ok_or_else(|| ApiError::validation("Data is required"))
    }
}

impl SignRequest {
    pub fn into_data(self) -> Result<String, ApiError> {
        let data = non_empty(self.data).ok_or_else(|| ApiError::validation("Data is required"))?;
        check_len("data", &data, MAX_DATA_CHARS)?;
        Ok(data)
    }
}

impl VerifyRequest {
    pub fn into_input(self) -> Result<VerifyInput, ApiError> {
        let (data, signature) = match (non_empty(self.data), non_empty(self.signature)) {
            (Some(data), Some(signature)) => (data, signature),
            _ => return Err(ApiError::validation("Data and signature are required")),
        };

        check_len("data", &data, MAX_DATA_CHARS)?;
        check_len("signature", &signature, MAX_SIGNATURE_CHARS)?;

        let signature = STANDARD
            .decode(signature.as_bytes())
            .map_err(|_| ApiError::validation("signature must be valid base64"))?;

        Ok(VerifyInput { data, signature })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), ApiError> {
    if value.chars().count() > max {
        return Err(ApiError::validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Turns a JSON extraction failure into the gateway's error shape.
pub fn json_rejection(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge;
    }
    ApiError::validation(format!("Invalid request body: {}", rejection.body_text()))
}
