use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use cryptogate_crypto::CryptoError;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::auth::AuthenticatedCaller;
use crate::error::ApiError;
use crate::models::{
    json_rejection, HashRequest, HashResponse, SignRequest, SignResponse, TokenResponse,
    VerifyRequest, VerifyResponse,
};
use crate::state::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "crypto-gateway",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// `POST /auth/token`
pub async fn issue_token(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TokenResponse>, ApiError> {
    let issued = state.issuer.issue_token()?;
    info!(
        sub = %issued.claims().sub,
        expires_at = issued.expires_at(),
        "Token issued"
    );

    Ok(Json(TokenResponse {
        token: issued.into_string(),
    }))
}

/// `POST /crypto/hash`
pub async fn hash(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HashRequest>, JsonRejection>,
) -> Result<Json<HashResponse>, ApiError> {
    let Json(request) = payload.map_err(json_rejection)?;
    let data = request.into_data()?;

    let digest = state.crypto.hash(&data);
    info!(data_length = data.chars().count(), "Hash operation successful");

    Ok(Json(HashResponse {
        hash: STANDARD.encode(digest),
    }))
}

/// `POST /crypto/sign`
///
/// The caller extractor runs first, so an unauthenticated request is
/// rejected before the body is read.
pub async fn sign(
    State(state): State<Arc<AppState>>,
    caller: AuthenticatedCaller,
    payload: Result<Json<SignRequest>, JsonRejection>,
) -> Result<Json<SignResponse>, ApiError> {
    let Json(request) = payload.map_err(json_rejection)?;
    let data = request.into_data()?;

    let signature = state
        .crypto
        .sign(&data)
        .map_err(|e| ApiError::crypto("Sign", e))?;

    info!(
        user = caller.subject(),
        data_length = data.chars().count(),
        "Sign operation successful"
    );

    Ok(Json(SignResponse {
        signature: STANDARD.encode(signature),
    }))
}

/// `POST /crypto/verify`
pub async fn verify(
    State(state): State<Arc<AppState>>,
    caller: AuthenticatedCaller,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let Json(request) = payload.map_err(json_rejection)?;
    let input = request.into_input()?;

    let verified = match state.crypto.verify(&input.data, &input.signature) {
        Ok(verified) => verified,
        Err(CryptoError::MalformedSignature { .. }) => {
            return Err(ApiError::validation("signature is not a well-formed signature"));
        }
        Err(e) => return Err(ApiError::crypto("Verify", e)),
    };

    // Only the data length is logged, never the signature.
    info!(
        user = caller.subject(),
        data_length = input.data.chars().count(),
        "Verify operation completed"
    );

    Ok(Json(VerifyResponse { verified }))
}
