//! HTTP gateway exposing SHA-256 hashing and ECDSA P-256 signing and
//! verification. Sign and verify require a bearer token minted by
//! `POST /auth/token`.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, StartupError};
pub use state::AppState;

/// Builds the gateway router over shared state.
///
/// The body cap is enforced by the JSON extractors, so an oversized body
/// surfaces as a 413 in the usual error shape.
pub fn router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.max_body_bytes;

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/auth/token", post(handlers::issue_token))
        .route("/crypto/hash", post(handlers::hash))
        .route("/crypto/sign", post(handlers::sign))
        .route("/crypto/verify", post(handlers::verify))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}
