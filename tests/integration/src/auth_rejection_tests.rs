//! Requests that must be stopped at the credential gate
//!
//! Every case here also checks that the crypto layer was never invoked.

use crate::test_utils::*;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_sign_without_token_is_unauthorized() {
    let (app, calls) = counting_app();

    let response = post_json(&app, "/crypto/sign", None, json!({ "data": "hello" })).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.www_authenticate.as_deref(), Some("Bearer"));
    assert!(response.body["error"].is_string());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_verify_without_token_is_unauthorized() {
    let (app, calls) = counting_app();

    let response = post_json(
        &app,
        "/crypto/verify",
        None,
        json!({ "data": "hello", "signature": "AAAA" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let (app, calls) = counting_app();

    let mut claims = valid_claims();
    claims.iat -= 7200;
    claims.nbf -= 7200;
    claims.exp = claims.iat + 60;
    let token = forge_token(&claims, TEST_SECRET);

    let response = post_json(&app, "/crypto/sign", Some(&token), json!({ "data": "hello" })).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_not_yet_valid_token_is_unauthorized() {
    let (app, calls) = counting_app();

    let mut claims = valid_claims();
    claims.nbf += 600;
    let token = forge_token(&claims, TEST_SECRET);

    let response = post_json(&app, "/crypto/sign", Some(&token), json!({ "data": "hello" })).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let (app, calls) = counting_app();

    let token = forge_token(&valid_claims(), "some-other-secret-that-is-long-enough!!");

    let response = post_json(&app, "/crypto/sign", Some(&token), json!({ "data": "hello" })).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_wrong_issuer_or_audience_is_unauthorized() {
    let (app, calls) = counting_app();

    let mut foreign_issuer = valid_claims();
    foreign_issuer.iss = "https://elsewhere.test".to_string();
    let mut foreign_audience = valid_claims();
    foreign_audience.aud = "someone-else".to_string();

    for claims in [foreign_issuer, foreign_audience] {
        let token = forge_token(&claims, TEST_SECRET);
        let response =
            post_json(&app, "/crypto/sign", Some(&token), json!({ "data": "hello" })).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_wrong_role_is_forbidden() {
    let (app, calls) = counting_app();

    let mut claims = valid_claims();
    claims.role = "viewer".to_string();
    let token = forge_token(&claims, TEST_SECRET);

    let response = post_json(&app, "/crypto/sign", Some(&token), json!({ "data": "hello" })).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.www_authenticate.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let (app, calls) = counting_app();

    let response = post_json(
        &app,
        "/crypto/verify",
        Some("not.a.jwt"),
        json!({ "data": "hello", "signature": "AAAA" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unauthenticated_request_with_bad_body_is_unauthorized() {
    let (app, calls) = counting_app();

    let response = send(
        &app,
        axum::http::Method::POST,
        "/crypto/sign",
        None,
        Some("{not json".to_string()),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
