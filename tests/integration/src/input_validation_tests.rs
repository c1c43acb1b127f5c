//! Input checks that run after authentication and before crypto work

use crate::test_utils::*;
use axum::http::{Method, StatusCode};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::json;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_hash_empty_data_is_bad_request() {
    let (app, calls) = counting_app();

    for body in [json!({ "data": "" }), json!({}), json!({ "data": null })] {
        let response = post_json(&app, "/crypto/hash", None, body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], json!("Data is required"));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_sign_empty_data_is_bad_request() {
    let (app, calls) = counting_app();
    let token = fetch_token(&app).await;

    let response = post_json(&app, "/crypto/sign", Some(&token), json!({ "data": "" })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_sign_data_over_limit_is_bad_request() {
    let (app, calls) = counting_app();
    let token = fetch_token(&app).await;

    let data = "a".repeat(4097);
    let response = post_json(&app, "/crypto/sign", Some(&token), json!({ "data": data })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let data = "a".repeat(4096);
    let response = post_json(&app, "/crypto/sign", Some(&token), json!({ "data": data })).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_verify_missing_signature_is_bad_request() {
    let (app, calls) = counting_app();
    let token = fetch_token(&app).await;

    let response = post_json(&app, "/crypto/verify", Some(&token), json!({ "data": "hello" })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        json!("Data and signature are required")
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_verify_bad_base64_is_bad_request() {
    let (app, calls) = counting_app();
    let token = fetch_token(&app).await;

    let response = post_json(
        &app,
        "/crypto/verify",
        Some(&token),
        json!({ "data": "hello", "signature": "***" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_verify_wrong_length_signature_is_bad_request() {
    let (app, _calls) = counting_app();
    let token = fetch_token(&app).await;

    let response = post_json(
        &app,
        "/crypto/verify",
        Some(&token),
        json!({ "data": "hello", "signature": STANDARD.encode([7u8; 10]) }),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_verify_zero_signature_is_false() {
    let (app, _calls) = counting_app();
    let token = fetch_token(&app).await;

    let response = post_json(
        &app,
        "/crypto/verify",
        Some(&token),
        json!({ "data": "hello", "signature": STANDARD.encode([0u8; 64]) }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["verified"], json!(false));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (app, calls) = counting_app();

    let response = send(
        &app,
        Method::POST,
        "/crypto/hash",
        None,
        Some("{\"data\":".to_string()),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let (app, calls) = counting_app();

    let data = "a".repeat(11 * 1024);
    let response = post_json(&app, "/crypto/hash", None, json!({ "data": data })).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response.body["error"].is_string());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_oversized_sign_body_with_valid_token_is_payload_too_large() {
    let (app, calls) = counting_app();
    let token = fetch_token(&app).await;

    let data = "a".repeat(11 * 1024);
    let response = post_json(&app, "/crypto/sign", Some(&token), json!({ "data": data })).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.body["error"],
        json!("Request body too large")
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
