// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! HTTP integration tests for the signature service API.
//!
//! These tests use `axum-test` to exercise the full HTTP request/response
//! cycle through the Axum router.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use flex_signer::constants::OFFER_ID;
use signature_service::application::{AppState, create_router};
use signature_service::clock::{Clock, FixedClock, SystemClock};
use signature_service::configuration::ServiceOptions;

const MARKETPLACE_ID: &str = "ATVPDKIKX0DER";
const GOLDEN_ACCEPT: &str = "AWS4-HMAC-SHA256 Credential=your-access-key/20240115/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date, Signature=680d03e5e452858a4f56dde5f048b9db505e7f0b625751ef6ffc00b4fc30d00c";
const GOLDEN_CHALLENGE: &str = "AWS4-HMAC-SHA256 Credential=your-access-key/20240115/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date, Signature=443bd9dff40e96f5f14a4622262a48489631f32e57aac25e13c9a74d6b2bba6f";

fn golden_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

/// Creates a test server with default options and the given clock.
fn create_test_server_with(options: &ServiceOptions, clock: Arc<dyn Clock>) -> TestServer {
    let state = AppState::new(options, clock).unwrap();
    TestServer::new(create_router(state)).unwrap()
}

fn create_test_server() -> TestServer {
    create_test_server_with(&ServiceOptions::default(), Arc::new(FixedClock(golden_instant())))
}

fn accept_path(marketplace_id: &str) -> String {
    format!("/accept/{OFFER_ID}/{marketplace_id}")
}

fn challenge_path(marketplace_id: &str) -> String {
    format!("/challenge/{OFFER_ID}/{marketplace_id}")
}

fn assert_user_agent_shape(agent: &str) {
    let version = agent
        .strip_prefix("AmazonFlex/1.0 (Android; ")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap();
    let digits: Vec<char> = version.chars().collect();
    assert_eq!(digits.len(), 5, "unexpected user agent {agent}");
    assert!(('1'..='9').contains(&digits[0]));
    assert_eq!(digits[1], '.');
    assert!(digits[2].is_ascii_digit());
    assert_eq!(digits[3], '.');
    assert!(digits[4].is_ascii_digit());
}

// =============================================================================
// Health Endpoint
// =============================================================================

#[tokio::test]
async fn test_health_endpoint_returns_status_ok_body() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&serde_json::json!({"status": "ok"}));
}

// =============================================================================
// Signing Endpoints
// =============================================================================

#[tokio::test]
async fn test_accept_returns_golden_signature() {
    let server = create_test_server();
    let response = server.get(&accept_path(MARKETPLACE_ID)).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["signature"], GOLDEN_ACCEPT);
    assert_eq!(body["signature_input"], "host;x-amz-date");
    assert_user_agent_shape(body["user_agent"].as_str().unwrap());
    assert_eq!(body.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_challenge_returns_golden_signature() {
    let server = create_test_server();
    let response = server.get(&challenge_path(MARKETPLACE_ID)).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["signature"], GOLDEN_CHALLENGE);
    assert_eq!(body["signature_input"], "host;x-amz-date");
}

#[tokio::test]
async fn test_signature_is_stable_across_requests() {
    let server = create_test_server();
    let first: serde_json::Value = server.get(&accept_path(MARKETPLACE_ID)).await.json();
    let second: serde_json::Value = server.get(&accept_path(MARKETPLACE_ID)).await.json();
    assert_eq!(first["signature"], second["signature"]);
    assert_eq!(first["signature_input"], second["signature_input"]);
}

#[tokio::test]
async fn test_wall_clock_signature_has_all_keys() {
    let server = create_test_server_with(&ServiceOptions::default(), Arc::new(SystemClock));
    let response = server.get(&accept_path("A1F83G8C2ARO7P")).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    for key in ["signature", "signature_input", "user_agent"] {
        assert!(!body[key].as_str().unwrap().is_empty(), "{key} is empty");
    }
    let signature = body["signature"].as_str().unwrap();
    assert!(signature.starts_with("AWS4-HMAC-SHA256 Credential=your-access-key/"));
    assert!(signature.contains("/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date, Signature="));
}

#[tokio::test]
async fn test_render_host_changes_signature() {
    let options = ServiceOptions {
        render_host: "other.example.com".to_string(),
        ..ServiceOptions::default()
    };
    let server = create_test_server_with(&options, Arc::new(FixedClock(golden_instant())));
    let body: serde_json::Value = server.get(&accept_path(MARKETPLACE_ID)).await.json();
    assert_ne!(body["signature"], GOLDEN_ACCEPT);
}

#[tokio::test]
async fn test_secret_never_in_response() {
    let secret = "wJalrXUtnFEMI-K7MDENG-bPxRfiCYEXAMPLEKEY";
    let options = ServiceOptions {
        access_key: "AKIDEXAMPLE".to_string(),
        secret_key: secret.to_string(),
        ..ServiceOptions::default()
    };
    let server = create_test_server_with(&options, Arc::new(FixedClock(golden_instant())));

    let ok = server.get(&accept_path(MARKETPLACE_ID)).await;
    ok.assert_status_ok();
    assert!(!ok.text().contains(secret));
    assert!(ok.text().contains("Credential=AKIDEXAMPLE/20240115/"));

    let failing_clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap()));
    let server = create_test_server_with(&options, failing_clock);
    let failed = server.get(&challenge_path(MARKETPLACE_ID)).await;
    failed.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!failed.text().contains(secret));
}

// =============================================================================
// Failure Handling
// =============================================================================

#[tokio::test]
async fn test_signing_failure_returns_500_with_error() {
    let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap()));
    let server = create_test_server_with(&ServiceOptions::default(), clock);

    for path in [accept_path(MARKETPLACE_ID), challenge_path(MARKETPLACE_ID)] {
        let response = server.get(&path).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert_eq!(body.as_object().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn test_encoded_slash_in_marketplace_id_returns_500() {
    let server = create_test_server();
    let response = server.get(&accept_path("A%2FB")).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"],
        "invalid path: marketplace id must be a single path segment"
    );
    assert!(body.get("signature").is_none());
}

#[tokio::test]
async fn test_wrong_offer_id_is_not_routed() {
    let server = create_test_server();
    let response = server
        .get("/accept/00000000-0000-0000-0000-000000000000/ATVPDKIKX0DER")
        .await;
    response.assert_status_not_found();
}
