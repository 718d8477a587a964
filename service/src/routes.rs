// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! HTTP route handlers for the signature service.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/health` | [`health`] |
//! | GET | `/accept/{OFFER_ID}/{marketplace_id}` | [`accept`] |
//! | GET | `/challenge/{OFFER_ID}/{marketplace_id}` | [`challenge`] |
//!
//! Signing responses are `{"signature", "signature_input", "user_agent"}`;
//! any failure is a 500 with `{"error": "..."}`.

use std::sync::Arc;

use crate::application::AppState;
use crate::errors::AppError;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use flex_signer::{EndpointKind, SignatureResult};
use serde_json::json;

/// Health check endpoint.
///
/// ```json
/// {"status": "ok"}
/// ```
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Signs a request for the offer accept endpoint.
#[tracing::instrument(skip(state))]
pub async fn accept(
    State(state): State<Arc<AppState>>,
    marketplace_id: Result<Path<String>, PathRejection>,
) -> Result<Json<SignatureResult>, AppError> {
    sign_endpoint(&state, EndpointKind::Accept, marketplace_id)
}

/// Signs a request for the offer challenge endpoint.
#[tracing::instrument(skip(state))]
pub async fn challenge(
    State(state): State<Arc<AppState>>,
    marketplace_id: Result<Path<String>, PathRejection>,
) -> Result<Json<SignatureResult>, AppError> {
    sign_endpoint(&state, EndpointKind::Challenge, marketplace_id)
}

fn sign_endpoint(
    state: &AppState,
    kind: EndpointKind,
    marketplace_id: Result<Path<String>, PathRejection>,
) -> Result<Json<SignatureResult>, AppError> {
    let Path(marketplace_id) = marketplace_id.map_err(|e| {
        tracing::error!("[service] path rejected: {}", e);
        AppError::BadPath(e.body_text())
    })?;

    // a decoded `/` would sign a path that is never routed
    if marketplace_id.contains('/') {
        tracing::error!("[service] marketplace id contains '/'");
        return Err(AppError::BadPath(
            "marketplace id must be a single path segment".to_string(),
        ));
    }

    // single clock read per request
    let now = state.clock.now();
    let mut rng = fastrand::Rng::new();

    let result = flex_signer::sign(
        &marketplace_id,
        kind,
        &now,
        &state.host,
        &state.credentials,
        &mut rng,
    )
    .map_err(|e| {
        tracing::error!("[service] {} signing failed: {}", kind, e);
        AppError::from(e)
    })?;

    tracing::debug!("[service] signed {} request at {}", kind, now);

    Ok(Json(result))
}
