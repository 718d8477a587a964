// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use flex_signer::SignerError;
use serde_json::json;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AppError {
    #[error(transparent)]
    Signing(#[from] SignerError),
    #[error("invalid path: {0}")]
    BadPath(String),
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // every request-time failure is reported as a 500
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(json!({"error": self.to_string()}));

        (status, body).into_response()
    }
}

impl From<AppError> for std::io::Error {
    fn from(source: AppError) -> Self {
        std::io::Error::other(source.to_string())
    }
}
