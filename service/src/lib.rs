// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # Signature Service
//!
//! HTTP front end for [`flex_signer`]. Each request to one of the offer
//! routes yields an AWS SigV4 `Authorization` header value, the signed
//! header list and a synthetic client user agent.
//!
//! ```text
//! Client -> GET /accept/{offer}/{marketplace_id}    -> Signer -> JSON
//!        -> GET /challenge/{offer}/{marketplace_id} -> Signer -> JSON
//! ```
//!
//! ## Modules
//!
//! - [`application`]: Axum router, shared state and server setup
//! - [`clock`]: injectable source of the signing instant
//! - [`configuration`]: CLI/environment options with clap
//! - [`constants`]: defaults and placeholder credentials
//! - [`errors`]: application error type and its 500 response
//! - [`routes`]: HTTP route handlers (health, accept, challenge)
//!
//! ## Usage
//!
//! ```bash
//! PORT=5000 RENDER_HOST=api.example.com \
//!   AWS_ACCESS_KEY=... AWS_SECRET_KEY=... signature-service --require-credentials
//! ```
//!
//! ## Security Considerations
//!
//! - The secret key is redacted from every `Debug` rendering and never
//!   appears in responses or error messages
//! - Derived signing keys are zeroized after each request
//! - Without `--require-credentials` the service signs with placeholder
//!   credentials and logs a warning at startup

pub mod application;
pub mod clock;
pub mod configuration;
pub mod constants;
pub mod errors;
pub mod routes;
