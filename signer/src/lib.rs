// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # Flex Signer
//!
//! AWS Signature Version 4 signing for the offer `accept` and `challenge`
//! endpoints, plus the synthetic client user agent sent alongside it.
//!
//! The signer is pure: callers read the clock once and pass the instant in,
//! and supply the random source used for the user agent.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use flex_signer::{EndpointKind, SigningCredentials, sign};
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
//! let credentials = SigningCredentials::new("your-access-key", "your-secret-key");
//! let mut rng = fastrand::Rng::new();
//!
//! let result = sign(
//!     "ATVPDKIKX0DER",
//!     EndpointKind::Accept,
//!     &now,
//!     "signature-service.example.com",
//!     &credentials,
//!     &mut rng,
//! )
//! .unwrap();
//! assert_eq!(result.signed_headers, "host;x-amz-date");
//! ```
//!
//! ## Modules
//!
//! - [`constants`]: fixed region, service, offer id and formats
//! - [`errors`]: signer error type
//! - [`models`]: endpoint kinds, credentials, timestamps and results
//! - [`sigv4`]: canonical request, string to sign and key derivation
//! - [`user_agent`]: randomized client user agent

pub mod constants;
pub mod errors;
pub mod models;
pub mod sigv4;
pub mod user_agent;

pub use errors::SignerError;
pub use models::{EndpointKind, SignatureResult, SigningCredentials, Timestamp};
pub use sigv4::sign;
