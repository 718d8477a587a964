// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! AWS Signature Version 4 for the fixed `GET` request shape served here.
//!
//! Only `host` and `x-amz-date` are signed, there is no query string, and
//! no payload hash line is appended to the canonical request.
//!
//! ```text
//! CanonicalRequest = "GET\n" path "\n\n"
//!                    "host:" host "\n" "x-amz-date:" amz_date "\n\n"
//!                    "host;x-amz-date\n"
//! StringToSign     = "AWS4-HMAC-SHA256\n" amz_date "\n" scope "\n"
//!                    hex(SHA256(CanonicalRequest))
//! Signature        = hex(HMAC(SigningKey, StringToSign))
//! ```

use aws_lc_rs::{digest, hmac};
use chrono::{DateTime, Utc};
use data_encoding::HEXLOWER;
use zeroize::Zeroizing;

use crate::constants::{ALGORITHM, METHOD, REGION, SCOPE_TERMINATOR, SERVICE, SIGNED_HEADERS};
use crate::errors::SignerError;
use crate::models::{EndpointKind, SignatureResult, SigningCredentials, Timestamp};
use crate::user_agent::user_agent;

/// Signs a request for `marketplace_id` on the `kind` endpoint.
///
/// `now` is the single clock reading for this invocation; both the amz date
/// and the date stamp are derived from it. `rng` only feeds the user agent.
///
/// # Errors
///
/// [`SignerError::InvalidTimestamp`] if `now` cannot be rendered in the
/// fixed-width amz date format.
pub fn sign(
    marketplace_id: &str,
    kind: EndpointKind,
    now: &DateTime<Utc>,
    host: &str,
    credentials: &SigningCredentials,
    rng: &mut fastrand::Rng,
) -> Result<SignatureResult, SignerError> {
    let timestamp = Timestamp::new(now)?;

    let path = kind.path(marketplace_id);
    let canonical_request = canonical_request(&path, host, timestamp.amz_date());
    let scope = credential_scope(timestamp.date_stamp());
    let string_to_sign = string_to_sign(
        timestamp.amz_date(),
        &scope,
        &hash_canonical_request(&canonical_request),
    );

    let signing_key = derive_signing_key(credentials.secret_key(), timestamp.date_stamp());
    let signature = compute_signature(&signing_key, &string_to_sign);

    Ok(SignatureResult {
        authorization_header: authorization_header(credentials.access_key(), &scope, &signature),
        signed_headers: SIGNED_HEADERS.to_string(),
        user_agent: user_agent(rng),
    })
}

#[must_use]
pub fn canonical_request(path: &str, host: &str, amz_date: &str) -> String {
    format!("{METHOD}\n{path}\n\nhost:{host}\nx-amz-date:{amz_date}\n\n{SIGNED_HEADERS}\n")
}

/// Lowercase hex SHA-256 of the canonical request.
#[must_use]
pub fn hash_canonical_request(canonical_request: &str) -> String {
    let digest = digest::digest(&digest::SHA256, canonical_request.as_bytes());
    HEXLOWER.encode(digest.as_ref())
}

#[must_use]
pub fn credential_scope(date_stamp: &str) -> String {
    format!("{date_stamp}/{REGION}/{SERVICE}/{SCOPE_TERMINATOR}")
}

#[must_use]
pub fn string_to_sign(amz_date: &str, credential_scope: &str, hashed_request: &str) -> String {
    format!("{ALGORITHM}\n{amz_date}\n{credential_scope}\n{hashed_request}")
}

/// Derives the signing key for the fixed region and service.
///
/// ```text
/// kDate    = HMAC("AWS4" + secret_key, date_stamp)
/// kRegion  = HMAC(kDate, "us-east-1")
/// kService = HMAC(kRegion, "execute-api")
/// kSigning = HMAC(kService, "aws4_request")
/// ```
///
/// Every intermediate key is zeroized when dropped.
#[must_use]
pub fn derive_signing_key(secret_key: &str, date_stamp: &str) -> Zeroizing<Vec<u8>> {
    derive_scoped_key(secret_key, date_stamp, REGION, SERVICE)
}

fn derive_scoped_key(
    secret_key: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> Zeroizing<Vec<u8>> {
    let secret = Zeroizing::new(format!("AWS4{secret_key}"));
    let k_date = hmac_sha256(secret.as_bytes(), date_stamp.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, SCOPE_TERMINATOR.as_bytes())
}

/// Lowercase hex HMAC-SHA256 of `string_to_sign` under `signing_key`.
#[must_use]
pub fn compute_signature(signing_key: &[u8], string_to_sign: &str) -> String {
    let signature = hmac_sha256(signing_key, string_to_sign.as_bytes());
    HEXLOWER.encode(&signature)
}

#[must_use]
pub fn authorization_header(access_key: &str, credential_scope: &str, signature: &str) -> String {
    format!(
        "{ALGORITHM} Credential={access_key}/{credential_scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}"
    )
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Zeroizing<Vec<u8>> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    let tag = hmac::sign(&key, data);
    Zeroizing::new(tag.as_ref().to_vec())
}
