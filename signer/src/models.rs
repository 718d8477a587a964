// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::ZeroizeOnDrop;

use crate::constants::{AMZ_DATE_FORMAT, AMZ_DATE_LENGTH, DATE_STAMP_LENGTH, OFFER_ID};
use crate::errors::SignerError;

/// Which of the two offer endpoints a signature is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Accept,
    Challenge,
}

impl EndpointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Challenge => "challenge",
        }
    }

    /// Builds `/{kind}/{OFFER_ID}/{marketplace_id}`.
    ///
    /// The marketplace id is inserted verbatim. Passing a route placeholder
    /// such as `{marketplace_id}` yields the router template for this kind.
    pub fn path(&self, marketplace_id: &str) -> String {
        format!("/{}/{}/{}", self.as_str(), OFFER_ID, marketplace_id)
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access key and secret key used to sign requests.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct SigningCredentials {
    access_key: String,
    secret_key: String,
}

impl SigningCredentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

// Custom Debug implementation to prevent accidental logging of sensitive data
impl fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// An instant rendered in ISO8601 basic format.
///
/// The date stamp is always the first eight characters of the amz date, so
/// both values are guaranteed to come from the same instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    amz_date: String,
}

impl Timestamp {
    /// Renders `now` as `YYYYMMDDTHHMMSSZ`.
    ///
    /// # Errors
    ///
    /// [`SignerError::InvalidTimestamp`] when the year does not fit in four
    /// digits.
    pub fn new(now: &DateTime<Utc>) -> Result<Self, SignerError> {
        let amz_date = now.format(AMZ_DATE_FORMAT).to_string();

        let well_formed = amz_date.len() == AMZ_DATE_LENGTH
            && amz_date
                .bytes()
                .take(DATE_STAMP_LENGTH)
                .all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(SignerError::InvalidTimestamp(amz_date));
        }

        Ok(Self { amz_date })
    }

    pub fn amz_date(&self) -> &str {
        &self.amz_date
    }

    pub fn date_stamp(&self) -> &str {
        // length and leading digits checked in new()
        &self.amz_date[..DATE_STAMP_LENGTH]
    }
}

/// The signed output returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureResult {
    #[serde(rename = "signature")]
    pub authorization_header: String,
    #[serde(rename = "signature_input")]
    pub signed_headers: String,
    pub user_agent: String,
}
