// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

/// Offer identifier embedded in both the accept and challenge path templates.
pub const OFFER_ID: &str = "357f7bab-25ed-4fdb-a8e5-a7b3a9f97411";

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const REGION: &str = "us-east-1";
pub const SERVICE: &str = "execute-api";
pub const SCOPE_TERMINATOR: &str = "aws4_request";
pub const SIGNED_HEADERS: &str = "host;x-amz-date";
pub const METHOD: &str = "GET";

/// strftime pattern for the `x-amz-date` header, e.g. `20240115T120000Z`
pub const AMZ_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";
pub const AMZ_DATE_LENGTH: usize = 16;
pub const DATE_STAMP_LENGTH: usize = 8;

pub const USER_AGENT_PREFIX: &str = "AmazonFlex/1.0 (Android;";
