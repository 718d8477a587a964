// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

/// Errors raised while signing. Variants never carry key material.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    #[error("timestamp cannot be rendered as an amz date: {0}")]
    InvalidTimestamp(String),
}
