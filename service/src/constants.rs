// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_RENDER_HOST: &str = "signature-service.example.com";

// Fallbacks used when AWS_ACCESS_KEY / AWS_SECRET_KEY are not set.
pub const PLACEHOLDER_ACCESS_KEY: &str = "your-access-key";
pub const PLACEHOLDER_SECRET_KEY: &str = "your-secret-key";

/// Route placeholder substituted into the signer's path templates.
pub const MARKETPLACE_ID_PARAM: &str = "{marketplace_id}";

/// Environment variable holding the secret key; it has no CLI flag.
pub const SECRET_KEY_ENV: &str = "AWS_SECRET_KEY";
