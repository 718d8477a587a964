// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use crate::constants::USER_AGENT_PREFIX;

/// Synthetic client user agent, `AmazonFlex/1.0 (Android; a.b.c)`.
///
/// `a` is drawn from 1..=9, `b` and `c` from 0..=9. Not cryptographic; pass a
/// seeded `Rng` for reproducible output.
pub fn user_agent(rng: &mut fastrand::Rng) -> String {
    let major = rng.u8(1..=9);
    let minor = rng.u8(..=9);
    let patch = rng.u8(..=9);
    format!("{USER_AGENT_PREFIX} {major}.{minor}.{patch})")
}
