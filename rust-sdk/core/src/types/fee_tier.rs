//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{CoreError, Percentage, INVALID_FEE, INVALID_TICK_SPACING, TOKENS_ARE_SAME};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeTier {
    pub fee: Percentage,
    pub tick_spacing: u16,
}

impl FeeTier {
    pub fn new(fee: Percentage, tick_spacing: u16) -> Result<Self, CoreError> {
        if tick_spacing == 0 {
            return Err(INVALID_TICK_SPACING);
        }
        if fee > Percentage::one() {
            return Err(INVALID_FEE);
        }
        Ok(Self { fee, tick_spacing })
    }
}

/// Identifies a pool. `token_x` is always the smaller token identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolKey {
    pub token_x: String,
    pub token_y: String,
    pub fee_tier: FeeTier,
}

impl PoolKey {
    pub fn new(token_0: impl Into<String>, token_1: impl Into<String>, fee_tier: FeeTier) -> Result<Self, CoreError> {
        let (token_0, token_1) = (token_0.into(), token_1.into());
        let (token_x, token_y) = if is_token_x(&token_0, &token_1)? {
            (token_0, token_1)
        } else {
            (token_1, token_0)
        };
        Ok(Self { token_x, token_y, fee_tier })
    }
}

/// Whether `candidate` is token x of a pair with `other`.
pub fn is_token_x(candidate: &str, other: &str) -> Result<bool, CoreError> {
    if candidate == other {
        return Err(TOKENS_ARE_SAME);
    }
    Ok(candidate < other)
}
