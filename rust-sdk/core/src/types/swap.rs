//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{Pool, SqrtPrice, Tick, TokenAmount};

/// Outcome of a single swap step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapResult {
    pub next_sqrt_price: SqrtPrice,
    pub amount_in: TokenAmount,
    pub amount_out: TokenAmount,
    pub fee_amount: TokenAmount,
}

/// Outcome of a simulated swap.
///
/// `amount_in` includes `fee`. The three flags report why a swap stopped
/// early; when all are false the requested amount was fully used.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulateSwapResult {
    pub amount_in: TokenAmount,
    pub amount_out: TokenAmount,
    pub start_sqrt_price: SqrtPrice,
    pub target_sqrt_price: SqrtPrice,
    pub fee: TokenAmount,
    pub crossed_ticks: Vec<Tick>,
    pub insufficient_liquidity: bool,
    pub state_outdated: bool,
    pub max_ticks_crossed: bool,
    /// The pool as it would be after the swap.
    pub pool: Pool,
}
