//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{calculate_sqrt_price, CoreError, FeeGrowth, Liquidity, SqrtPrice};

/// Snapshot of an initialized tick.
///
/// `sign` is true when crossing the tick upward adds `liquidity_change` to
/// the pool; crossing downward applies the opposite.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    pub index: i32,
    pub sign: bool,
    pub liquidity_change: Liquidity,
    pub liquidity_gross: Liquidity,
    pub sqrt_price: SqrtPrice,
    pub fee_growth_outside_x: FeeGrowth,
    pub fee_growth_outside_y: FeeGrowth,
}

impl Tick {
    pub fn new(index: i32, sign: bool, liquidity_change: Liquidity, liquidity_gross: Liquidity) -> Result<Self, CoreError> {
        Ok(Self {
            index,
            sign,
            liquidity_change,
            liquidity_gross,
            sqrt_price: calculate_sqrt_price(index)?,
            fee_growth_outside_x: FeeGrowth::default(),
            fee_growth_outside_y: FeeGrowth::default(),
        })
    }
}
