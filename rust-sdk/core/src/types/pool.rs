//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{get_tick_at_sqrt_price, CoreError, FeeGrowth, Liquidity, PoolKey, SqrtPrice};

/// Pool state as read from the ledger. A simulation works on its own copy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pool {
    pub pool_key: PoolKey,
    pub liquidity: Liquidity,
    pub sqrt_price: SqrtPrice,
    pub current_tick_index: i32,
    pub fee_growth_global_x: FeeGrowth,
    pub fee_growth_global_y: FeeGrowth,
}

impl Pool {
    /// An empty pool at `init_sqrt_price`.
    pub fn new(pool_key: PoolKey, init_sqrt_price: SqrtPrice) -> Result<Self, CoreError> {
        let current_tick_index = get_tick_at_sqrt_price(init_sqrt_price, pool_key.fee_tier.tick_spacing)?;
        Ok(Self {
            pool_key,
            liquidity: Liquidity::default(),
            sqrt_price: init_sqrt_price,
            current_tick_index,
            fee_growth_global_x: FeeGrowth::default(),
            fee_growth_global_y: FeeGrowth::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calculate_sqrt_price, FeeTier, Percentage, SQRT_PRICE_OUT_OF_RANGE};

    fn pool_key() -> PoolKey {
        PoolKey::new("x", "y", FeeTier::new(Percentage::from(3_000_000_000), 10).unwrap()).unwrap()
    }

    #[test]
    fn test_new_pool_aligns_tick() {
        let pool = Pool::new(pool_key(), calculate_sqrt_price(-15).unwrap()).unwrap();
        assert_eq!(pool.current_tick_index, -20);
        assert!(pool.liquidity.is_zero());

        let pool = Pool::new(pool_key(), SqrtPrice::one()).unwrap();
        assert_eq!(pool.current_tick_index, 0);
    }

    #[test]
    fn test_new_pool_rejects_out_of_range_price() {
        assert_eq!(Pool::new(pool_key(), SqrtPrice::from(1)), Err(SQRT_PRICE_OUT_OF_RANGE));
    }
}
