//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::collections::BTreeMap;

use log::debug;

use crate::{simulate_swap, CoreError, Pool, PoolKey, SimulateSwapResult, SqrtPrice, Tick, Tickmap, TokenAmount, MAX_TICK_CROSS, POOL_NOT_FOUND};

/// Read access to ledger state for one pool at a time.
///
/// `fetch_ticks` returns the snapshots it has for `indices` and skips the
/// rest; a skipped tick that the tickmap reports as initialized surfaces as
/// `state_outdated` in the simulation result.
pub trait PoolSnapshotSource {
    fn fetch_pool(&self, pool_key: &PoolKey) -> Result<Pool, CoreError>;
    fn fetch_tickmap(&self, pool_key: &PoolKey) -> Result<Tickmap, CoreError>;
    fn fetch_ticks(&self, pool_key: &PoolKey, indices: &[i32]) -> Result<Vec<Tick>, CoreError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PoolSnapshot {
    pool: Pool,
    tickmap: Tickmap,
    ticks: BTreeMap<i32, Tick>,
}

/// A `PoolSnapshotSource` held in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemorySnapshotSource {
    pools: BTreeMap<PoolKey, PoolSnapshot>,
}

impl InMemorySnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `pool` with the given tickmap and tick snapshots, replacing any
    /// previous state for its key. The tickmap is taken as is.
    pub fn insert_pool(&mut self, pool: Pool, tickmap: Tickmap, ticks: impl IntoIterator<Item = Tick>) {
        let snapshot = PoolSnapshot {
            pool,
            tickmap,
            ticks: ticks.into_iter().map(|tick| (tick.index, tick)).collect(),
        };
        self.pools.insert(snapshot.pool.pool_key.clone(), snapshot);
    }

    /// Stores a tick snapshot and marks it initialized in the tickmap.
    pub fn insert_tick(&mut self, pool_key: &PoolKey, tick: Tick) -> Result<(), CoreError> {
        let snapshot = self.pools.get_mut(pool_key).ok_or(POOL_NOT_FOUND)?;
        if !snapshot.tickmap.get(tick.index, pool_key.fee_tier.tick_spacing)? {
            snapshot.tickmap.flip(tick.index, pool_key.fee_tier.tick_spacing)?;
        }
        snapshot.ticks.insert(tick.index, tick);
        Ok(())
    }

    fn snapshot(&self, pool_key: &PoolKey) -> Result<&PoolSnapshot, CoreError> {
        self.pools.get(pool_key).ok_or(POOL_NOT_FOUND)
    }
}

impl PoolSnapshotSource for InMemorySnapshotSource {
    fn fetch_pool(&self, pool_key: &PoolKey) -> Result<Pool, CoreError> {
        Ok(self.snapshot(pool_key)?.pool.clone())
    }

    fn fetch_tickmap(&self, pool_key: &PoolKey) -> Result<Tickmap, CoreError> {
        Ok(self.snapshot(pool_key)?.tickmap.clone())
    }

    fn fetch_ticks(&self, pool_key: &PoolKey, indices: &[i32]) -> Result<Vec<Tick>, CoreError> {
        let snapshot = self.snapshot(pool_key)?;
        Ok(indices.iter().filter_map(|index| snapshot.ticks.get(index).copied()).collect())
    }
}

/// Quotes a swap on the pool behind `pool_key` from a fresh snapshot.
///
/// Only the ticks the swap can reach are fetched, at most one more than
/// `MAX_TICK_CROSS`.
pub fn quote_swap<S: PoolSnapshotSource>(
    source: &S,
    pool_key: &PoolKey,
    x_to_y: bool,
    amount: TokenAmount,
    by_amount_in: bool,
    sqrt_price_limit: SqrtPrice,
) -> Result<SimulateSwapResult, CoreError> {
    let pool = source.fetch_pool(pool_key)?;
    let tickmap = source.fetch_tickmap(pool_key)?;
    let tick_spacing = pool_key.fee_tier.tick_spacing;

    let indices = tickmap.initialized_ticks_in_direction(pool.current_tick_index, tick_spacing, x_to_y, MAX_TICK_CROSS + 1);
    debug!(target: "log", "Fetching {} tick snapshots for {}/{}", indices.len(), pool_key.token_x, pool_key.token_y);
    let ticks = source.fetch_ticks(pool_key, &indices)?;

    simulate_swap(&tickmap, pool_key.fee_tier, &pool, &ticks, x_to_y, amount, by_amount_in, sqrt_price_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeeTier, Liquidity, Percentage, MIN_SQRT_PRICE};

    fn pool_key() -> PoolKey {
        PoolKey::new("token_x", "token_y", FeeTier::new(Percentage::from(6_000_000_000), 10).unwrap()).unwrap()
    }

    fn source_with_range(liquidity: u128) -> InMemorySnapshotSource {
        let liquidity = Liquidity::from_integer(liquidity);
        let pool = Pool {
            liquidity,
            ..Pool::new(pool_key(), SqrtPrice::one()).unwrap()
        };
        let mut source = InMemorySnapshotSource::new();
        source.insert_pool(pool, Tickmap::new(), []);
        source.insert_tick(&pool_key(), Tick::new(-10, true, liquidity, liquidity).unwrap()).unwrap();
        source.insert_tick(&pool_key(), Tick::new(10, false, liquidity, liquidity).unwrap()).unwrap();
        source
    }

    #[test]
    fn test_fetch_ticks_skips_unknown() {
        let source = source_with_range(1_000_000);
        let ticks = source.fetch_ticks(&pool_key(), &[-10, 0, 10]).unwrap();
        assert_eq!(ticks.iter().map(|tick| tick.index).collect::<Vec<_>>(), vec![-10, 10]);
        assert_eq!(source.fetch_tickmap(&pool_key()).unwrap().get(10, 10), Ok(true));
    }

    #[test]
    fn test_unknown_pool() {
        let source = InMemorySnapshotSource::new();
        assert_eq!(source.fetch_pool(&pool_key()), Err(POOL_NOT_FOUND));
        let mut source = source;
        let tick = Tick::new(10, false, Liquidity::default(), Liquidity::default()).unwrap();
        assert_eq!(source.insert_tick(&pool_key(), tick), Err(POOL_NOT_FOUND));
    }

    #[test]
    fn test_quote_swap_matches_simulation() {
        let source = source_with_range(1_000_000);
        let result = quote_swap(&source, &pool_key(), true, TokenAmount::from(1_000_000), true, SqrtPrice::from(MIN_SQRT_PRICE)).unwrap();
        assert_eq!(result.amount_in, TokenAmount::from(505));
        assert_eq!(result.amount_out, TokenAmount::from(499));
        assert_eq!(result.crossed_ticks.len(), 1);
        assert!(result.insufficient_liquidity);
        assert!(!result.state_outdated);
    }
}
