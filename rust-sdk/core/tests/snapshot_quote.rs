//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

//! End-to-end quoting through `InMemorySnapshotSource`.

use clamm_core::{
    calculate_sqrt_price, get_delta_x, get_delta_y, quote_swap, simulate_swap, FeeTier, InMemorySnapshotSource, Liquidity, Percentage, Pool,
    PoolKey, PoolSnapshotSource, SimulateSwapResult, SqrtPrice, Tick, Tickmap, TokenAmount, MAX_SQRT_PRICE, MAX_TICK_CROSS, MIN_SQRT_PRICE,
    NO_GAIN_SWAP,
};
use proptest::prelude::*;

const LIQUIDITY: u128 = 10_000_000_000;

fn pool_key() -> PoolKey {
    PoolKey::new("token_y", "token_x", FeeTier::new(Percentage::from(6_000_000_000), 10).unwrap()).unwrap()
}

/// Two overlapping positions, [-10, 10] and [-100, 100], with equal liquidity.
fn two_range_source() -> InMemorySnapshotSource {
    let liquidity = Liquidity::from_integer(LIQUIDITY);
    let pool = Pool {
        liquidity: Liquidity::from_integer(2 * LIQUIDITY),
        ..Pool::new(pool_key(), SqrtPrice::one()).unwrap()
    };

    let mut source = InMemorySnapshotSource::new();
    source.insert_pool(pool, Tickmap::new(), []);
    for (index, sign) in [(-100, true), (-10, true), (10, false), (100, false)] {
        let tick = Tick::new(index, sign, liquidity, liquidity).unwrap();
        source.insert_tick(&pool_key(), tick).unwrap();
    }
    source
}

mod strategies {
    use super::*;

    pub fn amount() -> impl Strategy<Value = u128> {
        1..1_000_000_000u128
    }
}

#[test]
fn test_pool_key_is_canonical() {
    let key = pool_key();
    assert_eq!(key.token_x, "token_x");
    assert_eq!(key.token_y, "token_y");
}

#[test]
fn test_quote_crosses_inner_range() {
    let source = two_range_source();
    let result = quote_swap(&source, &pool_key(), true, TokenAmount::from(20_000_000), true, SqrtPrice::from(MIN_SQRT_PRICE)).unwrap();

    assert_eq!(result.amount_in, TokenAmount::from(20000000));
    assert_eq!(result.amount_out, TokenAmount::from(19855751));
    assert_eq!(result.fee, TokenAmount::from(119641));
    assert_eq!(result.target_sqrt_price, SqrtPrice::from(998514274853641589569359));
    assert_eq!(result.crossed_ticks.iter().map(|tick| tick.index).collect::<Vec<_>>(), vec![-10]);
    assert_eq!(result.pool.current_tick_index, -30);
    assert_eq!(result.pool.liquidity, Liquidity::from_integer(LIQUIDITY));
}

#[test]
fn test_quote_matches_simulation_over_full_snapshot() {
    let source = two_range_source();
    let key = pool_key();
    let pool = source.fetch_pool(&key).unwrap();
    let tickmap = source.fetch_tickmap(&key).unwrap();
    let ticks = source.fetch_ticks(&key, &[-100, -10, 10, 100]).unwrap();

    for (x_to_y, limit) in [(true, MIN_SQRT_PRICE), (false, MAX_SQRT_PRICE)] {
        let quoted = quote_swap(&source, &key, x_to_y, TokenAmount::from(10_000_000), false, SqrtPrice::from(limit)).unwrap();
        let simulated = simulate_swap(&tickmap, key.fee_tier, &pool, &ticks, x_to_y, TokenAmount::from(10_000_000), false, SqrtPrice::from(limit)).unwrap();
        assert_eq!(quoted, simulated);
    }
}

#[test]
fn test_quote_reports_stale_snapshot() {
    let source = two_range_source();
    let key = pool_key();

    // tickmap knows about -10 but the snapshot for it is gone
    let mut stale = InMemorySnapshotSource::new();
    let ticks = source.fetch_ticks(&key, &[-100, 10, 100]).unwrap();
    stale.insert_pool(source.fetch_pool(&key).unwrap(), source.fetch_tickmap(&key).unwrap(), ticks);

    let result = quote_swap(&stale, &key, true, TokenAmount::from(20_000_000), true, SqrtPrice::from(MIN_SQRT_PRICE)).unwrap();
    assert!(result.state_outdated);
    assert!(!result.insufficient_liquidity);
    assert!(result.crossed_ticks.is_empty());
    assert_eq!(result.amount_in, TokenAmount::from(10062014));
    assert_eq!(result.amount_out, TokenAmount::from(9997000));
    assert_eq!(result.fee, TokenAmount::from(60013));
    assert_eq!(result.target_sqrt_price, SqrtPrice::from(999500149965000000000000));
    assert_eq!(result.pool.current_tick_index, 0);
}

// Output the traversed price range can hold, segment by segment between crossed ticks
fn liquidity_implied_output(pool: &Pool, result: &SimulateSwapResult, x_to_y: bool) -> TokenAmount {
    let delta = |from: SqrtPrice, to: SqrtPrice, liquidity: Liquidity| {
        if x_to_y {
            get_delta_y(from, to, liquidity, true).unwrap()
        } else {
            get_delta_x(from, to, liquidity, true).unwrap()
        }
    };

    let mut liquidity = pool.liquidity;
    let mut from = result.start_sqrt_price;
    let mut total = TokenAmount::default();
    for tick in &result.crossed_ticks {
        let to = calculate_sqrt_price(tick.index).unwrap();
        total = total.checked_add(delta(from, to, liquidity)).unwrap();
        liquidity = if x_to_y == tick.sign {
            liquidity.checked_sub(tick.liquidity_change).unwrap()
        } else {
            liquidity.checked_add(tick.liquidity_change).unwrap()
        };
        from = to;
    }
    total.checked_add(delta(from, result.target_sqrt_price, liquidity)).unwrap()
}

proptest! {
    #[test]
    fn test_exact_output_is_bounded(amount in strategies::amount(), x_to_y in any::<bool>()) {
        let source = two_range_source();
        let limit = if x_to_y { MIN_SQRT_PRICE } else { MAX_SQRT_PRICE };

        match quote_swap(&source, &pool_key(), x_to_y, TokenAmount::from(amount), false, SqrtPrice::from(limit)) {
            Ok(result) => {
                prop_assert!(result.amount_out <= TokenAmount::from(amount));
                prop_assert!(result.crossed_ticks.len() <= MAX_TICK_CROSS + 1);
                prop_assert!(result.fee <= result.amount_in);
            }
            Err(err) => prop_assert_eq!(err, NO_GAIN_SWAP),
        }
    }

    #[test]
    fn test_output_within_traversed_liquidity(amount in strategies::amount(), x_to_y in any::<bool>(), by_amount_in in any::<bool>()) {
        let source = two_range_source();
        let pool = source.fetch_pool(&pool_key()).unwrap();
        let limit = if x_to_y { MIN_SQRT_PRICE } else { MAX_SQRT_PRICE };

        match quote_swap(&source, &pool_key(), x_to_y, TokenAmount::from(amount), by_amount_in, SqrtPrice::from(limit)) {
            Ok(result) => {
                prop_assert!(result.amount_out <= liquidity_implied_output(&pool, &result, x_to_y));
                if x_to_y {
                    prop_assert!(result.target_sqrt_price < result.start_sqrt_price);
                } else {
                    prop_assert!(result.target_sqrt_price > result.start_sqrt_price);
                }
            }
            Err(err) => prop_assert_eq!(err, NO_GAIN_SWAP),
        }
    }

    #[test]
    fn test_simulation_is_deterministic(amount in strategies::amount(), x_to_y in any::<bool>(), by_amount_in in any::<bool>()) {
        let source = two_range_source();
        let limit = if x_to_y { MIN_SQRT_PRICE } else { MAX_SQRT_PRICE };
        let first = quote_swap(&source, &pool_key(), x_to_y, TokenAmount::from(amount), by_amount_in, SqrtPrice::from(limit));
        let second = quote_swap(&source, &pool_key(), x_to_y, TokenAmount::from(amount), by_amount_in, SqrtPrice::from(limit));
        prop_assert_eq!(first, second);
    }
}
