//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;
use log::{debug, trace};

use crate::{
    calculate_sqrt_price, compute_swap_step, get_max_tick, get_min_tick, get_search_limit_within, get_tick_at_sqrt_price,
    is_enough_amount_to_change_price, mul_div, CoreError, FeeGrowth, FeeTier, Pool, SimulateSwapResult, SqrtPrice, SwapSimulationConfig, Tick, Tickmap,
    TokenAmount, FEE_GROWTH_DENOMINATOR, LIQUIDITY_DENOMINATOR, MAX_SQRT_PRICE, MIN_SQRT_PRICE, NO_GAIN_SWAP, WRONG_PRICE_LIMIT, ZERO_AMOUNT,
};

/// The price the next swap step may move to, and the tick behind it.
///
/// The limiting tick is the nearest initialized tick in the swap direction,
/// or the uninitialized edge of the search window when none is found. When
/// the caller's `sqrt_price_limit` is reached first there is no limiting tick.
///
/// # Returns
/// - `(sqrt_price, Some((tick_index, initialized)))` or `(sqrt_price_limit, None)`
pub fn get_closer_limit(
    sqrt_price_limit: SqrtPrice,
    x_to_y: bool,
    current_tick: i32,
    tick_spacing: u16,
    tickmap: &Tickmap,
    search_range: i32,
) -> Result<(SqrtPrice, Option<(i32, bool)>), CoreError> {
    let closest_tick = if x_to_y {
        tickmap.prev_initialized_within(current_tick, tick_spacing, search_range)
    } else {
        tickmap.next_initialized_within(current_tick, tick_spacing, search_range)
    };

    let (index, initialized) = match closest_tick {
        Some(index) => (index, true),
        None => (get_search_limit_within(current_tick, tick_spacing, !x_to_y, search_range), false),
    };

    let sqrt_price = calculate_sqrt_price(index)?;
    let is_closer = if x_to_y { sqrt_price > sqrt_price_limit } else { sqrt_price < sqrt_price_limit };

    if is_closer {
        Ok((sqrt_price, Some((index, initialized))))
    } else {
        Ok((sqrt_price_limit, None))
    }
}

/// Simulates a swap against a pool snapshot with the default search range
/// and tick cross limit.
///
/// # Parameters
/// - `tickmap` - The initialized ticks of the pool
/// - `fee_tier` - The fee tier of the pool
/// - `pool` - The pool state, left untouched
/// - `ticks` - Snapshots of the initialized ticks the swap may cross
/// - `x_to_y` - Whether token x is sold for token y
/// - `amount` - The input amount if `by_amount_in`, else the output amount
/// - `by_amount_in` - Whether `amount` is the input amount
/// - `sqrt_price_limit` - The furthest sqrt price the swap may reach
///
/// # Returns
/// - `SimulateSwapResult` with totals, crossed ticks, stop flags and the projected pool
/// - `ZERO_AMOUNT`, `WRONG_PRICE_LIMIT` or `NO_GAIN_SWAP` for unusable requests
#[allow(clippy::too_many_arguments)]
pub fn simulate_swap(
    tickmap: &Tickmap,
    fee_tier: FeeTier,
    pool: &Pool,
    ticks: &[Tick],
    x_to_y: bool,
    amount: TokenAmount,
    by_amount_in: bool,
    sqrt_price_limit: SqrtPrice,
) -> Result<SimulateSwapResult, CoreError> {
    simulate_swap_with_config(
        tickmap,
        fee_tier,
        pool,
        ticks,
        x_to_y,
        amount,
        by_amount_in,
        sqrt_price_limit,
        SwapSimulationConfig::default(),
    )
}

#[allow(clippy::too_many_arguments)]
pub fn simulate_swap_with_config(
    tickmap: &Tickmap,
    fee_tier: FeeTier,
    pool: &Pool,
    ticks: &[Tick],
    x_to_y: bool,
    amount: TokenAmount,
    by_amount_in: bool,
    sqrt_price_limit: SqrtPrice,
    config: SwapSimulationConfig,
) -> Result<SimulateSwapResult, CoreError> {
    if amount.is_zero() {
        return Err(ZERO_AMOUNT);
    }

    let is_limit_valid = if x_to_y {
        pool.sqrt_price > sqrt_price_limit && sqrt_price_limit >= SqrtPrice::from(MIN_SQRT_PRICE)
    } else {
        pool.sqrt_price < sqrt_price_limit && sqrt_price_limit <= SqrtPrice::from(MAX_SQRT_PRICE)
    };
    if !is_limit_valid {
        return Err(WRONG_PRICE_LIMIT);
    }

    let tick_spacing = fee_tier.tick_spacing;
    let tick_limit = if x_to_y { get_min_tick(tick_spacing) } else { get_max_tick(tick_spacing) };

    let mut pool = pool.clone();
    let start_sqrt_price = pool.sqrt_price;
    let mut remaining_amount = amount;
    let mut total_amount_in = TokenAmount::default();
    let mut total_amount_out = TokenAmount::default();
    let mut total_fee = TokenAmount::default();
    let mut crossed_ticks: Vec<Tick> = Vec::new();
    let mut insufficient_liquidity = false;
    let mut state_outdated = false;
    let mut max_ticks_crossed = false;

    while !remaining_amount.is_zero() {
        let (swap_limit, limiting_tick) =
            get_closer_limit(sqrt_price_limit, x_to_y, pool.current_tick_index, tick_spacing, tickmap, config.search_range)?;

        // a tick outside the usable range clamps the search limit behind the price
        let is_behind = if x_to_y { swap_limit > pool.sqrt_price } else { swap_limit < pool.sqrt_price };
        if is_behind {
            debug!(target: "log", "Tick {} is past the usable tick range", pool.current_tick_index);
            insufficient_liquidity = true;
            break;
        }

        let result = compute_swap_step(pool.sqrt_price, swap_limit, pool.liquidity, remaining_amount, by_amount_in, fee_tier.fee)?;

        let consumed = if by_amount_in {
            result.amount_in.checked_add(result.fee_amount)?
        } else {
            result.amount_out
        };
        remaining_amount = remaining_amount.checked_sub(consumed)?;

        total_fee = total_fee.checked_add(result.fee_amount)?;
        total_amount_in = total_amount_in.checked_add(result.amount_in)?.checked_add(result.fee_amount)?;
        total_amount_out = total_amount_out.checked_add(result.amount_out)?;

        add_fee_growth(&mut pool, result.fee_amount, x_to_y)?;
        pool.sqrt_price = result.next_sqrt_price;

        trace!(
            target: "log",
            "swap step to {}: in {}, out {}, fee {}, remaining {}",
            result.next_sqrt_price,
            result.amount_in,
            result.amount_out,
            result.fee_amount,
            remaining_amount
        );

        if pool.sqrt_price == sqrt_price_limit && !remaining_amount.is_zero() {
            debug!(target: "log", "Swap reached the price limit {} with {} left", sqrt_price_limit, remaining_amount);
            insufficient_liquidity = true;
            break;
        }

        match limiting_tick {
            Some((tick_index, initialized)) if result.next_sqrt_price == swap_limit => {
                let is_enough_amount_to_cross =
                    is_enough_amount_to_change_price(remaining_amount, result.next_sqrt_price, pool.liquidity, fee_tier.fee, by_amount_in, x_to_y)?;

                if initialized {
                    let Some(tick) = ticks.iter().find(|tick| tick.index == tick_index) else {
                        debug!(target: "log", "Tick {} is initialized in the tickmap but missing from the snapshot", tick_index);
                        state_outdated = true;
                        break;
                    };

                    if !x_to_y || is_enough_amount_to_cross {
                        cross_tick(&mut pool, tick)?;
                        crossed_ticks.push(*tick);
                    } else if !remaining_amount.is_zero() {
                        // too little left to move past the tick, keep it as fee
                        if by_amount_in {
                            total_amount_in = total_amount_in.checked_add(remaining_amount)?;
                            total_fee = total_fee.checked_add(remaining_amount)?;
                        }
                        remaining_amount = TokenAmount::default();
                    }
                }

                pool.current_tick_index = if x_to_y && is_enough_amount_to_cross {
                    tick_index - tick_spacing as i32
                } else {
                    tick_index
                };

                if !initialized && !remaining_amount.is_zero() {
                    debug!(target: "log", "No initialized tick within the search range of {}", tick_index);
                    insufficient_liquidity = true;
                    break;
                }
            }
            _ => {
                pool.current_tick_index = get_tick_at_sqrt_price(result.next_sqrt_price, tick_spacing)?;
            }
        }

        if crossed_ticks.len() > config.max_tick_cross {
            debug!(target: "log", "Swap crossed {} ticks", crossed_ticks.len());
            max_ticks_crossed = true;
            break;
        }

        let is_at_bound = if x_to_y {
            pool.current_tick_index <= tick_limit
        } else {
            pool.current_tick_index >= tick_limit
        };
        if !remaining_amount.is_zero() && is_at_bound {
            debug!(target: "log", "Swap reached the tick bound {}", tick_limit);
            insufficient_liquidity = true;
            break;
        }
    }

    if total_amount_out.is_zero() {
        return Err(NO_GAIN_SWAP);
    }

    Ok(SimulateSwapResult {
        amount_in: total_amount_in,
        amount_out: total_amount_out,
        start_sqrt_price,
        target_sqrt_price: pool.sqrt_price,
        fee: total_fee,
        crossed_ticks,
        insufficient_liquidity,
        state_outdated,
        max_ticks_crossed,
        pool,
    })
}

// Private functions

fn add_fee_growth(pool: &mut Pool, fee_amount: TokenAmount, x_to_y: bool) -> Result<(), CoreError> {
    if pool.liquidity.is_zero() {
        return Ok(());
    }
    let denominator = U256::from(FEE_GROWTH_DENOMINATOR) * U256::from(LIQUIDITY_DENOMINATOR);
    let growth = mul_div(fee_amount.get(), denominator, pool.liquidity.get())?;

    // fee growth is a wrapping accumulator
    let fee_growth = if x_to_y {
        &mut pool.fee_growth_global_x
    } else {
        &mut pool.fee_growth_global_y
    };
    *fee_growth = FeeGrowth::new(fee_growth.get().wrapping_add(growth));
    Ok(())
}

fn cross_tick(pool: &mut Pool, tick: &Tick) -> Result<(), CoreError> {
    let is_below_current = pool.current_tick_index >= tick.index;
    pool.liquidity = if is_below_current ^ tick.sign {
        pool.liquidity.checked_add(tick.liquidity_change)?
    } else {
        pool.liquidity.checked_sub(tick.liquidity_change)?
    };
    Ok(())
}
