//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{
    rescale, CoreError, FixedPoint, SqrtPrice, FIXED_POINT_SCALE, GLOBAL_MAX_TICK, INVALID_TICK_SPACING, MAX_SQRT_PRICE, MIN_SQRT_PRICE,
    SQRT_PRICE_DENOMINATOR, SQRT_PRICE_OUT_OF_RANGE, SQRT_PRICE_SCALE, TICK_OVER_BOUNDS, TICK_PRICE_MULTIPLIERS,
};

const LOG2_SCALE: u32 = 32;
const LOG2_DOUBLE_SCALE: u32 = 64;
const LOG2_ONE: u128 = 1 << LOG2_SCALE;
const LOG2_HALF: u64 = (LOG2_ONE >> 1) as u64;
const LOG2_TWO: u128 = LOG2_ONE << 1;
const LOG2_DOUBLE_ONE: u128 = 1 << LOG2_DOUBLE_SCALE;
// log2(sqrt(1.0001)) in X32
const LOG2_SQRT_10001: u64 = 309801;
// max error of the approximation below zero
const LOG2_NEGATIVE_MAX_LOSE: u64 = 300000;
const LOG2_MIN_BINARY_POSITION: u32 = 15;
const LOG2_ACCURACY: u64 = 1u64 << (31 - LOG2_MIN_BINARY_POSITION);

/// Converts a tick index to a sqrt price.
///
/// Multiplies together the precomputed `sqrt(1.0001)^(2^k)` factors for each
/// set bit of `|tick_index|`, inverts for negative ticks, and rescales the
/// fixed point result to the sqrt price scale.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the tick integer
///
/// # Returns
/// - The sqrt price, or `TICK_OVER_BOUNDS` if `|tick_index| > GLOBAL_MAX_TICK`
pub fn calculate_sqrt_price(tick_index: i32) -> Result<SqrtPrice, CoreError> {
    let tick = tick_index.unsigned_abs();
    if tick > GLOBAL_MAX_TICK as u32 {
        return Err(TICK_OVER_BOUNDS);
    }

    let one = FixedPoint::one().get();
    let mut price = one;
    for (bit, multiplier) in TICK_PRICE_MULTIPLIERS.iter().enumerate() {
        if tick & (1 << bit) != 0 {
            price = price * U256::from(*multiplier) / one;
        }
    }

    if tick_index < 0 {
        price = (one * one) / price;
    }

    rescale(price, FIXED_POINT_SCALE, SQRT_PRICE_SCALE).map(SqrtPrice::new)
}

/// Converts a sqrt price to the tick whose price is the greatest one not
/// above it, aligned down to `tick_spacing`.
///
/// An X32 log2 approximation narrows the answer to two adjacent ticks and
/// `calculate_sqrt_price` decides between them exactly.
///
/// # Parameters
/// - `sqrt_price` - The sqrt price
/// - `tick_spacing` - The tick spacing to align the result to
///
/// # Returns
/// - The tick index, or `SQRT_PRICE_OUT_OF_RANGE` if the price is outside
///   `[MIN_SQRT_PRICE, MAX_SQRT_PRICE]`
pub fn get_tick_at_sqrt_price(sqrt_price: SqrtPrice, tick_spacing: u16) -> Result<i32, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    if sqrt_price.get() > U256::from(MAX_SQRT_PRICE) || sqrt_price.get() < U256::from(MIN_SQRT_PRICE) {
        return Err(SQRT_PRICE_OUT_OF_RANGE);
    }
    let tick_spacing = tick_spacing as i32;

    let sqrt_price_x32 = sqrt_price_to_x32(sqrt_price);
    let (log2_sign, log2_sqrt_price) = log2_iterative_approximation_x32(sqrt_price_x32);

    let abs_floor_tick = if log2_sign {
        log2_sqrt_price / LOG2_SQRT_10001
    } else {
        (log2_sqrt_price + LOG2_NEGATIVE_MAX_LOSE) / LOG2_SQRT_10001
    } as i32;

    let (nearer_tick, farther_tick) = if log2_sign {
        (abs_floor_tick, abs_floor_tick + 1)
    } else {
        (-abs_floor_tick, -abs_floor_tick - 1)
    };
    let nearer_tick_with_spacing = align_tick_to_spacing(nearer_tick, tick_spacing);
    let farther_tick_with_spacing = align_tick_to_spacing(farther_tick, tick_spacing);
    if nearer_tick_with_spacing == farther_tick_with_spacing {
        return Ok(nearer_tick_with_spacing);
    }

    let accurate_tick = if log2_sign {
        if sqrt_price >= calculate_sqrt_price(farther_tick)? {
            farther_tick_with_spacing
        } else {
            nearer_tick_with_spacing
        }
    } else if calculate_sqrt_price(nearer_tick)? <= sqrt_price {
        nearer_tick_with_spacing
    } else {
        farther_tick_with_spacing
    };

    Ok(if tick_spacing > 1 {
        align_tick_to_spacing(accurate_tick, tick_spacing)
    } else {
        accurate_tick
    })
}

/// Aligns a tick down to a multiple of `tick_spacing`, toward negative
/// infinity.
pub fn align_tick_to_spacing(accurate_tick: i32, tick_spacing: i32) -> i32 {
    if accurate_tick > 0 {
        accurate_tick - (accurate_tick % tick_spacing)
    } else {
        accurate_tick - accurate_tick.rem_euclid(tick_spacing)
    }
}

/// The greatest tick usable with `tick_spacing`.
pub fn get_max_tick(tick_spacing: u16) -> i32 {
    let tick_spacing = tick_spacing.max(1) as i32;
    GLOBAL_MAX_TICK / tick_spacing * tick_spacing
}

/// The smallest tick usable with `tick_spacing`.
pub fn get_min_tick(tick_spacing: u16) -> i32 {
    -get_max_tick(tick_spacing)
}

pub fn get_max_sqrt_price(tick_spacing: u16) -> Result<SqrtPrice, CoreError> {
    calculate_sqrt_price(get_max_tick(tick_spacing))
}

pub fn get_min_sqrt_price(tick_spacing: u16) -> Result<SqrtPrice, CoreError> {
    calculate_sqrt_price(get_min_tick(tick_spacing))
}

// Private functions

fn sqrt_price_to_x32(sqrt_price: SqrtPrice) -> u64 {
    // bounded by MAX_SQRT_PRICE * 2^32 / 10^24 < 2^48
    (sqrt_price.get() * U256::from(LOG2_ONE) / U256::from(SQRT_PRICE_DENOMINATOR)).as_u64()
}

fn log2_floor_x32(mut sqrt_price_x32: u64) -> u64 {
    let mut msb = 0;

    for shift in [32, 16, 8, 4, 2] {
        if sqrt_price_x32 >= 1u64 << shift {
            sqrt_price_x32 >>= shift;
            msb |= shift;
        }
    }
    if sqrt_price_x32 >= 2 {
        msb |= 1;
    }

    msb
}

// Returns (sign, |log2(x)|) in X32, sign is false for x < 1
fn log2_iterative_approximation_x32(mut sqrt_price_x32: u64) -> (bool, u64) {
    let mut sign = true;
    // log2(x) = -log2(1/x), when x < 1
    if (sqrt_price_x32 as u128) < LOG2_ONE {
        sign = false;
        sqrt_price_x32 = (LOG2_DOUBLE_ONE / (sqrt_price_x32 as u128 + 1)) as u64;
    }
    let log2_floor = log2_floor_x32(sqrt_price_x32 >> LOG2_SCALE);
    let mut result = log2_floor << LOG2_SCALE;
    let mut y: u128 = (sqrt_price_x32 as u128) >> log2_floor;

    if y == LOG2_ONE {
        return (sign, result);
    }

    let mut delta: u64 = LOG2_HALF;
    while delta > LOG2_ACCURACY {
        y = y * y / LOG2_ONE;
        if y >= LOG2_TWO {
            result |= delta;
            y >>= 1;
        }
        delta >>= 1;
    }

    (sign, result)
}
