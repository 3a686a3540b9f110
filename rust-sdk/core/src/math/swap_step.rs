//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{
    checked_mul, div, div_up, mul_div, mul_div_up, CoreError, Liquidity, Percentage, SqrtPrice, SwapResult, TokenAmount, ADD_OVERFLOW,
    DIV_NOT_POSITIVE_DENOMINATOR, LIQUIDITY_DENOMINATOR, LIQUIDITY_SCALE, SQRT_PRICE_DENOMINATOR, SQRT_PRICE_SCALE, SUB_UNDERFLOW,
};

fn sqrt_price_denominator() -> U256 {
    U256::from(SQRT_PRICE_DENOMINATOR)
}

// 10^(SQRT_PRICE_SCALE + LIQUIDITY_SCALE)
fn sqrt_price_liquidity_denominator() -> U256 {
    U256::from(SQRT_PRICE_DENOMINATOR) * U256::from(LIQUIDITY_DENOMINATOR)
}

// 10^(SQRT_PRICE_SCALE - LIQUIDITY_SCALE)
fn liquidity_to_sqrt_price_scale() -> U256 {
    U256::from(10u8).pow((SQRT_PRICE_SCALE - LIQUIDITY_SCALE) as u32)
}

/// Calculates the amount of token x between two sqrt prices,
/// `liquidity * |a - b| / (a * b)`.
///
/// # Parameters
/// - `sqrt_price_a`, `sqrt_price_b` - The range bounds, in any order
/// - `liquidity` - The active liquidity
/// - `rounding_up` - Whether to round the amount up
pub fn get_delta_x(sqrt_price_a: SqrtPrice, sqrt_price_b: SqrtPrice, liquidity: Liquidity, rounding_up: bool) -> Result<TokenAmount, CoreError> {
    let (a, b) = (sqrt_price_a.get(), sqrt_price_b.get());
    let delta_sqrt_price = if a > b { a - b } else { b - a };
    let nominator = mul_div(delta_sqrt_price, liquidity.get(), U256::from(LIQUIDITY_DENOMINATOR))?;

    let amount = if rounding_up {
        let denominator = mul_div(a, b, sqrt_price_denominator())?;
        div_up(mul_div_up(nominator, sqrt_price_denominator(), denominator)?, sqrt_price_denominator())?
    } else {
        let denominator = mul_div_up(a, b, sqrt_price_denominator())?;
        div(mul_div(nominator, sqrt_price_denominator(), denominator)?, sqrt_price_denominator())?
    };

    Ok(TokenAmount::new(amount))
}

/// Calculates the amount of token y between two sqrt prices,
/// `liquidity * |a - b|`.
pub fn get_delta_y(sqrt_price_a: SqrtPrice, sqrt_price_b: SqrtPrice, liquidity: Liquidity, rounding_up: bool) -> Result<TokenAmount, CoreError> {
    let (a, b) = (sqrt_price_a.get(), sqrt_price_b.get());
    let delta_sqrt_price = if a > b { a - b } else { b - a };

    let amount = if rounding_up {
        mul_div_up(delta_sqrt_price, liquidity.get(), sqrt_price_liquidity_denominator())?
    } else {
        mul_div(delta_sqrt_price, liquidity.get(), sqrt_price_liquidity_denominator())?
    };

    Ok(TokenAmount::new(amount))
}

/// Solves `L / (L / P ± x)` for the next sqrt price, rounding up.
///
/// # Parameters
/// - `sqrt_price` - The starting sqrt price
/// - `liquidity` - The active liquidity
/// - `x` - The amount of token x entering (`add`) or leaving the pool
/// - `add` - Whether `x` is added to the pool
pub fn get_next_sqrt_price_x_up(sqrt_price: SqrtPrice, liquidity: Liquidity, x: TokenAmount, add: bool) -> Result<SqrtPrice, CoreError> {
    if x.is_zero() {
        return Ok(sqrt_price);
    }

    let liquidity_scaled = checked_mul(liquidity.get(), liquidity_to_sqrt_price_scale())?;
    let price_delta = checked_mul(x.get(), sqrt_price.get())?;

    let denominator = if add {
        liquidity_scaled.checked_add(price_delta).ok_or(ADD_OVERFLOW)?
    } else {
        liquidity_scaled.checked_sub(price_delta).ok_or(SUB_UNDERFLOW)?
    };

    mul_div_up(sqrt_price.get(), liquidity_scaled, denominator).map(SqrtPrice::new)
}

/// Solves `P ± y / L` for the next sqrt price, rounding down.
pub fn get_next_sqrt_price_y_down(sqrt_price: SqrtPrice, liquidity: Liquidity, y: TokenAmount, add: bool) -> Result<SqrtPrice, CoreError> {
    let next = if add {
        let quotient = mul_div(y.get(), sqrt_price_liquidity_denominator(), liquidity.get())?;
        sqrt_price.get().checked_add(quotient).ok_or(ADD_OVERFLOW)?
    } else {
        let quotient = mul_div_up(y.get(), sqrt_price_liquidity_denominator(), liquidity.get())?;
        sqrt_price.get().checked_sub(quotient).ok_or(SUB_UNDERFLOW)?
    };

    Ok(SqrtPrice::new(next))
}

/// The sqrt price reached after `amount` of the input token enters the pool.
pub fn get_next_sqrt_price_from_input(sqrt_price: SqrtPrice, liquidity: Liquidity, amount: TokenAmount, x_to_y: bool) -> Result<SqrtPrice, CoreError> {
    if x_to_y {
        get_next_sqrt_price_x_up(sqrt_price, liquidity, amount, true)
    } else {
        get_next_sqrt_price_y_down(sqrt_price, liquidity, amount, true)
    }
}

/// The sqrt price reached after `amount` of the output token leaves the pool.
pub fn get_next_sqrt_price_from_output(sqrt_price: SqrtPrice, liquidity: Liquidity, amount: TokenAmount, x_to_y: bool) -> Result<SqrtPrice, CoreError> {
    if x_to_y {
        get_next_sqrt_price_y_down(sqrt_price, liquidity, amount, false)
    } else {
        get_next_sqrt_price_x_up(sqrt_price, liquidity, amount, false)
    }
}

/// Computes one price movement from `current_sqrt_price` toward
/// `target_sqrt_price`.
///
/// The direction is x to y when the target is not above the current price.
/// The move stops early when `amount` runs out, in which case the unused
/// remainder of the amount is charged as fee for exact-input swaps.
///
/// # Parameters
/// - `current_sqrt_price` - The sqrt price before the step
/// - `target_sqrt_price` - The furthest sqrt price the step may reach
/// - `liquidity` - The active liquidity
/// - `amount` - The remaining amount, input or output per `by_amount_in`
/// - `by_amount_in` - Whether `amount` is the input amount
/// - `fee` - The swap fee rate
///
/// # Returns
/// - `SwapResult` with the reached sqrt price, amounts, and fee
pub fn compute_swap_step(
    current_sqrt_price: SqrtPrice,
    target_sqrt_price: SqrtPrice,
    liquidity: Liquidity,
    amount: TokenAmount,
    by_amount_in: bool,
    fee: Percentage,
) -> Result<SwapResult, CoreError> {
    if liquidity.is_zero() {
        return Ok(SwapResult {
            next_sqrt_price: target_sqrt_price,
            amount_in: TokenAmount::default(),
            amount_out: TokenAmount::default(),
            fee_amount: TokenAmount::default(),
        });
    }

    let x_to_y = current_sqrt_price >= target_sqrt_price;

    let amount_fixed_delta = get_amount_fixed_delta(current_sqrt_price, target_sqrt_price, liquidity, x_to_y, by_amount_in)?;

    let next_sqrt_price = if by_amount_in {
        let amount_after_fee = apply_fee(amount, fee)?;
        if amount_after_fee >= amount_fixed_delta {
            target_sqrt_price
        } else {
            get_next_sqrt_price_from_input(current_sqrt_price, liquidity, amount_after_fee, x_to_y)?
        }
    } else if amount >= amount_fixed_delta {
        target_sqrt_price
    } else {
        get_next_sqrt_price_from_output(current_sqrt_price, liquidity, amount, x_to_y)?
    };

    let is_max_swap = next_sqrt_price == target_sqrt_price;

    // If the target was not reached, the fixed side is recomputed at the reached price
    let amount_fixed_delta = if is_max_swap {
        amount_fixed_delta
    } else {
        get_amount_fixed_delta(current_sqrt_price, next_sqrt_price, liquidity, x_to_y, by_amount_in)?
    };
    let amount_unfixed_delta = get_amount_unfixed_delta(current_sqrt_price, next_sqrt_price, liquidity, x_to_y, by_amount_in)?;

    let (amount_in, mut amount_out) = if by_amount_in {
        (amount_fixed_delta, amount_unfixed_delta)
    } else {
        (amount_unfixed_delta, amount_fixed_delta)
    };

    // Cap output amount if using output
    if !by_amount_in && amount_out > amount {
        amount_out = amount;
    }

    let fee_amount = if by_amount_in && !is_max_swap {
        amount.checked_sub(amount_in)?
    } else {
        TokenAmount::new(mul_div_up(amount_in.get(), fee.get(), Percentage::one().get())?)
    };

    Ok(SwapResult {
        next_sqrt_price,
        amount_in,
        amount_out,
        fee_amount,
    })
}

/// Whether `amount` moves the price at all from `starting_sqrt_price`.
///
/// Used at an initialized tick to decide if a swap crosses it or stops on it.
pub fn is_enough_amount_to_change_price(
    amount: TokenAmount,
    starting_sqrt_price: SqrtPrice,
    liquidity: Liquidity,
    fee: Percentage,
    by_amount_in: bool,
    x_to_y: bool,
) -> Result<bool, CoreError> {
    if liquidity.is_zero() {
        return Ok(true);
    }

    let next_sqrt_price = if by_amount_in {
        let amount_after_fee = apply_fee(amount, fee)?;
        get_next_sqrt_price_from_input(starting_sqrt_price, liquidity, amount_after_fee, x_to_y)?
    } else {
        match get_next_sqrt_price_from_output(starting_sqrt_price, liquidity, amount, x_to_y) {
            Ok(next_sqrt_price) => next_sqrt_price,
            // more output requested than the liquidity holds
            Err(SUB_UNDERFLOW) | Err(DIV_NOT_POSITIVE_DENOMINATOR) => return Ok(true),
            Err(err) => return Err(err),
        }
    };

    Ok(starting_sqrt_price != next_sqrt_price)
}

// Private functions

fn apply_fee(amount: TokenAmount, fee: Percentage) -> Result<TokenAmount, CoreError> {
    let remaining_rate = Percentage::one().checked_sub(fee)?;
    mul_div(amount.get(), remaining_rate.get(), Percentage::one().get()).map(TokenAmount::new)
}

// The side the caller specified: input rounded up, output rounded down
fn get_amount_fixed_delta(
    current_sqrt_price: SqrtPrice,
    target_sqrt_price: SqrtPrice,
    liquidity: Liquidity,
    x_to_y: bool,
    by_amount_in: bool,
) -> Result<TokenAmount, CoreError> {
    if x_to_y == by_amount_in {
        get_delta_x(target_sqrt_price, current_sqrt_price, liquidity, by_amount_in)
    } else {
        get_delta_y(target_sqrt_price, current_sqrt_price, liquidity, by_amount_in)
    }
}

fn get_amount_unfixed_delta(
    current_sqrt_price: SqrtPrice,
    target_sqrt_price: SqrtPrice,
    liquidity: Liquidity,
    x_to_y: bool,
    by_amount_in: bool,
) -> Result<TokenAmount, CoreError> {
    if x_to_y == by_amount_in {
        get_delta_y(target_sqrt_price, current_sqrt_price, liquidity, !by_amount_in)
    } else {
        get_delta_x(target_sqrt_price, current_sqrt_price, liquidity, !by_amount_in)
    }
}
