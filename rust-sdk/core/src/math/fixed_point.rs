//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{mul_u512, CoreError, CAST_OVERFLOW, DIV_NOT_POSITIVE_DENOMINATOR, DIV_NOT_POSITIVE_DIVISOR, MUL_OVERFLOW};

/// Computes `a * b / denominator`, truncating.
///
/// The product is held at full 512-bit width, so only a quotient that does
/// not fit in 256 bits is an error.
///
/// # Parameters
/// - `a`, `b` - The factors
/// - `denominator` - The divisor, must be positive
///
/// # Returns
/// - The truncated quotient, `DIV_NOT_POSITIVE_DENOMINATOR` or `CAST_OVERFLOW`
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, CoreError> {
    if denominator == U256::ZERO {
        return Err(DIV_NOT_POSITIVE_DENOMINATOR);
    }
    let (quotient, _) = mul_u512(a, b).checked_div_rem(denominator).ok_or(CAST_OVERFLOW)?;
    Ok(quotient)
}

/// Computes `a * b / denominator`, rounding up.
pub fn mul_div_up(a: U256, b: U256, denominator: U256) -> Result<U256, CoreError> {
    if denominator == U256::ZERO {
        return Err(DIV_NOT_POSITIVE_DENOMINATOR);
    }
    let (quotient, remainder) = mul_u512(a, b).checked_div_rem(denominator).ok_or(CAST_OVERFLOW)?;
    if remainder == U256::ZERO {
        Ok(quotient)
    } else {
        quotient.checked_add(U256::ONE).ok_or(CAST_OVERFLOW)
    }
}

pub fn div(a: U256, b: U256) -> Result<U256, CoreError> {
    a.checked_div(b).ok_or(DIV_NOT_POSITIVE_DIVISOR)
}

pub fn div_up(a: U256, b: U256) -> Result<U256, CoreError> {
    if b == U256::ZERO {
        return Err(DIV_NOT_POSITIVE_DIVISOR);
    }
    let quotient = a / b;
    if a % b == U256::ZERO {
        Ok(quotient)
    } else {
        Ok(quotient + U256::ONE)
    }
}

pub fn checked_mul(a: U256, b: U256) -> Result<U256, CoreError> {
    a.checked_mul(b).ok_or(MUL_OVERFLOW)
}

pub fn pow10(exponent: u8) -> Result<U256, CoreError> {
    U256::from(10u8).checked_pow(exponent as u32).ok_or(CAST_OVERFLOW)
}

/// Moves `value` from `from_scale` decimal places to `to_scale`.
///
/// Enlarging multiplies by `10^(to - from)` and fails on overflow; shrinking
/// divides and truncates.
pub fn rescale(value: U256, from_scale: u8, to_scale: u8) -> Result<U256, CoreError> {
    if to_scale >= from_scale {
        value.checked_mul(pow10(to_scale - from_scale)?).ok_or(CAST_OVERFLOW)
    } else {
        div(value, pow10(from_scale - to_scale)?)
    }
}

/// Integer square root, `floor(sqrt(value))`.
pub fn isqrt(value: U256) -> U256 {
    if value < U256::from(2u8) {
        return value;
    }
    // Newton iteration from a power of two above the root
    let bits = 256 - value.leading_zeros();
    let mut x = U256::ONE << ((bits + 1) / 2);
    loop {
        let y = (x + value / x) >> 1u32;
        if y >= x {
            return x;
        }
        x = y;
    }
}

pub fn isqrt_up(value: U256) -> U256 {
    let root = isqrt(value);
    if root * root == value {
        root
    } else {
        root + U256::ONE
    }
}
