//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use libm::{floor, pow, sqrt};

use crate::{CoreError, SqrtPrice, MAX_SQRT_PRICE, MIN_SQRT_PRICE, SQRT_PRICE_DENOMINATOR, SQRT_PRICE_OUT_OF_RANGE};

/// Convert a sqrt price to a human readable price of token x in token y.
///
/// # Parameters
/// - `sqrt_price` - The sqrt price
/// - `decimals_x` - The decimals of token x
/// - `decimals_y` - The decimals of token y
///
/// # Returns
/// - A f64 price, lossy
pub fn sqrt_price_to_f64_price(sqrt_price: SqrtPrice, decimals_x: u8, decimals_y: u8) -> f64 {
    let power = pow(10f64, decimals_x as f64 - decimals_y as f64);
    // every valid sqrt price fits in 128 bits
    let sqrt_price = sqrt_price.get().as_u128() as f64 / SQRT_PRICE_DENOMINATOR as f64;
    pow(sqrt_price, 2f64) * power
}

/// Convert a human readable price of token x in token y to a sqrt price.
///
/// # Returns
/// - The sqrt price, or `SQRT_PRICE_OUT_OF_RANGE` if the price is not finite
///   or maps outside `[MIN_SQRT_PRICE, MAX_SQRT_PRICE]`
pub fn f64_price_to_sqrt_price(price: f64, decimals_x: u8, decimals_y: u8) -> Result<SqrtPrice, CoreError> {
    if !price.is_finite() || price <= 0f64 {
        return Err(SQRT_PRICE_OUT_OF_RANGE);
    }
    let power = pow(10f64, decimals_y as f64 - decimals_x as f64);
    let sqrt_price = floor(sqrt(price * power) * SQRT_PRICE_DENOMINATOR as f64);

    if !(MIN_SQRT_PRICE as f64..=MAX_SQRT_PRICE as f64).contains(&sqrt_price) {
        return Err(SQRT_PRICE_OUT_OF_RANGE);
    }
    Ok(SqrtPrice::from(sqrt_price as u128))
}
