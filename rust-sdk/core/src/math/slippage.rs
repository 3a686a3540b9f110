//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{isqrt, isqrt_up, mul_div, mul_div_up, CoreError, Percentage, Price, SqrtPrice, TokenAmount, SQRT_PRICE_DENOMINATOR};

/// Squares a sqrt price into a price, truncating.
pub fn sqrt_price_to_price(sqrt_price: SqrtPrice) -> Result<Price, CoreError> {
    mul_div(sqrt_price.get(), sqrt_price.get(), U256::from(SQRT_PRICE_DENOMINATOR)).map(Price::new)
}

/// Moves a sqrt price so that the price it squares to moves by `slippage`.
///
/// # Parameters
/// - `sqrt_price` - The sqrt price to move
/// - `slippage` - The tolerated relative price change
/// - `up` - Whether the price moves up (rounded up) or down (rounded down)
///
/// # Returns
/// - The sqrt price limit, or `SUB_UNDERFLOW` when moving down by more than 100%
pub fn calculate_sqrt_price_after_slippage(sqrt_price: SqrtPrice, slippage: Percentage, up: bool) -> Result<SqrtPrice, CoreError> {
    let one = Percentage::one();
    let multiplier = if up { one.checked_add(slippage)? } else { one.checked_sub(slippage)? };

    // sqrt of a value at twice the percentage scale lands on the percentage scale
    let widened = multiplier.get() * one.get();
    let sqrt_price = if up {
        mul_div_up(sqrt_price.get(), isqrt_up(widened), one.get())?
    } else {
        mul_div(sqrt_price.get(), isqrt(widened), one.get())?
    };

    Ok(SqrtPrice::new(sqrt_price))
}

/// Relative price change between two sqrt prices, `|p1 - p0| / max(p0, p1)`,
/// rounded up.
pub fn calculate_price_impact(starting_sqrt_price: SqrtPrice, ending_sqrt_price: SqrtPrice) -> Result<Percentage, CoreError> {
    let starting_price = sqrt_price_to_price(starting_sqrt_price)?.get();
    let ending_price = sqrt_price_to_price(ending_sqrt_price)?.get();

    let (nominator, denominator) = if starting_price > ending_price {
        (starting_price - ending_price, starting_price)
    } else {
        (ending_price - starting_price, ending_price)
    };

    mul_div_up(nominator, Percentage::one().get(), denominator).map(Percentage::new)
}

/// The least output to accept for an estimated `amount`.
pub fn get_min_amount_with_slippage(amount: TokenAmount, slippage: Percentage) -> Result<TokenAmount, CoreError> {
    let one = Percentage::one();
    mul_div(amount.get(), one.checked_sub(slippage)?.get(), one.get()).map(TokenAmount::new)
}

/// The most input to allow for an estimated `amount`.
pub fn get_max_amount_with_slippage(amount: TokenAmount, slippage: Percentage) -> Result<TokenAmount, CoreError> {
    let one = Percentage::one();
    mul_div_up(amount.get(), one.checked_add(slippage)?.get(), one.get()).map(TokenAmount::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SUB_UNDERFLOW;
    use rstest::rstest;

    fn sqrt_price(value: u128) -> SqrtPrice {
        SqrtPrice::from(value)
    }

    #[test]
    fn test_sqrt_price_to_price() {
        assert_eq!(sqrt_price_to_price(SqrtPrice::one()), Ok(Price::one()));
        assert_eq!(sqrt_price_to_price(sqrt_price(1001501050455000000000000)), Ok(Price::from(1003004354062468455707025)));
        assert_eq!(sqrt_price_to_price(sqrt_price(15258932000000000000)), Ok(Price::from(232835005780624)));
    }

    #[rstest]
    #[case(10_000_000_000, true, 1004987562113000000000000)]
    #[case(10_000_000_000, false, 994987437106000000000000)]
    #[case(0, true, 1000000000000000000000000)]
    #[case(1_000_000_000_000, false, 0)]
    fn test_calculate_sqrt_price_after_slippage(#[case] slippage: u128, #[case] up: bool, #[case] expected: u128) {
        let result = calculate_sqrt_price_after_slippage(SqrtPrice::one(), Percentage::from(slippage), up);
        assert_eq!(result, Ok(sqrt_price(expected)));
    }

    #[test]
    fn test_sqrt_price_after_slippage_off_one() {
        let result = calculate_sqrt_price_after_slippage(sqrt_price(1001501050455000000000000), Percentage::from(5_000_000_000), true);
        assert_eq!(result, Ok(sqrt_price(1004001681191046510118995)));
        let result = calculate_sqrt_price_after_slippage(SqrtPrice::one(), Percentage::from(1_000_000_000_001), false);
        assert_eq!(result, Err(SUB_UNDERFLOW));
    }

    #[test]
    fn test_calculate_price_impact() {
        let double = sqrt_price(2_000000000000_000000000000);
        assert_eq!(calculate_price_impact(SqrtPrice::one(), double), Ok(Percentage::from(750000000000)));
        assert_eq!(calculate_price_impact(double, SqrtPrice::one()), Ok(Percentage::from(750000000000)));
        assert_eq!(calculate_price_impact(SqrtPrice::one(), sqrt_price(1001501050455000000000000)), Ok(Percentage::from(2995354956)));
        assert_eq!(calculate_price_impact(SqrtPrice::one(), SqrtPrice::one()), Ok(Percentage::default()));
    }

    #[test]
    fn test_amounts_with_slippage() {
        let one_percent = Percentage::from(10_000_000_000);
        assert_eq!(get_min_amount_with_slippage(TokenAmount::from(1000), one_percent), Ok(TokenAmount::from(990)));
        assert_eq!(get_max_amount_with_slippage(TokenAmount::from(1000), one_percent), Ok(TokenAmount::from(1010)));
        assert_eq!(get_max_amount_with_slippage(TokenAmount::from(999), one_percent), Ok(TokenAmount::from(1009)));
        assert_eq!(get_min_amount_with_slippage(TokenAmount::from(1000), Percentage::from(2_000_000_000_000)), Err(SUB_UNDERFLOW));
    }
}
