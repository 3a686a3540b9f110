//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

pub const SQRT_PRICE_SCALE: u8 = 24;
pub const PRICE_SCALE: u8 = 24;
pub const LIQUIDITY_SCALE: u8 = 5;
pub const FEE_GROWTH_SCALE: u8 = 28;
pub const PERCENTAGE_SCALE: u8 = 12;
pub const FIXED_POINT_SCALE: u8 = 12;
pub const TOKEN_AMOUNT_SCALE: u8 = 0;

pub const SQRT_PRICE_DENOMINATOR: u128 = 1_000000_000000_000000_000000;
pub const LIQUIDITY_DENOMINATOR: u128 = 1_00000;
pub const FEE_GROWTH_DENOMINATOR: u128 = 1_0000_000000_000000_000000_000000;
pub const PERCENTAGE_DENOMINATOR: u128 = 1_000000_000000;
pub const FIXED_POINT_DENOMINATOR: u128 = 1_000000_000000;

/// 2^256 - 1, spelled out rather than derived from a conversion.
pub const MAX_U256: U256 = U256::from_words(u128::MAX, u128::MAX);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denominators_match_scales() {
        assert_eq!(SQRT_PRICE_DENOMINATOR, 10u128.pow(SQRT_PRICE_SCALE as u32));
        assert_eq!(LIQUIDITY_DENOMINATOR, 10u128.pow(LIQUIDITY_SCALE as u32));
        assert_eq!(FEE_GROWTH_DENOMINATOR, 10u128.pow(FEE_GROWTH_SCALE as u32));
        assert_eq!(PERCENTAGE_DENOMINATOR, 10u128.pow(PERCENTAGE_SCALE as u32));
        assert_eq!(FIXED_POINT_DENOMINATOR, 10u128.pow(FIXED_POINT_SCALE as u32));
    }

    #[test]
    fn test_max_u256() {
        assert_eq!(MAX_U256, U256::MAX);
        assert_eq!(
            MAX_U256.to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }
}
