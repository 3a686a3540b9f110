//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use core::fmt::{Display, Formatter, Result as FmtResult};

use ethnum::U256;

use crate::{
    rescale, CoreError, ADD_OVERFLOW, FEE_GROWTH_SCALE, FIXED_POINT_SCALE, LIQUIDITY_SCALE, PERCENTAGE_SCALE, PRICE_SCALE, SQRT_PRICE_SCALE,
    SUB_UNDERFLOW, TOKEN_AMOUNT_SCALE,
};

/// Declares an unsigned fixed-point newtype over `U256` with an implicit
/// number of decimal places. Values of different types never mix without
/// an explicit `rescale`.
macro_rules! scaled_decimal {
    ($(#[$meta:meta])* $name:ident, $scale:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub U256);

        impl $name {
            pub const SCALE: u8 = $scale;

            pub const fn new(value: U256) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> U256 {
                self.0
            }

            pub fn one() -> Self {
                Self(U256::from(10u8).pow(Self::SCALE as u32))
            }

            pub fn from_integer(value: u128) -> Self {
                Self(U256::from(value) * Self::one().0)
            }

            /// Rescales `value`, given with `decimals` fractional digits, into this type.
            pub fn from_scale(value: u128, decimals: u8) -> Result<Self, CoreError> {
                rescale(U256::from(value), decimals, Self::SCALE).map(Self)
            }

            pub fn is_zero(&self) -> bool {
                self.0 == U256::ZERO
            }

            pub fn checked_add(self, other: Self) -> Result<Self, CoreError> {
                self.0.checked_add(other.0).map(Self).ok_or(ADD_OVERFLOW)
            }

            pub fn checked_sub(self, other: Self) -> Result<Self, CoreError> {
                self.0.checked_sub(other.0).map(Self).ok_or(SUB_UNDERFLOW)
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self(U256::from(value))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter) -> FmtResult {
                Display::fmt(&self.0, f)
            }
        }
    };
}

scaled_decimal!(SqrtPrice, SQRT_PRICE_SCALE);
scaled_decimal!(Price, PRICE_SCALE);
scaled_decimal!(Liquidity, LIQUIDITY_SCALE);
scaled_decimal!(FeeGrowth, FEE_GROWTH_SCALE);
scaled_decimal!(Percentage, PERCENTAGE_SCALE);
scaled_decimal!(FixedPoint, FIXED_POINT_SCALE);
scaled_decimal!(
    /// Raw token units; scale zero.
    TokenAmount,
    TOKEN_AMOUNT_SCALE
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one() {
        assert_eq!(SqrtPrice::one().get(), U256::from(10u8).pow(24));
        assert_eq!(Liquidity::one().get(), U256::from(100000u32));
        assert_eq!(TokenAmount::one().get(), U256::ONE);
        assert_eq!(Percentage::one().get(), U256::from(1_000_000_000_000u64));
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(Liquidity::from_integer(7), Liquidity::new(U256::from(700000u32)));
        assert_eq!(TokenAmount::from_integer(7), TokenAmount::from(7));
    }

    #[test]
    fn test_from_scale() {
        // 0.3% given with 3 decimals
        assert_eq!(Percentage::from_scale(3, 3).unwrap(), Percentage::from(3_000_000_000));
        // 1.23456789 liquidity truncated to 5 decimals
        assert_eq!(Liquidity::from_scale(123456789, 8).unwrap(), Liquidity::from(123456));
    }

    #[test]
    fn test_checked_ops() {
        let a = TokenAmount::from(5);
        let b = TokenAmount::from(7);
        assert_eq!(a.checked_add(b), Ok(TokenAmount::from(12)));
        assert_eq!(a.checked_sub(b), Err(SUB_UNDERFLOW));
        assert_eq!(TokenAmount::new(U256::MAX).checked_add(a), Err(ADD_OVERFLOW));
    }

    #[test]
    fn test_display_prints_raw_value() {
        assert_eq!(SqrtPrice::one().to_string(), "1000000000000000000000000");
    }
}
