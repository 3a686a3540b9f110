//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

const U128_RESOLUTION: u32 = 128;
const U256_BITS: u32 = 256;

/// A 512-bit unsigned product of two `U256` values, kept as two halves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct U512 {
    pub hi: U256,
    pub lo: U256,
}

impl U512 {
    pub fn new(hi: U256, lo: U256) -> Self {
        U512 { hi, lo }
    }

    pub fn is_zero(&self) -> bool {
        self.hi == U256::ZERO && self.lo == U256::ZERO
    }

    // Result overflows if greater than 2^512-1
    pub fn checked_add(&self, other: U256) -> Option<Self> {
        let (lo, carry) = self.lo.overflowing_add(other);
        let hi = if carry { self.hi.checked_add(U256::ONE)? } else { self.hi };
        Some(U512 { hi, lo })
    }

    /// Divides by `divisor` and returns `(quotient, remainder)`.
    ///
    /// Returns `None` when the divisor is zero or the quotient does not fit
    /// in 256 bits.
    pub fn checked_div_rem(&self, divisor: U256) -> Option<(U256, U256)> {
        if divisor == U256::ZERO || self.hi >= divisor {
            return None;
        }

        if self.hi == U256::ZERO {
            return Some((self.lo / divisor, self.lo % divisor));
        }

        // Binary long division. The running remainder is always below the
        // divisor, so after a shift it is below 2 * divisor and a single
        // subtraction restores the invariant. The bit shifted out of the top
        // is tracked in `carry`.
        let mut remainder = self.hi;
        let mut quotient = U256::ZERO;
        for i in (0..U256_BITS).rev() {
            let carry = remainder >> (U256_BITS - 1) == U256::ONE;
            remainder = (remainder << 1u32) | ((self.lo >> i) & U256::ONE);
            quotient <<= 1u32;
            if carry || remainder >= divisor {
                remainder = remainder.wrapping_sub(divisor);
                quotient |= U256::ONE;
            }
        }

        Some((quotient, remainder))
    }
}

pub trait LoHi {
    fn lo(self) -> U256;
    fn hi(self) -> U256;
}

impl LoHi for U256 {
    fn lo(self) -> U256 {
        U256::from(*self.low())
    }
    fn hi(self) -> U256 {
        U256::from(*self.high())
    }
}

/// Full-width product of two `U256` values.
pub fn mul_u512(v: U256, n: U256) -> U512 {
    // 128 bit limbs
    //                   nh   nl
    //                *  vh   vl
    //                ----------
    // a0 =              vl * nl
    // a1 =         vl * nh
    // b0 =         vh * nl
    // b1 =  + vh * nh
    //       -------------------
    //        c1h  c1l  c0h  c0l
    //
    // Every partial product of two 128 bit limbs fits in a U256.
    let a0 = v.lo() * n.lo();
    let a1 = v.lo() * n.hi();
    let b0 = v.hi() * n.lo();
    let b1 = v.hi() * n.hi();

    // the middle column can carry one bit past 2^256
    let (mid, mid_carry) = a1.overflowing_add(b0);
    let mid_carry = if mid_carry { U256::ONE << U128_RESOLUTION } else { U256::ZERO };

    let (c0, low_carry) = a0.overflowing_add(mid << U128_RESOLUTION);
    let low_carry = if low_carry { U256::ONE } else { U256::ZERO };

    // cannot overflow: the full product is below 2^512
    let c1 = b1 + (mid >> U128_RESOLUTION) + mid_carry + low_carry;

    U512::new(c1, c0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(value: &str) -> U256 {
        U256::from_str_radix(value, 10).unwrap()
    }

    #[test]
    fn test_mul_u512_small() {
        let product = mul_u512(U256::from(6u8), U256::from(7u8));
        assert_eq!(product, U512::new(U256::ZERO, U256::from(42u8)));
    }

    #[test]
    fn test_mul_u512_max() {
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1
        let product = mul_u512(U256::MAX, U256::MAX);
        assert_eq!(product.hi, U256::MAX - U256::ONE);
        assert_eq!(product.lo, U256::ONE);
    }

    #[test]
    fn test_mul_u512_carries_into_high_half() {
        let product = mul_u512(U256::ONE << 200u32, U256::ONE << 100u32);
        assert_eq!(product.hi, U256::ONE << 44u32);
        assert_eq!(product.lo, U256::ZERO);
    }

    #[test]
    fn test_div_rem_wide_product() {
        let a = u("65535383934512647000000000000");
        let b = u("340282366920938463463374607431768211455000000");
        let d = u("1000000000000000000000000");
        let (q, r) = mul_u512(a, b).checked_div_rem(d).unwrap();
        assert_eq!(q, u("22300535562308408361215204585786568048575995442267"));
        assert_eq!(r, u("771385000000000000000000"));
    }

    #[test]
    fn test_div_rem_with_remainder() {
        let (q, r) = mul_u512(U256::MAX, U256::from(3u8)).checked_div_rem(U256::from(4u8)).unwrap();
        // 3 * (2^256 - 1) = 4q + r
        assert_eq!(q, (U256::MAX / U256::from(4u8)) * U256::from(3u8) + U256::from(2u8));
        assert_eq!(r, U256::ONE);
    }

    #[test]
    fn test_div_rem_exact_max() {
        let (q, r) = mul_u512(U256::MAX, U256::MAX).checked_div_rem(U256::MAX).unwrap();
        assert_eq!(q, U256::MAX);
        assert_eq!(r, U256::ZERO);
    }

    #[test]
    fn test_div_rem_overflow_and_zero() {
        assert_eq!(mul_u512(U256::MAX, U256::from(2u8)).checked_div_rem(U256::ONE), None);
        assert_eq!(mul_u512(U256::ONE, U256::ONE).checked_div_rem(U256::ZERO), None);
    }

    #[test]
    fn test_checked_add() {
        let value = U512::new(U256::ZERO, U256::MAX).checked_add(U256::ONE).unwrap();
        assert_eq!(value, U512::new(U256::ONE, U256::ZERO));
        assert_eq!(U512::new(U256::MAX, U256::MAX).checked_add(U256::ONE), None);
    }
}
