use std::ops::{Mul, MulAssign};

use crate::arith;
use crate::{I128, U128};

impl U128 {
    /// Truncating 128×128→128 multiply: the low half of the full product,
    /// with the carry out of bit 127 discarded.
    #[inline]
    pub fn wrapping_mul(self, n: Self) -> Self {
        let (hi, lo) = arith::mul64(self.lo, n.lo);
        let hi = hi
            .wrapping_add(self.hi.wrapping_mul(n.lo))
            .wrapping_add(self.lo.wrapping_mul(n.hi));
        Self { hi, lo }
    }

    #[inline]
    pub fn wrapping_mul_u64(self, n: u64) -> Self {
        let (hi, lo) = arith::mul64(self.lo, n);
        Self {
            hi: hi.wrapping_add(self.hi.wrapping_mul(n)),
            lo,
        }
    }
}

impl I128 {
    /// Truncating multiply. Two's-complement multiplication is bit-identical
    /// to the unsigned product of the same limbs.
    #[inline]
    pub fn wrapping_mul(self, n: Self) -> Self {
        self.cast_unsigned()
            .wrapping_mul(n.cast_unsigned())
            .cast_signed()
    }

    #[inline]
    pub fn wrapping_mul_i64(self, n: i64) -> Self {
        let nhi = if n < 0 { u64::MAX } else { 0 };
        self.cast_unsigned()
            .wrapping_mul(U128::from_raw(nhi, n as u64))
            .cast_signed()
    }
}

impl Mul for U128 {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        self.wrapping_mul(other)
    }
}

impl Mul<u64> for U128 {
    type Output = Self;

    #[inline]
    fn mul(self, other: u64) -> Self {
        self.wrapping_mul_u64(other)
    }
}

impl MulAssign for U128 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = self.wrapping_mul(other);
    }
}

impl Mul for I128 {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        self.wrapping_mul(other)
    }
}

impl MulAssign for I128 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = self.wrapping_mul(other);
    }
}
