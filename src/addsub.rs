use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::arith;
use crate::{I128, U128};

impl U128 {
    /// Adds with wraparound, also reporting whether the carry left bit 127.
    #[inline]
    pub fn overflowing_add(self, n: Self) -> (Self, bool) {
        let (lo, carry) = arith::add64(self.lo, n.lo, 0);
        let (hi, carry) = arith::add64(self.hi, n.hi, carry);
        (Self { hi, lo }, carry != 0)
    }

    #[inline]
    pub fn wrapping_add(self, n: Self) -> Self {
        self.overflowing_add(n).0
    }

    #[inline]
    pub fn wrapping_add_u64(self, n: u64) -> Self {
        let (lo, carry) = arith::add64(self.lo, n, 0);
        Self {
            hi: self.hi.wrapping_add(carry),
            lo,
        }
    }

    /// Subtracts with wraparound, also reporting whether a borrow was taken.
    #[inline]
    pub fn overflowing_sub(self, n: Self) -> (Self, bool) {
        let (lo, borrow) = arith::sub64(self.lo, n.lo, 0);
        let (hi, borrow) = arith::sub64(self.hi, n.hi, borrow);
        (Self { hi, lo }, borrow != 0)
    }

    #[inline]
    pub fn wrapping_sub(self, n: Self) -> Self {
        self.overflowing_sub(n).0
    }

    #[inline]
    pub fn wrapping_sub_u64(self, n: u64) -> Self {
        let (lo, borrow) = arith::sub64(self.lo, n, 0);
        Self {
            hi: self.hi.wrapping_sub(borrow),
            lo,
        }
    }

    /// Adds one; `U128::MAX` wraps to zero.
    #[inline]
    pub fn wrapping_inc(self) -> Self {
        self.wrapping_add_u64(1)
    }

    /// Subtracts one; zero wraps to `U128::MAX`.
    #[inline]
    pub fn wrapping_dec(self) -> Self {
        self.wrapping_sub_u64(1)
    }

    /// Absolute difference: subtracts the smaller value from the larger.
    #[inline]
    pub fn abs_diff(self, n: Self) -> Self {
        if self >= n {
            self.wrapping_sub(n)
        } else {
            n.wrapping_sub(self)
        }
    }
}

impl I128 {
    /// Adds with wraparound. Two's complement makes the limb arithmetic
    /// identical to the unsigned case.
    #[inline]
    pub fn wrapping_add(self, n: Self) -> Self {
        let (lo, carry) = arith::add64(self.lo, n.lo, 0);
        let (hi, _) = arith::add64(self.hi, n.hi, carry);
        Self { hi, lo }
    }

    #[inline]
    pub fn wrapping_add_i64(self, n: i64) -> Self {
        let nhi = if n < 0 { u64::MAX } else { 0 };
        let (lo, carry) = arith::add64(self.lo, n as u64, 0);
        let (hi, _) = arith::add64(self.hi, nhi, carry);
        Self { hi, lo }
    }

    #[inline]
    pub fn wrapping_sub(self, n: Self) -> Self {
        let (lo, borrow) = arith::sub64(self.lo, n.lo, 0);
        let (hi, _) = arith::sub64(self.hi, n.hi, borrow);
        Self { hi, lo }
    }

    #[inline]
    pub fn wrapping_sub_i64(self, n: i64) -> Self {
        let nhi = if n < 0 { u64::MAX } else { 0 };
        let (lo, borrow) = arith::sub64(self.lo, n as u64, 0);
        let (hi, _) = arith::sub64(self.hi, nhi, borrow);
        Self { hi, lo }
    }

    /// Adds one; `I128::MAX` wraps to `I128::MIN`.
    #[inline]
    pub fn wrapping_inc(self) -> Self {
        self.wrapping_add_i64(1)
    }

    /// Subtracts one; `I128::MIN` wraps to `I128::MAX`.
    #[inline]
    pub fn wrapping_dec(self) -> Self {
        self.wrapping_sub_i64(1)
    }

    /// Two's-complement negation: `!self + 1`.
    ///
    /// `I128::MIN` negates to itself; the magnitude 2^127 has no positive
    /// representation.
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        let (lo, carry) = arith::add64(!self.lo, 1, 0);
        Self {
            hi: (!self.hi).wrapping_add(carry),
            lo,
        }
    }

    /// Absolute value with the same fixpoint as [`I128::wrapping_neg`]:
    /// `I128::MIN` stays `I128::MIN`. Use [`I128::unsigned_abs`] when the
    /// true magnitude is needed.
    #[inline]
    pub fn wrapping_abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// The magnitude as an unsigned value. Every input is representable:
    /// negating `I128::MIN` wraps back to `I128::MIN`, whose unsigned
    /// reading is exactly the magnitude 2^127.
    #[inline]
    pub fn unsigned_abs(self) -> U128 {
        self.wrapping_abs().cast_unsigned()
    }

    /// Absolute difference as an unsigned value; `MAX.abs_diff(MIN)` is
    /// representable only because the result widens to `U128`.
    #[inline]
    pub fn abs_diff(self, n: Self) -> U128 {
        if self >= n {
            self.wrapping_sub(n).cast_unsigned()
        } else {
            n.wrapping_sub(self).cast_unsigned()
        }
    }
}

impl Add for U128 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }
}

impl Add<u64> for U128 {
    type Output = Self;

    #[inline]
    fn add(self, other: u64) -> Self {
        self.wrapping_add_u64(other)
    }
}

impl AddAssign for U128 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.wrapping_add(other);
    }
}

impl Sub for U128 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.wrapping_sub(other)
    }
}

impl Sub<u64> for U128 {
    type Output = Self;

    #[inline]
    fn sub(self, other: u64) -> Self {
        self.wrapping_sub_u64(other)
    }
}

impl SubAssign for U128 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = self.wrapping_sub(other);
    }
}

impl Add for I128 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }
}

impl AddAssign for I128 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.wrapping_add(other);
    }
}

impl Sub for I128 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.wrapping_sub(other)
    }
}

impl SubAssign for I128 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = self.wrapping_sub(other);
    }
}

impl Neg for I128 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}
