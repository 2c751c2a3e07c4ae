use std::cmp::Ordering;
use std::ops::{Div, Rem};

use crate::u256::U256;
use crate::{I128, U128};

// Leading-zero gap beyond which the normalized-divisor algorithm beats
// binary long division. Carried from benchmarks on amd64; retune per target
// if the crossover moves. Correctness never depends on the value — the two
// paths are interchangeable (see tests::both_algorithms_agree_across_widths).
const DIV_BINARY_SPILL: u32 = 16;

impl U128 {
    /// Truncating division with remainder: `q = self / by` rounded toward
    /// zero and `r = self - by * q`, so `r < by` always holds.
    ///
    /// # Panics
    ///
    /// When `by` is zero.
    pub fn quo_rem(self, by: Self) -> (Self, Self) {
        if by.is_zero() {
            panic!("division by zero");
        }

        if (self.hi | by.hi) == 0 {
            // by.lo is non-zero here
            return (Self::from(self.lo / by.lo), Self::from(self.lo % by.lo));
        }

        let by_leading0 = by.leading_zeros();
        if by_leading0 == 127 {
            // by == 1
            return (self, Self::ZERO);
        }

        let by_trailing0 = by.trailing_zeros();
        if by_leading0 + by_trailing0 == 127 {
            // Power of two: the quotient shifts out, the remainder masks out.
            return (self.shr(by_trailing0), self & by.wrapping_dec());
        }

        match self.cmp(&by) {
            Ordering::Less => return (Self::ZERO, self),
            Ordering::Equal => return (Self::ONE, Self::ZERO),
            Ordering::Greater => {}
        }

        let u_leading0 = self.leading_zeros();
        if by_leading0 - u_leading0 > DIV_BINARY_SPILL {
            quorem_norm(self, by, by_leading0)
        } else {
            quorem_binary(self, by, u_leading0, by_leading0)
        }
    }

    /// The quotient half of [`U128::quo_rem`].
    ///
    /// # Panics
    ///
    /// When `by` is zero.
    #[inline]
    pub fn quo(self, by: Self) -> Self {
        self.quo_rem(by).0
    }

    /// The remainder half of [`U128::quo_rem`].
    ///
    /// # Panics
    ///
    /// When `by` is zero.
    #[inline]
    pub fn rem(self, by: Self) -> Self {
        self.quo_rem(by).1
    }

    /// Division by a single limb.
    ///
    /// # Panics
    ///
    /// When `by` is zero.
    pub fn quo_rem_u64(self, by: u64) -> (Self, u64) {
        if by == 0 {
            panic!("division by zero");
        }

        let by_leading0 = by.leading_zeros();
        if self.hi < by {
            let (q, r) = quorem_128_by_64(self.hi, self.lo, by, by_leading0);
            (Self::from(q), r)
        } else {
            let (q_lo, r) = quorem_128_by_64(self.hi % by, self.lo, by, by_leading0);
            (Self::from_raw(self.hi / by, q_lo), r)
        }
    }
}

impl I128 {
    /// Truncating division with remainder: the quotient rounds toward zero
    /// and the remainder keeps the dividend's sign, like native signed
    /// division.
    ///
    /// `I128::MIN / -1` overflows and wraps back to `I128::MIN` with
    /// remainder zero, the same documented fixpoint native 64-bit division
    /// has at `i64::MIN / -1`.
    ///
    /// # Panics
    ///
    /// When `by` is zero.
    pub fn quo_rem(self, by: Self) -> (Self, Self) {
        let mut q_neg = false;
        let mut r_neg = false;

        let mut u = self;
        if self.is_negative() {
            q_neg = true;
            r_neg = true;
            u = self.wrapping_neg();
        }
        let mut v = by;
        if by.is_negative() {
            q_neg = !q_neg;
            v = by.wrapping_neg();
        }

        // wrapping_neg leaves MIN in place, whose unsigned cast is the true
        // magnitude 2^127, so the delegation below covers every input.
        let (qu, ru) = u.cast_unsigned().quo_rem(v.cast_unsigned());

        let mut q = qu.cast_signed();
        if q_neg {
            q = q.wrapping_neg();
        }
        let mut r = ru.cast_signed();
        if r_neg {
            r = r.wrapping_neg();
        }
        (q, r)
    }

    /// The quotient half of [`I128::quo_rem`].
    ///
    /// # Panics
    ///
    /// When `by` is zero.
    #[inline]
    pub fn quo(self, by: Self) -> Self {
        self.quo_rem(by).0
    }

    /// The remainder half of [`I128::quo_rem`].
    ///
    /// # Panics
    ///
    /// When `by` is zero.
    #[inline]
    pub fn rem(self, by: Self) -> Self {
        self.quo_rem(by).1
    }

    /// Division by a single signed limb, with the same sign and overflow
    /// rules as [`I128::quo_rem`].
    ///
    /// # Panics
    ///
    /// When `by` is zero.
    pub fn quo_rem_i64(self, by: i64) -> (Self, Self) {
        let u_neg = self.is_negative();
        let u = if u_neg { self.wrapping_neg() } else { self };
        let by_neg = by < 0;

        let (qu, r) = u.cast_unsigned().quo_rem_u64(by.unsigned_abs());

        let mut q = qu.cast_signed();
        if u_neg != by_neg {
            q = q.wrapping_neg();
        }
        let mut r = Self::from_raw(0, r);
        if u_neg {
            r = r.wrapping_neg();
        }
        (q, r)
    }
}

/// Normalized-divisor schoolbook division. `by` has more than 64 significant
/// bits or a dividend too wide for the native path; the divisor is shifted
/// until its top bit is set so the per-digit estimates converge in O(1)
/// corrections.
fn quorem_norm(u: U128, by: U128, by_leading0: u32) -> (U128, U128) {
    if by.hi == 0 {
        let v = by.lo;
        let v_leading0 = by_leading0 - 64;
        if u.hi < v {
            let (q, r) = quorem_128_by_64(u.hi, u.lo, v, v_leading0);
            (U128::from(q), U128::from(r))
        } else {
            let (q_lo, r) = quorem_128_by_64(u.hi % v, u.lo, v, v_leading0);
            (U128::from_raw(u.hi / v, q_lo), U128::from(r))
        }
    } else {
        quorem_128_by_128(u, by, by_leading0)
    }
}

/// 128-by-64 division producing a 64-bit quotient and remainder.
///
/// Knuth Algorithm D specialized to a single limb divisor, working in 32-bit
/// half-digits (Hacker's Delight 9-4, divlu). Requires `u1 < v` so the
/// quotient fits in 64 bits; each digit estimate is high by at most two and
/// is corrected by the standard comparisons.
fn quorem_128_by_64(u1: u64, u0: u64, v: u64, v_leading0: u32) -> (u64, u64) {
    const B: u64 = 1 << 32;

    debug_assert!(u1 < v);

    let v = v << v_leading0;
    let vn1 = v >> 32;
    let vn0 = v & 0xffff_ffff;

    let (un32, un10) = if v_leading0 > 0 {
        ((u1 << v_leading0) | (u0 >> (64 - v_leading0)), u0 << v_leading0)
    } else {
        (u1, u0)
    };

    let un1 = un10 >> 32;
    let un0 = un10 & 0xffff_ffff;

    let mut q1 = un32 / vn1;
    let mut rhat = un32 % vn1;
    loop {
        // The product is only consulted once q1 is a real digit, and the
        // loop exits when rhat leaves digit range: no more corrections can
        // apply from there.
        if q1 >= B || q1 * vn0 > (rhat << 32) | un1 {
            q1 -= 1;
            rhat += vn1;
            if rhat < B {
                continue;
            }
        }
        break;
    }

    let un21 = (un32 << 32)
        .wrapping_add(un1)
        .wrapping_sub(q1.wrapping_mul(v));

    let mut q0 = un21 / vn1;
    let mut rhat = un21 % vn1;
    loop {
        if q0 >= B || q0 * vn0 > (rhat << 32) | un0 {
            q0 -= 1;
            rhat += vn1;
            if rhat < B {
                continue;
            }
        }
        break;
    }

    let r = (un21 << 32)
        .wrapping_add(un0)
        .wrapping_sub(q0.wrapping_mul(v));

    ((q1 << 32) | q0, r >> v_leading0)
}

/// Division by a two-limb divisor. Estimates the quotient from the halved
/// dividend divided by the normalized divisor's top limb; the estimate lands
/// within one of the true quotient, and comparing the exact 256-bit product
/// against the dividend settles it.
fn quorem_128_by_128(u: U128, by: U128, by_hi_leading0: u32) -> (U128, U128) {
    debug_assert!(by.hi != 0);

    let v = by.shl(by_hi_leading0);
    let un = u.shr(1);

    let (q_est, _) = quorem_128_by_64(un.hi, un.lo, v.hi, 0);
    let mut q = U128::from(q_est).shr(63 - by_hi_leading0);
    if !q.is_zero() {
        q = q.wrapping_dec();
    }

    // q never exceeds the true quotient now, so the full product cannot
    // exceed the dividend.
    let p = U256::full_mul(q, by);
    let wide_r = U256::from_u128(u).wrapping_sub(p);
    debug_assert!(wide_r.is_u128());

    let mut r = wide_r.low_u128();
    if r >= by {
        q = q.wrapping_inc();
        r = r.wrapping_sub(by);
    }
    (q, r)
}

/// Binary long division: one quotient bit per iteration, exactly
/// `by.leading_zeros() - u.leading_zeros() + 1` of them. Always correct;
/// chosen when the operands are close enough in width that the normalized
/// path's setup cost is not worth paying.
fn quorem_binary(mut u: U128, by: U128, u_leading0: u32, by_leading0: u32) -> (U128, U128) {
    let mut shift = (by_leading0 - u_leading0) as i32;
    let mut by = by.shl(shift as u32);
    let mut q = U128::ZERO;

    loop {
        q.hi = (q.hi << 1) | (q.lo >> 63);
        q.lo <<= 1;

        // u >= by, spelled out on the raw limbs
        if u.hi > by.hi || (u.hi == by.hi && u.lo >= by.lo) {
            u = u.wrapping_sub(by);
            q.lo |= 1;
        }

        by.lo = (by.lo >> 1) | (by.hi << 63);
        by.hi >>= 1;

        if shift <= 0 {
            break;
        }
        shift -= 1;
    }

    (q, u)
}

impl Div for U128 {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        self.quo(other)
    }
}

impl Div<u64> for U128 {
    type Output = Self;

    #[inline]
    fn div(self, other: u64) -> Self {
        self.quo_rem_u64(other).0
    }
}

impl Rem for U128 {
    type Output = Self;

    #[inline]
    fn rem(self, other: Self) -> Self {
        U128::rem(self, other)
    }
}

impl Rem<u64> for U128 {
    type Output = u64;

    #[inline]
    fn rem(self, other: u64) -> u64 {
        self.quo_rem_u64(other).1
    }
}

impl Div for I128 {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        self.quo(other)
    }
}

impl Rem for I128 {
    type Output = Self;

    #[inline]
    fn rem(self, other: Self) -> Self {
        I128::rem(self, other)
    }
}
