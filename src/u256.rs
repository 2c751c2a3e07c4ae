//! Just enough of a 256-bit unsigned integer to back the division engine.
//!
//! Not exported: it exists to hold the exact product of two 128-bit values
//! while the fast division path corrects its quotient estimate.

use crate::arith;
use crate::U128;

// Limbs are declared most-significant first so the derived ordering is the
// numeric one.
#[derive(Eq, PartialEq, PartialOrd, Ord, Copy, Clone, Debug)]
pub(crate) struct U256 {
    hi: u64,
    hm: u64,
    lm: u64,
    lo: u64,
}

impl U256 {
    pub(crate) const fn from_u128(u: U128) -> Self {
        Self {
            hi: 0,
            hm: 0,
            lm: u.hi,
            lo: u.lo,
        }
    }

    /// Exact 256-bit product of two 128-bit values: the four partial 64×64
    /// products combined with carry propagation.
    pub(crate) fn full_mul(a: U128, b: U128) -> Self {
        let (hi, hm) = arith::mul64(a.hi, b.hi);
        let (lm, lo) = arith::mul64(a.lo, b.lo);

        let (thi, tlo) = arith::mul64(a.hi, b.lo);
        let (lm, carry) = arith::add64(lm, tlo, 0);
        let (hm, carry) = arith::add64(hm, thi, carry);
        let hi = hi.wrapping_add(carry);

        let (thi, tlo) = arith::mul64(a.lo, b.hi);
        let (lm, carry) = arith::add64(lm, tlo, 0);
        let (hm, carry) = arith::add64(hm, thi, carry);
        let hi = hi.wrapping_add(carry);

        Self { hi, hm, lm, lo }
    }

    pub(crate) fn wrapping_sub(self, n: Self) -> Self {
        let (lo, borrow) = arith::sub64(self.lo, n.lo, 0);
        let (lm, borrow) = arith::sub64(self.lm, n.lm, borrow);
        let (hm, borrow) = arith::sub64(self.hm, n.hm, borrow);
        let (hi, _) = arith::sub64(self.hi, n.hi, borrow);
        Self { hi, hm, lm, lo }
    }

    /// Whether the value fits in the low 128 bits.
    pub(crate) const fn is_u128(self) -> bool {
        self.hi == 0 && self.hm == 0
    }

    /// The low 128 bits.
    pub(crate) const fn low_u128(self) -> U128 {
        U128 {
            hi: self.lm,
            lo: self.lo,
        }
    }
}
