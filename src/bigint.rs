//! Bridge to `num-bigint`'s arbitrary-precision integers.
//!
//! Conversions out are lossless. Conversions in saturate and report the loss
//! through the usual `(value, in_range)` pair, since the input typically
//! originates from parsed or externally computed data.

use num_bigint::{BigInt, BigUint, Sign};

use crate::{I128, U128};

// Boundary magnitudes for the signed conversions.
const MAX_I128_AS_U128: U128 = U128::from_raw(i64::MAX as u64, u64::MAX);
const MIN_I128_ABS: U128 = U128::from_raw(crate::SIGN_BIT, 0);

impl U128 {
    pub fn to_biguint(self) -> BigUint {
        (BigUint::from(self.hi) << 64) | BigUint::from(self.lo)
    }

    pub fn to_bigint(self) -> BigInt {
        BigInt::from_biguint(Sign::Plus, self.to_biguint())
    }

    /// Writes the value into an existing `BigInt`, reusing its allocation.
    /// The buffer is caller-owned; nothing is retained after the call.
    pub fn into_bigint(self, b: &mut BigInt) {
        b.assign_from_slice(Sign::Plus, &self.to_u32_digits());
    }

    /// Converts from an unsigned big integer. Values above `U128::MAX`
    /// saturate to `MAX` and report `false`.
    pub fn from_biguint(v: &BigUint) -> (Self, bool) {
        let mut digits = v.iter_u64_digits();
        let lo = digits.next().unwrap_or(0);
        let hi = digits.next().unwrap_or(0);
        if digits.next().is_some() {
            (Self::MAX, false)
        } else {
            (Self::from_raw(hi, lo), true)
        }
    }

    /// Converts from a signed big integer. Negative values come back as
    /// `(ZERO, false)`; values above `U128::MAX` as `(MAX, false)`.
    pub fn from_bigint(v: &BigInt) -> (Self, bool) {
        if v.sign() == Sign::Minus {
            return (Self::ZERO, false);
        }
        Self::from_biguint(v.magnitude())
    }

    pub(crate) fn to_u32_digits(self) -> [u32; 4] {
        [
            self.lo as u32,
            (self.lo >> 32) as u32,
            self.hi as u32,
            (self.hi >> 32) as u32,
        ]
    }
}

impl I128 {
    pub fn to_bigint(self) -> BigInt {
        // The big-integer form is sign-magnitude; complement-and-increment
        // (unsigned_abs) converts out of two's complement.
        if self.is_negative() {
            BigInt::from_biguint(Sign::Minus, self.unsigned_abs().to_biguint())
        } else {
            self.cast_unsigned().to_bigint()
        }
    }

    /// Writes the value into an existing `BigInt`, reusing its allocation.
    pub fn into_bigint(self, b: &mut BigInt) {
        let sign = if self.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        b.assign_from_slice(sign, &self.unsigned_abs().to_u32_digits());
    }

    /// Converts from a signed big integer, saturating to `MAX`/`MIN` and
    /// reporting `false` when the value does not fit.
    pub fn from_bigint(v: &BigInt) -> (Self, bool) {
        let (mag, accurate) = U128::from_biguint(v.magnitude());

        if v.sign() == Sign::Minus {
            match mag.cmp(&MIN_I128_ABS) {
                std::cmp::Ordering::Less => (mag.cast_signed().wrapping_neg(), accurate),
                std::cmp::Ordering::Equal => (Self::MIN, accurate),
                std::cmp::Ordering::Greater => (Self::MIN, false),
            }
        } else if mag > MAX_I128_AS_U128 {
            (Self::MAX, false)
        } else {
            (mag.cast_signed(), accurate)
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::{BigInt, BigUint};
    use quickcheck_macros::quickcheck;

    use crate::{I128, U128};

    #[test]
    fn unsigned_round_trip_edges() {
        for v in [U128::ZERO, U128::ONE, U128::MAX, U128::from_raw(1, 0)] {
            assert_eq!(U128::from_biguint(&v.to_biguint()), (v, true));
            assert_eq!(U128::from_bigint(&v.to_bigint()), (v, true));
        }
    }

    #[test]
    fn unsigned_saturates() {
        let too_big = U128::MAX.to_biguint() + 1u8;
        assert_eq!(U128::from_biguint(&too_big), (U128::MAX, false));

        let negative = BigInt::from(-1);
        assert_eq!(U128::from_bigint(&negative), (U128::ZERO, false));
    }

    #[test]
    fn signed_round_trip_edges() {
        for v in [
            I128::ZERO,
            I128::ONE,
            I128::MINUS_ONE,
            I128::MAX,
            I128::MIN,
            I128::from(i64::MIN),
        ] {
            assert_eq!(I128::from_bigint(&v.to_bigint()), (v, true));
        }
    }

    #[test]
    fn signed_saturates_both_ways() {
        let over = I128::MAX.to_bigint() + 1;
        assert_eq!(I128::from_bigint(&over), (I128::MAX, false));

        let under = I128::MIN.to_bigint() - 1;
        assert_eq!(I128::from_bigint(&under), (I128::MIN, false));

        let way_over = BigInt::from(1) << 300;
        assert_eq!(I128::from_bigint(&way_over), (I128::MAX, false));
        assert_eq!(I128::from_bigint(&(-way_over)), (I128::MIN, false));
    }

    #[test]
    fn reuses_the_buffer() {
        let mut b = BigInt::from(987654321u64);
        U128::from_raw(5, 6).into_bigint(&mut b);
        assert_eq!(b, U128::from_raw(5, 6).to_bigint());

        I128::from(-42).into_bigint(&mut b);
        assert_eq!(b, BigInt::from(-42));

        U128::ZERO.into_bigint(&mut b);
        assert_eq!(b, BigInt::from(0));
    }

    #[test]
    fn min_magnitude_is_exact() {
        let min_abs = BigUint::from(1u8) << 127;
        assert_eq!(
            I128::from_bigint(&BigInt::from_biguint(num_bigint::Sign::Minus, min_abs)),
            (I128::MIN, true)
        );
    }

    #[quickcheck]
    fn qc_unsigned_round_trips(v: U128) -> bool {
        U128::from_bigint(&v.to_bigint()) == (v, true)
    }

    #[quickcheck]
    fn qc_signed_round_trips(v: I128) -> bool {
        I128::from_bigint(&v.to_bigint()) == (v, true)
    }

    #[quickcheck]
    fn qc_matches_native_value(v: U128) -> bool {
        v.to_biguint() == BigUint::from(u128::from(v))
    }

    #[quickcheck]
    fn qc_signed_matches_native_value(v: I128) -> bool {
        v.to_bigint() == BigInt::from(i128::from(v))
    }

    #[quickcheck]
    fn qc_into_bigint_matches_to_bigint(v: I128, seed: u64) -> bool {
        let mut b = BigInt::from(seed);
        v.into_bigint(&mut b);
        b == v.to_bigint()
    }
}
