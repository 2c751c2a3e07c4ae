use std::cmp::Ordering;

use rand::RngCore;

use crate::{I128, U128, SIGN_BIT};

impl U128 {
    /// Reinterprets the limbs as a two's-complement signed value; values
    /// with the top bit set become negative. [`U128::is_i128`] checks first.
    #[inline]
    pub const fn cast_signed(self) -> I128 {
        I128 {
            hi: self.hi,
            lo: self.lo,
        }
    }

    /// Whether the value is representable as an `I128`.
    #[inline]
    pub const fn is_i128(self) -> bool {
        self.hi & SIGN_BIT == 0
    }

    /// Truncates to the low limb; values above `u64::MAX` lose their high
    /// bits. [`U128::is_u64`] checks first.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.lo
    }

    /// Whether the value is representable as a `u64`.
    #[inline]
    pub const fn is_u64(self) -> bool {
        self.hi == 0
    }

    /// Converts from a signed 64-bit value; negatives come back as
    /// `(ZERO, false)`.
    #[inline]
    pub const fn from_i64(v: i64) -> (Self, bool) {
        if v < 0 {
            (Self::ZERO, false)
        } else {
            (Self::from_raw(0, v as u64), true)
        }
    }

    /// Fills both limbs from an external random source, high limb first.
    pub fn from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let hi = rng.next_u64();
        let lo = rng.next_u64();
        Self { hi, lo }
    }

    /// Compares against a single limb.
    #[inline]
    pub fn cmp_u64(self, n: u64) -> Ordering {
        if self.hi != 0 {
            Ordering::Greater
        } else {
            self.lo.cmp(&n)
        }
    }

    /// The big-endian byte encoding: `hi` limb first.
    pub fn to_be_bytes(self) -> [u8; 16] {
        let mut out = [0; 16];
        out[..8].copy_from_slice(&self.hi.to_be_bytes());
        out[8..].copy_from_slice(&self.lo.to_be_bytes());
        out
    }

    /// The little-endian byte encoding: `lo` limb first.
    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut out = [0; 16];
        out[..8].copy_from_slice(&self.lo.to_le_bytes());
        out[8..].copy_from_slice(&self.hi.to_le_bytes());
        out
    }

    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        let (hi, lo) = bytes.split_at(8);
        Self {
            hi: u64::from_be_bytes(hi.try_into().unwrap()),
            lo: u64::from_be_bytes(lo.try_into().unwrap()),
        }
    }

    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let (lo, hi) = bytes.split_at(8);
        Self {
            hi: u64::from_le_bytes(hi.try_into().unwrap()),
            lo: u64::from_le_bytes(lo.try_into().unwrap()),
        }
    }
}

impl I128 {
    /// Reinterprets the limbs as unsigned; negative values become values
    /// above `I128::MAX`. [`I128::is_u128`] checks first.
    #[inline]
    pub const fn cast_unsigned(self) -> U128 {
        U128 {
            hi: self.hi,
            lo: self.lo,
        }
    }

    /// Whether the value is representable as a `U128` (i.e. non-negative).
    #[inline]
    pub const fn is_u128(self) -> bool {
        self.hi & SIGN_BIT == 0
    }

    /// Truncates to the low limb read as signed; values outside `i64`'s
    /// range lose their high bits. [`I128::is_i64`] checks first.
    #[inline]
    pub const fn as_i64(self) -> i64 {
        self.lo as i64
    }

    /// Whether the value is representable as an `i64`.
    #[inline]
    pub const fn is_i64(self) -> bool {
        if self.hi & SIGN_BIT != 0 {
            self.hi == u64::MAX && self.lo >= SIGN_BIT
        } else {
            self.hi == 0 && self.lo <= i64::MAX as u64
        }
    }

    /// Truncates to the low limb, discarding the sign, as `v as u64` does
    /// for native integers.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.lo
    }

    /// Whether the value is representable as a `u64`.
    #[inline]
    pub const fn is_u64(self) -> bool {
        self.hi == 0
    }

    /// Draws a non-negative value from an external random source, high limb
    /// first with the sign bit cleared.
    pub fn from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let hi = rng.next_u64() & (i64::MAX as u64);
        let lo = rng.next_u64();
        Self { hi, lo }
    }

    /// Compares against a single signed limb.
    #[inline]
    pub fn cmp_i64(self, n: i64) -> Ordering {
        self.cmp(&Self::from(n))
    }
}

impl Ord for U128 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // hi limb first, then lo
        match self.hi.cmp(&other.hi) {
            Ordering::Equal => self.lo.cmp(&other.lo),
            ord => ord,
        }
    }
}

impl PartialOrd for U128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for I128 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // Differing sign bits decide outright; with equal signs the raw
        // limbs order like unsigned values even when both are negative.
        if (self.hi ^ other.hi) & SIGN_BIT != 0 {
            if self.hi & SIGN_BIT != 0 {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        } else {
            match self.hi.cmp(&other.hi) {
                Ordering::Equal => self.lo.cmp(&other.lo),
                ord => ord,
            }
        }
    }
}

impl PartialOrd for I128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for U128 {
                #[inline]
                fn from(v: $t) -> Self {
                    Self { hi: 0, lo: v as u64 }
                }
            }

            impl From<$t> for I128 {
                #[inline]
                fn from(v: $t) -> Self {
                    Self { hi: 0, lo: v as u64 }
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for I128 {
                #[inline]
                fn from(v: $t) -> Self {
                    let v = v as i64;
                    Self {
                        hi: if v < 0 { u64::MAX } else { 0 },
                        lo: v as u64,
                    }
                }
            }
        )+
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<u128> for U128 {
    #[inline]
    fn from(v: u128) -> Self {
        Self {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

impl From<U128> for u128 {
    #[inline]
    fn from(v: U128) -> Self {
        ((v.hi as u128) << 64) | v.lo as u128
    }
}

impl From<i128> for I128 {
    #[inline]
    fn from(v: i128) -> Self {
        Self {
            hi: (v as u128 >> 64) as u64,
            lo: v as u64,
        }
    }
}

impl From<I128> for i128 {
    #[inline]
    fn from(v: I128) -> Self {
        (((v.hi as u128) << 64) | v.lo as u128) as i128
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use quickcheck_macros::quickcheck;

    use crate::{rng, I128, U128};

    #[test]
    fn casts_are_bit_preserving() {
        assert_eq!(U128::MAX.cast_signed(), I128::MINUS_ONE);
        assert_eq!(I128::MIN.cast_unsigned(), U128::from_raw(crate::SIGN_BIT, 0));
        assert_eq!(I128::from(-1).cast_unsigned().cast_signed(), I128::from(-1));
    }

    #[test]
    fn range_predicates() {
        assert!(U128::from(5u64).is_i128());
        assert!(!U128::MAX.is_i128());
        assert!(U128::from(u64::MAX).is_u64());
        assert!(!U128::from_raw(1, 0).is_u64());

        assert!(I128::from(i64::MIN).is_i64());
        assert!(I128::from(i64::MAX).is_i64());
        assert!(!I128::from(i64::MIN).wrapping_dec().is_i64());
        assert!(!I128::from(i64::MAX).wrapping_inc().is_i64());
        assert!(I128::from(7).is_u128());
        assert!(!I128::from(-7).is_u128());
        assert!(!I128::from(-7).is_u64());
    }

    #[test]
    fn truncating_accessors() {
        assert_eq!(U128::from_raw(9, 77).as_u64(), 77);
        assert_eq!(I128::from(-3).as_i64(), -3);
        assert_eq!(I128::from(-3).as_u64(), u64::MAX - 2);
        assert_eq!(I128::from_raw(5, 42).as_i64(), 42);
    }

    #[test]
    fn from_i64_rejects_negatives() {
        assert_eq!(U128::from_i64(64), (U128::from(64u64), true));
        assert_eq!(U128::from_i64(-1), (U128::ZERO, false));
    }

    #[test]
    fn compares_unsigned() {
        let a = U128::from_raw(0, u64::MAX);
        let b = U128::from_raw(1, 0);
        assert!(a < b);
        assert_eq!(a.cmp_u64(u64::MAX), Ordering::Equal);
        assert_eq!(b.cmp_u64(u64::MAX), Ordering::Greater);
        assert_eq!(U128::ZERO.cmp_u64(1), Ordering::Less);
    }

    #[test]
    fn compares_signed() {
        assert!(I128::from(-1) < I128::ZERO);
        assert!(I128::MIN < I128::from(-1));
        assert!(I128::MAX > I128::from(1));
        assert_eq!(I128::from(-5).cmp_i64(-5), Ordering::Equal);
        assert_eq!(I128::from(-5).cmp_i64(-6), Ordering::Greater);
        assert_eq!(I128::MIN.cmp_i64(i64::MIN), Ordering::Less);
    }

    #[test]
    fn byte_codecs_match_the_limb_layout() {
        let v = U128::from_raw(0x0001020304050607, 0x08090A0B0C0D0E0F);
        let be: [u8; 16] = (0u8..16).collect::<Vec<u8>>().try_into().unwrap();
        assert_eq!(v.to_be_bytes(), be);
        assert_eq!(U128::from_be_bytes(be), v);

        let mut le = be;
        le.reverse();
        assert_eq!(v.to_le_bytes(), le);
        assert_eq!(U128::from_le_bytes(le), v);
    }

    #[test]
    fn random_draws_take_hi_first() {
        let mut a = rand_pcg::Pcg64::new(12345, 67890);
        let hi = rand::RngCore::next_u64(&mut a);
        let lo = rand::RngCore::next_u64(&mut a);

        let mut b = rand_pcg::Pcg64::new(12345, 67890);
        assert_eq!(U128::from_rng(&mut b), U128::from_raw(hi, lo));
    }

    #[test]
    fn random_signed_values_are_non_negative() {
        let mut rng = rng();
        for _ in 0..100 {
            assert!(!I128::from_rng(&mut rng).is_negative());
        }
    }

    #[quickcheck]
    fn qc_ordering_matches_native(a: U128, b: U128) -> bool {
        a.cmp(&b) == u128::from(a).cmp(&u128::from(b))
    }

    #[quickcheck]
    fn qc_signed_ordering_matches_native(a: I128, b: I128) -> bool {
        a.cmp(&b) == i128::from(a).cmp(&i128::from(b))
    }

    #[quickcheck]
    fn qc_native_conversions_round_trip(v: u128) -> bool {
        u128::from(U128::from(v)) == v && i128::from(I128::from(v as i128)) == v as i128
    }

    #[quickcheck]
    fn qc_bytes_match_native(v: u128) -> bool {
        U128::from(v).to_be_bytes() == v.to_be_bytes()
            && U128::from(v).to_le_bytes() == v.to_le_bytes()
            && U128::from_be_bytes(v.to_be_bytes()) == U128::from(v)
            && U128::from_le_bytes(v.to_le_bytes()) == U128::from(v)
    }

    #[quickcheck]
    fn qc_signed_widening_matches_native(v: i64) -> bool {
        i128::from(I128::from(v)) == v as i128
    }
}
