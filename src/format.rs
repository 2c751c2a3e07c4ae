use std::fmt;

use crate::{I128, U128};

// 2^128 - 1 has 39 decimal digits.
const DEC_BUF: usize = 39;

// Largest power of ten in a u64; one division peels 19 digits.
const CHUNK: u64 = 10_000_000_000_000_000_000;

/// Writes the decimal digits into the tail of `buf`, returning the offset of
/// the most significant digit. Emits "0" for zero.
fn write_dec(u: U128, buf: &mut [u8; DEC_BUF]) -> usize {
    let mut pos = DEC_BUF;
    let mut q = u;

    loop {
        let (next, mut r) = q.quo_rem_u64(CHUNK);

        if next.is_zero() {
            loop {
                pos -= 1;
                buf[pos] = b'0' + (r % 10) as u8;
                r /= 10;
                if r == 0 {
                    break;
                }
            }
            return pos;
        }

        for _ in 0..19 {
            pos -= 1;
            buf[pos] = b'0' + (r % 10) as u8;
            r /= 10;
        }
        q = next;
    }
}

impl fmt::Display for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; DEC_BUF];
        let pos = write_dec(*self, &mut buf);
        // Digits are ASCII by construction.
        let digits = unsafe { std::str::from_utf8_unchecked(&buf[pos..]) };
        f.pad_integral(true, "", digits)
    }
}

impl fmt::Display for I128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; DEC_BUF];
        let pos = write_dec(self.unsigned_abs(), &mut buf);
        let digits = unsafe { std::str::from_utf8_unchecked(&buf[pos..]) };
        f.pad_integral(!self.is_negative(), "", digits)
    }
}

impl fmt::Debug for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("U128(")?;
        <Self as fmt::Display>::fmt(self, f)?;
        f.write_str(")")
    }
}

impl fmt::Debug for I128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("I128(")?;
        <Self as fmt::Display>::fmt(self, f)?;
        f.write_str(")")
    }
}

impl fmt::LowerHex for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_hex(self, f, hex_simd::AsciiCase::Lower)
    }
}

impl fmt::UpperHex for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_hex(self, f, hex_simd::AsciiCase::Upper)
    }
}

fn format_hex(src: &U128, f: &mut fmt::Formatter<'_>, case: hex_simd::AsciiCase) -> fmt::Result {
    let zero_digits = std::cmp::min(src.leading_zeros() / 4, 31) as usize;
    let bytes = src.to_be_bytes();

    let mut buf = [0; 32];
    let encoded = hex_simd::encode(&bytes, hex_simd::OutBuf::new(&mut buf), case)
        .expect("hex encode failed");

    f.write_str(unsafe { std::str::from_utf8_unchecked(&encoded[zero_digits..]) })
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{I128, U128};

    #[test]
    fn formats_numbers() {
        assert_eq!(U128::ZERO.to_string(), "0");
        assert_eq!(U128::from(12345u64).to_string(), "12345");
        assert_eq!(
            U128::from_raw(668557948920623322, 5677875087785924483).to_string(),
            "12332717382182921391293219327638312835"
        );
        assert_eq!(
            U128::MAX.to_string(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn formats_signed_numbers() {
        assert_eq!(I128::ZERO.to_string(), "0");
        assert_eq!(I128::from(-1).to_string(), "-1");
        assert_eq!(
            I128::MIN.to_string(),
            "-170141183460469231731687303715884105728"
        );
        assert_eq!(
            I128::MAX.to_string(),
            "170141183460469231731687303715884105727"
        );
    }

    #[test]
    fn honors_padding_flags() {
        assert_eq!(format!("{:08}", U128::from(42u64)), "00000042");
        assert_eq!(format!("{:>6}", U128::from(42u64)), "    42");
        assert_eq!(format!("{:+}", I128::from(42)), "+42");
        assert_eq!(format!("{:05}", I128::from(-42)), "-0042");
    }

    #[test]
    fn formats_debug() {
        assert_eq!(format!("{:?}", U128::from(7u64)), "U128(7)");
        assert_eq!(format!("{:?}", I128::from(-7)), "I128(-7)");
    }

    #[test]
    fn formats_lower_hex() {
        let v = U128::from_raw(0xaaaabbbbccccdddd, 0x0000012345678901);
        assert_eq!(format!("{v:x}"), "aaaabbbbccccdddd0000012345678901");

        let v = U128::from(0x12345u64);
        assert_eq!(format!("{v:x}"), "12345");
    }

    #[test]
    fn formats_upper_hex() {
        let v = U128::from_raw(0xABCDE, 0x12345);
        assert_eq!(format!("{v:X}"), "ABCDE000000000000012345");
    }

    #[test]
    fn formats_hex_zero() {
        assert_eq!(format!("{:x}", U128::ZERO), "0");
    }

    #[quickcheck]
    fn qc_matches_native_display(v: u128) -> bool {
        U128::from(v).to_string() == v.to_string()
    }

    #[quickcheck]
    fn qc_matches_native_signed_display(v: i128) -> bool {
        I128::from(v).to_string() == v.to_string()
    }

    #[quickcheck]
    fn qc_matches_native_hex(v: u128) -> bool {
        format!("{:x}", U128::from(v)) == format!("{v:x}")
            && format!("{:X}", U128::from(v)) == format!("{v:X}")
    }
}
