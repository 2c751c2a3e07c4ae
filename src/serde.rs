//! Serde support.
//!
//! Values are emitted as quoted decimal strings — never bare JSON numbers,
//! which readers with 64-bit or float-backed number types would mangle. On
//! input both quoted strings and bare integers are accepted; out-of-range
//! values saturate, matching the lenient parse contract.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{I128, U128};

impl Serialize for U128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for I128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct U128Visitor;

impl<'de> Visitor<'de> for U128Visitor {
    type Value = U128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or integer")
    }

    fn visit_str<E: de::Error>(self, src: &str) -> Result<U128, E> {
        let (v, _) = U128::from_str_dec(src).map_err(E::custom)?;
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<U128, E> {
        Ok(U128::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<U128, E> {
        Ok(U128::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<U128, E> {
        Ok(if v < 0 { U128::ZERO } else { U128::from(v as u64) })
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<U128, E> {
        Ok(if v < 0 { U128::ZERO } else { U128::from(v as u128) })
    }
}

impl<'de> Deserialize<'de> for U128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(U128Visitor)
    }
}

struct I128Visitor;

impl<'de> Visitor<'de> for I128Visitor {
    type Value = I128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or integer")
    }

    fn visit_str<E: de::Error>(self, src: &str) -> Result<I128, E> {
        let (v, _) = I128::from_str_dec(src).map_err(E::custom)?;
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<I128, E> {
        Ok(I128::from_raw(0, v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<I128, E> {
        // saturates at the top, mirroring the string path
        Ok(if v > i128::MAX as u128 {
            I128::MAX
        } else {
            I128::from(v as i128)
        })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<I128, E> {
        Ok(I128::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<I128, E> {
        Ok(I128::from(v))
    }
}

impl<'de> Deserialize<'de> for I128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(I128Visitor)
    }
}
