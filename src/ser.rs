//! Serde support: a [`BigInt`] serializes as its canonical decimal string
//! and deserializes from either a string or a native integer.

use core::fmt;

use serde_core::de::{Deserialize, Deserializer, Error, Visitor};
use serde_core::ser::{Serialize, Serializer};

use crate::bigint::BigInt;

impl Serialize for BigInt {
    /// Serializes as the canonical decimal string, so no precision is lost
    /// in formats whose native numbers are bounded.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal string or an integer")
    }

    fn visit_str<E>(self, s: &str) -> Result<BigInt, E>
    where
        E: Error,
    {
        s.parse().map_err(Error::custom)
    }

    fn visit_i64<E>(self, n: i64) -> Result<BigInt, E>
    where
        E: Error,
    {
        Ok(BigInt::from(n))
    }

    fn visit_u64<E>(self, n: u64) -> Result<BigInt, E>
    where
        E: Error,
    {
        Ok(BigInt::from(n))
    }

    fn visit_i128<E>(self, n: i128) -> Result<BigInt, E>
    where
        E: Error,
    {
        Ok(BigInt::from(n))
    }

    fn visit_u128<E>(self, n: u128) -> Result<BigInt, E>
    where
        E: Error,
    {
        Ok(BigInt::from(n))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    /// Deserializes from a string or any integer a self-describing format
    /// hands the visitor.
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
