//! Parsing decimal strings into [`BigInt`] values.

use alloc::vec::Vec;
use core::str::FromStr;

use crate::bigint::BigInt;
use crate::error::Error;
use crate::math::{self, Limb, DECIMAL_DIGITS, POW10};
use crate::sign::Sign;

impl FromStr for BigInt {
    type Err = Error;

    /// Parses an optionally signed decimal string.
    ///
    /// Accepts an optional leading `+` or `-` followed by one or more ASCII
    /// digits. Leading zeros are accepted and canonicalized away, so
    /// `"007"` parses to the same value as `"7"`.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let n: BigInt = "-00123".parse().unwrap();
    /// assert_eq!(n.to_string(), "-123");
    ///
    /// assert!("".parse::<BigInt>().unwrap_err().is_parse());
    /// assert!("-".parse::<BigInt>().unwrap_err().is_parse());
    /// assert!("12a3".parse::<BigInt>().unwrap_err().is_parse());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when the input is empty, holds only a sign, or holds any byte
    /// that is not an ASCII digit; the error reports the byte offset of the
    /// first offending byte.
    fn from_str(s: &str) -> Result<BigInt, Error> {
        let bytes = s.as_bytes();
        let (sign, start) = match bytes.first() {
            None => return Err(Error::empty()),
            Some(b'-') => (Sign::Negative, 1),
            Some(b'+') => (Sign::Positive, 1),
            Some(_) => (Sign::Positive, 0),
        };

        let digits = &bytes[start..];
        if digits.is_empty() {
            return Err(Error::empty());
        }
        if let Some(bad) = digits.iter().position(|b| !b.is_ascii_digit()) {
            return Err(Error::invalid_digit(start + bad));
        }

        // Accumulate in the largest power-of-ten steps a limb can hold:
        // scale the running magnitude by 10^len(chunk), then add the chunk.
        // The last chunk may be short; the power matches its length.
        let mut magnitude = Vec::with_capacity(digits.len() / DECIMAL_DIGITS + 1);
        for chunk in digits.chunks(DECIMAL_DIGITS) {
            let mut value: Limb = 0;
            for &b in chunk {
                value = value * 10 + (b - b'0') as Limb;
            }
            math::small::imul(&mut magnitude, POW10[chunk.len()]);
            math::small::iadd(&mut magnitude, value);
        }

        Ok(BigInt::from_sign_magnitude(sign, magnitude))
    }
}
