//! Rendering [`BigInt`] values as canonical decimal strings.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

use crate::bigint::BigInt;
use crate::math::{self, Limb, DECIMAL_BASE, DECIMAL_DIGITS};

/// Renders a non-zero normal magnitude in decimal by dividing out one
/// limb-sized chunk of digits at a time, least significant chunk first.
/// Every chunk below the most significant one is zero-padded to full width.
fn magnitude_to_decimal(magnitude: &[Limb]) -> String {
    let mut rest = magnitude.to_vec();
    let mut chunks: Vec<Limb> = Vec::new();
    while !rest.is_empty() {
        chunks.push(math::small::idiv_rem(&mut rest, DECIMAL_BASE));
    }

    let mut out = String::with_capacity(chunks.len() * DECIMAL_DIGITS);
    let mut buf = itoa::Buffer::new();
    for (i, &chunk) in chunks.iter().enumerate().rev() {
        let digits = buf.format(chunk);
        if i + 1 != chunks.len() {
            for _ in digits.len()..DECIMAL_DIGITS {
                out.push('0');
            }
        }
        out.push_str(digits);
    }
    out
}

/// The canonical decimal form: a `-` prefix for negative values, no leading
/// zeros, and a single `0` for zero. Respects width, fill, and alignment
/// flags, including sign-aware zero padding.
///
/// ```
/// use bigint::BigInt;
///
/// let n: BigInt = "-123456789012345678901234567890".parse().unwrap();
/// assert_eq!(n.to_string(), "-123456789012345678901234567890");
/// assert_eq!(format!("{:08}", BigInt::from(-42)), "-0000042");
/// ```
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }
        let digits = magnitude_to_decimal(self.magnitude());
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

// Show the decimal value rather than raw limbs. Humans often end up seeing
// this representation because it is what unwrap() and assert_eq! show.
impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
