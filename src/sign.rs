//! The sign component of a big integer.

use core::ops::{Mul, Neg};

/// The sign of a [`BigInt`](crate::BigInt).
///
/// The variants are declared in ascending order so the derived `Ord` agrees
/// with the numeric order: every negative value sorts below zero, which
/// sorts below every positive value.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Sign {
    /// The value is less than zero.
    Negative,
    /// The value is exactly zero. Zero carries no other sign.
    Zero,
    /// The value is greater than zero.
    Positive,
}

impl Neg for Sign {
    type Output = Sign;

    /// Negate the sign. Zero stays zero.
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    /// The sign of a product: zero absorbs, matching signs give positive,
    /// differing signs give negative.
    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (x, y) if x == y => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}
