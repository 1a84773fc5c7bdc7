//! The signed arbitrary-precision integer type.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::{Error, Result};
use crate::math::{self, Limb};
use crate::sign::Sign;

/// An arbitrary-precision signed integer.
///
/// A `BigInt` is a [`Sign`] paired with a magnitude stored as little-endian
/// limbs. The representation is canonical: the magnitude never has trailing
/// zero limbs, zero is the empty magnitude with [`Sign::Zero`], and two
/// `BigInt`s are equal exactly when their representations are equal.
///
/// Values are immutable; every operation allocates a fresh result.
///
/// ```
/// use bigint::BigInt;
///
/// let a: BigInt = "123456789012345678901234567890".parse().unwrap();
/// let b = BigInt::from(3);
/// assert_eq!((&a * &b).to_string(), "370370367037037036703703703670");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    magnitude: Vec<Limb>,
}

impl BigInt {
    /// The value zero.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert!(BigInt::ZERO.is_zero());
    /// assert_eq!(BigInt::ZERO, BigInt::from(0));
    /// ```
    pub const ZERO: BigInt = BigInt {
        sign: Sign::Zero,
        magnitude: Vec::new(),
    };

    /// Builds a value from a sign and a raw little-endian magnitude,
    /// restoring the canonical form: trailing zero limbs are dropped and an
    /// empty magnitude forces the sign to zero.
    pub(crate) fn from_sign_magnitude(sign: Sign, mut magnitude: Vec<Limb>) -> BigInt {
        math::small::normalize(&mut magnitude);
        let sign = if magnitude.is_empty() { Sign::Zero } else { sign };
        debug_assert!(magnitude.is_empty() || sign != Sign::Zero);
        BigInt { sign, magnitude }
    }

    pub(crate) fn magnitude(&self) -> &[Limb] {
        &self.magnitude
    }

    pub(crate) fn into_magnitude(self) -> Vec<Limb> {
        self.magnitude
    }

    /// The sign of this value.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns true if this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Returns true if this value is less than zero.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert!(BigInt::from(-1).is_negative());
    /// assert!(!BigInt::ZERO.is_negative());
    /// ```
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns true if this value is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: match self.sign {
                Sign::Negative => Sign::Positive,
                sign => sign,
            },
            magnitude: self.magnitude.clone(),
        }
    }

    /// Truncating division and remainder in one pass.
    ///
    /// The quotient rounds toward zero, and the remainder takes the sign of
    /// the dividend, so `a == q * b + r` and `|r| < |b|` always hold.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!(q, BigInt::from(-3));
    /// assert_eq!(r, BigInt::from(-1));
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when `other` is zero.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt)> {
        if other.is_zero() {
            return Err(Error::division_by_zero());
        }
        let (q, r) = math::large::div_rem(&self.magnitude, &other.magnitude);
        Ok((
            BigInt::from_sign_magnitude(self.sign * other.sign, q),
            BigInt::from_sign_magnitude(self.sign, r),
        ))
    }

    /// Truncating division, as a fallible operation.
    ///
    /// The operator form `/` panics on a zero divisor the way the native
    /// integer operators do; this is the non-panicking equivalent.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let seven = BigInt::from(7);
    /// assert_eq!(seven.checked_div(&BigInt::from(2)).unwrap(), BigInt::from(3));
    /// assert!(seven.checked_div(&BigInt::ZERO).unwrap_err().is_division_by_zero());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when `other` is zero.
    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// Remainder of truncating division, as a fallible operation.
    ///
    /// # Errors
    ///
    /// Fails when `other` is zero.
    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt> {
        self.div_rem(other).map(|(_, r)| r)
    }
}

impl Ord for BigInt {
    /// Total order consistent with integer value: signs decide first, and
    /// equal non-zero signs fall back to magnitude order, inverted when both
    /// values are negative.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {
                let ord = math::large::compare(&self.magnitude, &other.magnitude);
                if self.sign == Sign::Negative {
                    ord.reverse()
                } else {
                    ord
                }
            }
            ord => ord,
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for BigInt {
    /// The default value is zero.
    #[inline]
    fn default() -> BigInt {
        BigInt::ZERO
    }
}
