//! Operator overloads for [`BigInt`].
//!
//! The borrowed-operand impls hold the arithmetic; the owned-operand
//! combinations forward to them so every mix of `BigInt` and `&BigInt`
//! works on both sides of an operator.

use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::bigint::BigInt;
use crate::math::large;
use crate::sign::Sign;

macro_rules! forward_binop {
    (impl $imp:ident for BigInt, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                $imp::$method(&self, &other)
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &BigInt) -> BigInt {
                $imp::$method(&self, other)
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                $imp::$method(self, &other)
            }
        }
    };
}

forward_binop!(impl Add for BigInt, add);
forward_binop!(impl Sub for BigInt, sub);
forward_binop!(impl Mul for BigInt, mul);
forward_binop!(impl Div for BigInt, div);
forward_binop!(impl Rem for BigInt, rem);

/// Addition.
///
/// Same-sign operands add magnitudes; opposite-sign operands subtract the
/// smaller magnitude from the larger, and the operand with the larger
/// magnitude decides the sign of the result.
///
/// ```
/// use bigint::BigInt;
///
/// let a = BigInt::from(-5);
/// let b = BigInt::from(3);
/// assert_eq!(&a + &b, BigInt::from(-2));
/// assert_eq!(&a + &-&a, BigInt::ZERO);
/// ```
impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        match (self.sign(), other.sign()) {
            (_, Sign::Zero) => self.clone(),
            (Sign::Zero, _) => other.clone(),
            (x, y) if x == y => BigInt::from_sign_magnitude(
                x,
                large::add(self.magnitude(), other.magnitude()),
            ),
            (x, y) => match large::compare(self.magnitude(), other.magnitude()) {
                Ordering::Equal => BigInt::ZERO,
                Ordering::Greater => BigInt::from_sign_magnitude(
                    x,
                    large::sub(self.magnitude(), other.magnitude()),
                ),
                Ordering::Less => BigInt::from_sign_magnitude(
                    y,
                    large::sub(other.magnitude(), self.magnitude()),
                ),
            },
        }
    }
}

/// Subtraction, with the sign algebra of `a + (-b)` spelled out so the
/// right-hand side does not need to be cloned just to flip its sign.
///
/// ```
/// use bigint::BigInt;
///
/// let a = BigInt::from(3);
/// let b = BigInt::from(5);
/// assert_eq!(&a - &b, BigInt::from(-2));
/// assert_eq!(&a - &a, BigInt::ZERO);
/// ```
impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        match (self.sign(), other.sign()) {
            (_, Sign::Zero) => self.clone(),
            (Sign::Zero, y) => BigInt::from_sign_magnitude(-y, other.magnitude().to_vec()),
            (x, y) if x != y => BigInt::from_sign_magnitude(
                x,
                large::add(self.magnitude(), other.magnitude()),
            ),
            (x, _) => match large::compare(self.magnitude(), other.magnitude()) {
                Ordering::Equal => BigInt::ZERO,
                Ordering::Greater => BigInt::from_sign_magnitude(
                    x,
                    large::sub(self.magnitude(), other.magnitude()),
                ),
                Ordering::Less => BigInt::from_sign_magnitude(
                    -x,
                    large::sub(other.magnitude(), self.magnitude()),
                ),
            },
        }
    }
}

/// Multiplication, schoolbook over limbs.
///
/// ```
/// use bigint::BigInt;
///
/// let a: BigInt = "99999999999999999999".parse().unwrap();
/// let two = BigInt::from(2);
/// assert_eq!((&a * &two).to_string(), "199999999999999999998");
/// assert_eq!(&a * &BigInt::ZERO, BigInt::ZERO);
/// ```
impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        let sign = self.sign() * other.sign();
        if sign == Sign::Zero {
            return BigInt::ZERO;
        }
        BigInt::from_sign_magnitude(sign, large::long_mul(self.magnitude(), other.magnitude()))
    }
}

/// Division, truncating toward zero.
///
/// ```
/// use bigint::BigInt;
///
/// assert_eq!(BigInt::from(7) / BigInt::from(2), BigInt::from(3));
/// assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
/// ```
///
/// # Panics
///
/// Panics on a zero divisor, like the native integer operators. Use
/// [`BigInt::checked_div`] to handle that case as an error.
impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn div(self, other: &BigInt) -> BigInt {
        match self.checked_div(other) {
            Ok(q) => q,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Remainder of truncating division; the result takes the sign of the
/// dividend.
///
/// ```
/// use bigint::BigInt;
///
/// assert_eq!(BigInt::from(7) % BigInt::from(2), BigInt::from(1));
/// assert_eq!(BigInt::from(-7) % BigInt::from(2), BigInt::from(-1));
/// ```
///
/// # Panics
///
/// Panics on a zero divisor, like the native integer operators. Use
/// [`BigInt::checked_rem`] to handle that case as an error.
impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn rem(self, other: &BigInt) -> BigInt {
        match self.checked_rem(other) {
            Ok(r) => r,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Negation. Zero stays zero.
///
/// ```
/// use bigint::BigInt;
///
/// assert_eq!(-BigInt::from(5), BigInt::from(-5));
/// assert_eq!(-BigInt::ZERO, BigInt::ZERO);
/// ```
impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        BigInt::from_sign_magnitude(-self.sign(), self.into_magnitude())
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}
