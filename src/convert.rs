//! Conversions between [`BigInt`] and the native integer types.

use crate::bigint::BigInt;
use crate::error::Error;
use crate::math;
use crate::sign::Sign;

// FROM NATIVE
// -----------

macro_rules! impl_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for BigInt {
            /// Converts the native integer exactly; this can never fail.
            #[inline]
            fn from(n: $t) -> BigInt {
                BigInt::from_sign_magnitude(Sign::Positive, math::from_u128(n as u128))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty)*) => {$(
        impl From<$t> for BigInt {
            /// Converts the native integer exactly; this can never fail.
            ///
            /// `unsigned_abs` keeps the minimum value representable, since
            /// its magnitude overflows the signed type itself.
            #[inline]
            fn from(n: $t) -> BigInt {
                let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
                BigInt::from_sign_magnitude(sign, math::from_u128(n.unsigned_abs() as u128))
            }
        }
    )*};
}

impl_from_unsigned!(u8 u16 u32 u64 u128 usize);
impl_from_signed!(i8 i16 i32 i64 i128 isize);

// TO NATIVE
// ---------

macro_rules! impl_try_into_unsigned {
    ($($t:ty)*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = Error;

            /// Fails when the value is negative or too large for the target.
            fn try_from(n: &BigInt) -> Result<$t, Error> {
                if n.is_negative() {
                    return Err(Error::out_of_range());
                }
                let wide = math::to_u128(n.magnitude()).ok_or_else(Error::out_of_range)?;
                <$t>::try_from(wide).map_err(|_| Error::out_of_range())
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = Error;

            #[inline]
            fn try_from(n: BigInt) -> Result<$t, Error> {
                <$t>::try_from(&n)
            }
        }
    )*};
}

macro_rules! impl_try_into_signed {
    ($($t:ty)*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = Error;

            /// Fails when the value is outside the target's range. The
            /// minimum value round-trips: its magnitude is `MAX + 1`.
            fn try_from(n: &BigInt) -> Result<$t, Error> {
                let wide = math::to_u128(n.magnitude()).ok_or_else(Error::out_of_range)?;
                if n.is_negative() {
                    if wide > <$t>::MAX as u128 + 1 {
                        Err(Error::out_of_range())
                    } else if wide == <$t>::MAX as u128 + 1 {
                        Ok(<$t>::MIN)
                    } else {
                        Ok(-(wide as $t))
                    }
                } else if wide > <$t>::MAX as u128 {
                    Err(Error::out_of_range())
                } else {
                    Ok(wide as $t)
                }
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = Error;

            #[inline]
            fn try_from(n: BigInt) -> Result<$t, Error> {
                <$t>::try_from(&n)
            }
        }
    )*};
}

impl_try_into_unsigned!(u32 u64 u128);
impl_try_into_signed!(i32 i64 i128);
