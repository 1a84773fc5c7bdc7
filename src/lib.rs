//! Arbitrary-precision signed integer arithmetic.
//!
//! A [`BigInt`] represents a signed integer of size limited only by
//! available memory, stored as a [`Sign`] and a sequence of native limbs.
//! Results are always exact: construction from a decimal string or a native
//! integer, addition, subtraction, multiplication, truncating division,
//! comparison, and rendering back to decimal never approximate.
//!
//! ```
//! use bigint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b: BigInt = "-987654321".parse().unwrap();
//!
//! assert_eq!((&a + &b).to_string(), "123456789012345678900246913569");
//! assert!((&a * &b).is_negative());
//! assert!(b < a);
//! ```
//!
//! Values are immutable; operators take either owned values or references
//! and allocate a fresh result, so sharing a `BigInt` across threads needs
//! no coordination.
//!
//! # Errors
//!
//! Only three things can fail, all captured by [`Error`]: parsing malformed
//! input, dividing by zero through the checked methods (the `/` and `%`
//! operators panic like their native counterparts), and converting a value
//! into a native integer type too small to hold it. Everything else is
//! total.
//!
//! ```
//! use bigint::BigInt;
//!
//! let err = "12a3".parse::<BigInt>().unwrap_err();
//! assert!(err.is_parse());
//!
//! let err = BigInt::from(1).checked_div(&BigInt::ZERO).unwrap_err();
//! assert!(err.is_division_by_zero());
//! ```
//!
//! # No-std support
//!
//! With `default-features = false` the crate is `no_std` and only requires
//! `alloc`. The optional `serde` feature serializes a `BigInt` as its
//! canonical decimal string.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::comparison_chain)]

extern crate alloc;

mod bigint;
mod convert;
mod error;
mod fmt;
mod math;
mod ops;
mod parse;
#[cfg(feature = "serde")]
mod ser;
mod sign;

pub use crate::bigint::BigInt;
pub use crate::error::{Category, Error, ErrorCode, Result};
pub use crate::sign::Sign;
