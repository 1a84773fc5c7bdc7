//! When parsing, dividing, or converting a big integer goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur when constructing
/// or operating on a [`BigInt`](crate::BigInt).
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// A larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorCode>,
}

/// Alias for a `Result` with the error type `bigint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    ///
    /// Useful when precise error handling is required or translation of
    /// error messages is required.
    pub fn code(&self) -> &ErrorCode {
        &self.err
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Parse` - input that is not a valid decimal integer
    /// - `Category::Arithmetic` - an operation with no defined result
    /// - `Category::Conversion` - a value that does not fit the target type
    pub fn classify(&self) -> Category {
        match *self.err {
            ErrorCode::Empty | ErrorCode::InvalidDigit(_) => Category::Parse,
            ErrorCode::DivisionByZero => Category::Arithmetic,
            ErrorCode::OutOfRange => Category::Conversion,
        }
    }

    /// Returns true if this error was caused by input that was not a valid
    /// decimal integer.
    pub fn is_parse(&self) -> bool {
        self.classify() == Category::Parse
    }

    /// Returns true if this error was caused by dividing by a zero divisor.
    pub fn is_division_by_zero(&self) -> bool {
        *self.err == ErrorCode::DivisionByZero
    }

    /// Returns true if this error was caused by converting a value that does
    /// not fit in the target native integer type.
    pub fn is_out_of_range(&self) -> bool {
        self.classify() == Category::Conversion
    }
}

/// Categorizes the cause of a `bigint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input that was not a valid decimal integer:
    /// an empty string, a bare sign, or a non-digit byte.
    Parse,

    /// The error was caused by an operation with no defined result, which
    /// for this operation set means a zero divisor.
    Arithmetic,

    /// The error was caused by converting a value that does not fit in the
    /// target native integer type.
    Conversion,
}

/// This type describes all possible errors that can occur when constructing
/// or operating on a big integer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// Input was empty, or held a sign with no digits after it.
    Empty,

    /// Input held a byte that is not an ASCII digit, at this byte offset.
    InvalidDigit(usize),

    /// Divisor with a value of zero.
    DivisionByZero,

    /// Value does not fit in the requested native integer type.
    OutOfRange,
}

impl Error {
    #[cold]
    pub(crate) fn empty() -> Self {
        Error {
            err: Box::new(ErrorCode::Empty),
        }
    }

    #[cold]
    pub(crate) fn invalid_digit(offset: usize) -> Self {
        Error {
            err: Box::new(ErrorCode::InvalidDigit(offset)),
        }
    }

    #[cold]
    pub(crate) fn division_by_zero() -> Self {
        Error {
            err: Box::new(ErrorCode::DivisionByZero),
        }
    }

    #[cold]
    pub(crate) fn out_of_range() -> Self {
        Error {
            err: Box::new(ErrorCode::OutOfRange),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Empty => f.write_str("cannot parse integer from empty string"),
            ErrorCode::InvalidDigit(offset) => {
                f.write_fmt(format_args!("invalid digit found at byte {}", offset))
            }
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::OutOfRange => {
                f.write_str("number too large to fit in target type")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.err.to_string())
    }
}
