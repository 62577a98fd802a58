//! Contains error types used throughout the library.



//		Packages

use core::num::TryFromIntError;
use thiserror::Error as ThisError;



//		Enums

//		ArithmeticError
/// Represents all possible arithmetic errors that can occur.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The divisor of a division or remainder operation is zero.
	#[error("Division by zero")]
	DivisionByZero,

	/// A square root was requested for a negative value.
	#[error("Square root of negative value")]
	NegativeSquareRoot,
}

//		ConversionError
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,

	/// The requested base is not supported for formatting.
	#[error("Invalid base: {0} (must be in the range 2-16)")]
	InvalidBase(u32),

	/// The incoming value contains a character that is not a digit.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The incoming value contains a digit that is not valid for the base.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u32),

	/// The value is not a valid integer for the destination type.
	#[error("Invalid integer for destination type: {0}")]
	TryFromIntError(#[from] TryFromIntError),

	/// The value is negative, which is not allowed by the destination type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,

	/// The value is too small to be converted to the destination type.
	#[error("Value too small")]
	ValueTooSmall,
}
