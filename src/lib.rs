//! The Bigwang crate provides an arbitrary-precision signed integer, for exact
//! integer maths beyond the width of the native integer types.
//!
//! The [`BigInt`] type supports the full set of arithmetic, bitwise,
//! relational, and shift operators, along with conversion to and from the
//! primitive integer types, strings in bases 2 to 16, two's-complement byte
//! arrays, JSON, and PostgreSQL integer and text columns.



//		Global configuration

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod bigint;
mod errors;
mod words;



//		Packages

pub use bigint::{BigInt, Sign};
pub use errors::{ArithmeticError, ConversionError};
