//! Arbitrary-precision signed integer type.

//	Digit lookups are bounded by the base, which is validated up front.
#![allow(clippy::indexing_slicing, reason = "Digit values are always less than the base")]



//		Modules

#[cfg(test)]
#[path = "tests/bigint.rs"]
mod tests;



//		Packages

use crate::{
	errors::{ArithmeticError, ConversionError},
	words::{self, Word, WORD_BITS},
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};
use tracing::trace;



//		Constants

/// Digit characters for bases up to 16, indexed by digit value.
const DIGITS: &[u8; 16] = b"0123456789ABCDEF";



//		Enums

//		Sign
/// The sign of a [`BigInt`].
///
/// Zero has no signed variants, and is always [`Sign::NonNegative`].
///
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Sign {
	/// Strictly less than zero.
	Negative,

	/// Zero, or greater than zero.
	NonNegative,
}

//󰭅		Sign
impl Sign {
	//		product
	/// The sign of the product (or quotient) of two values with these signs.
	const fn product(self, rhs: Self) -> Self {
		match (self, rhs) {
			(Self::Negative, Self::Negative) | (Self::NonNegative, Self::NonNegative) => Self::NonNegative,
			_                                                                         => Self::Negative,
		}
	}
}

//󰭅		Neg
impl Neg for Sign {
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		match self {
			Self::Negative    => Self::NonNegative,
			Self::NonNegative => Self::Negative,
		}
	}
}



//		Structs

//		BigInt
/// An arbitrary-precision signed integer.
///
/// This type provides an integer with no fixed bit width, supporting the same
/// arithmetic, bitwise, relational, and conversion operations as the native
/// integer types.
///
/// # Arithmetic
///
/// Addition, subtraction, and multiplication never overflow; the value simply
/// grows as needed. Multiplication uses the schoolbook method, and division
/// uses Knuth's Algorithm D.
///
/// Division and remainder follow the truncating convention used by Rust's
/// primitive integers: the quotient is rounded towards zero, and the
/// remainder carries the sign of the dividend, with an absolute value smaller
/// than that of the divisor.
///
/// As with the primitive types, the `/` and `%` operators panic when the
/// divisor is zero. The [`div_rem()`](BigInt::div_rem()),
/// [`checked_div()`](BigInt::checked_div()), and
/// [`checked_rem()`](BigInt::checked_rem()) methods are available to handle
/// that case without panicking.
///
/// # Bitwise operations
///
/// The bitwise operators behave as though the value were stored in two's
/// complement with infinite sign extension, i.e. exactly like the primitive
/// signed types, so `-1 & x == x` and `!x == -(x + 1)`.
///
/// Shifts are different: they operate on the magnitude and keep the sign, so
/// a right shift of a negative value rounds towards zero. A negative shift
/// amount shifts in the opposite direction.
///
/// # Conversion
///
/// [`From`] is implemented for all the primitive integer types, as the
/// conversion can never fail. Conversion back is potentially lossy, so
/// [`TryFrom`] is implemented instead, returning an error when the value does
/// not fit into the destination type.
///
/// Strings can be parsed in decimal, or in hexadecimal, octal, or binary when
/// given a `0x`, `0o`, or `0b` prefix, each optionally preceded by a `-`.
///
/// # Internal representation
///
/// The value is stored in sign-magnitude form: a [`Sign`], and the magnitude
/// as a sequence of 32-bit words in little-endian order (least-significant
/// word first). The magnitude never has most-significant zero words, except
/// for zero itself, which is a single zero word and always non-negative. As
/// every operation maintains this canonical form, equality and hashing can
/// work directly on the stored representation.
///
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BigInt {
	/// The sign of the value.
	sign:  Sign,

	/// The magnitude of the value, least-significant word first.
	words: Vec<Word>,
}

//󰭅		BigInt
impl BigInt {
	//		Constructors

	//		from_parts
	/// Creates a [`BigInt`] from a sign and a magnitude, restoring the
	/// canonical form.
	fn from_parts(sign: Sign, mut words: Vec<Word>) -> Self {
		words::clamp(&mut words);
		let sign = if words::is_zero(&words) { Sign::NonNegative } else { sign };
		Self { sign, words }
	}

	//		from_u128
	/// Creates a [`BigInt`] from an unsigned 128-bit magnitude.
	fn from_u128(sign: Sign, value: u128) -> Self {
		#[expect(clippy::cast_possible_truncation, reason = "Each word is masked by the shift")]
		let words = (0..u128::BITS / WORD_BITS)
			.map(|i| (value >> (i * WORD_BITS)) as Word)
			.collect()
		;
		Self::from_parts(sign, words)
	}

	//		from_i128
	/// Creates a [`BigInt`] from a signed 128-bit value.
	///
	/// Taking the unsigned absolute value avoids overflowing on the minimum
	/// value, whose magnitude is one more than the maximum.
	///
	fn from_i128(value: i128) -> Self {
		let sign = if value < 0 { Sign::Negative } else { Sign::NonNegative };
		Self::from_u128(sign, value.unsigned_abs())
	}

	//		one
	/// Creates a [`BigInt`] with the value one.
	#[must_use]
	pub fn one() -> Self {
		Self { sign: Sign::NonNegative, words: vec![1] }
	}

	//		zero
	/// Creates a [`BigInt`] with the value zero.
	#[must_use]
	pub fn zero() -> Self {
		Self { sign: Sign::NonNegative, words: vec![0] }
	}

	//		Public methods

	//		abs
	/// Computes the absolute value.
	#[must_use]
	pub fn abs(&self) -> Self {
		Self { sign: Sign::NonNegative, words: self.words.clone() }
	}

	//		bits
	/// Returns the number of significant bits in the magnitude.
	///
	/// Zero has no significant bits.
	///
	#[expect(clippy::arithmetic_side_effects, reason = "Word count times 32 cannot overflow u64")]
	#[must_use]
	pub fn bits(&self) -> u64 {
		let top = self.words.last().copied().unwrap_or(0);
		(self.words.len() as u64 - 1) * u64::from(WORD_BITS) + u64::from(WORD_BITS - top.leading_zeros())
	}

	//		checked_div
	/// Checked division.
	///
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
		self.div_rem(rhs).ok().map(|(quotient, _)| quotient)
	}

	//		checked_rem
	/// Checked remainder.
	///
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
		self.div_rem(rhs).ok().map(|(_, remainder)| remainder)
	}

	//		compare
	/// Three-way signed comparison.
	///
	/// All the relational operators are derived from this. Negative values
	/// order below non-negative ones regardless of magnitude; otherwise the
	/// magnitudes decide, in reverse for two negative values.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to compare `self` with.
	///
	#[must_use]
	pub fn compare(&self, rhs: &Self) -> Ordering {
		match (self.sign, rhs.sign) {
			(Sign::Negative,    Sign::NonNegative) => Ordering::Less,
			(Sign::NonNegative, Sign::Negative)    => Ordering::Greater,
			(Sign::NonNegative, Sign::NonNegative) => words::compare(&self.words, &rhs.words),
			(Sign::Negative,    Sign::Negative)    => words::compare(&rhs.words, &self.words),
		}
	}

	//		compare_magnitude
	/// Three-way comparison of absolute values, ignoring sign.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to compare `self` with.
	///
	#[must_use]
	pub fn compare_magnitude(&self, rhs: &Self) -> Ordering {
		words::compare(&self.words, &rhs.words)
	}

	//		div_rem
	/// Computes the quotient and remainder of truncating division together.
	///
	/// The quotient is rounded towards zero, and the remainder has the sign of
	/// `self` and an absolute value smaller than that of `rhs`, so that
	/// `self == quotient * rhs + remainder` always holds.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
	///
	pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
		if rhs.is_zero() {
			return Err(ArithmeticError::DivisionByZero);
		}

		let (quotient, remainder) = words::div_rem(&self.words, &rhs.words);

		Ok((
			Self::from_parts(self.sign.product(rhs.sign), quotient),
			Self::from_parts(self.sign, remainder),
		))
	}

	//		from_be_bytes
	/// Creates a [`BigInt`] from big-endian two's-complement bytes.
	///
	/// This is the inverse of [`to_be_bytes()`](BigInt::to_be_bytes()). The
	/// top bit of the first byte is the sign, and an empty slice is zero.
	///
	/// # Parameters
	///
	/// * `bytes` - The big-endian bytes to create the [`BigInt`] from.
	///
	#[must_use]
	pub fn from_be_bytes(bytes: &[u8]) -> Self {
		match bytes.first() {
			Some(&first) if first & 0x80 != 0 => {
				let extended = words::unpack_be(bytes, 0xFF);
				Self::from_parts(Sign::Negative, words::invert(&extended, extended.len()))
			},
			_                                 => Self::from_parts(Sign::NonNegative, words::unpack_be(bytes, 0x00)),
		}
	}

	//		from_json
	/// Deserialises a JSON string into a [`BigInt`].
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON string is invalid, or the number inside the JSON is invalid,
	/// then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		from_le_bytes
	/// Creates a [`BigInt`] from little-endian two's-complement bytes.
	///
	/// This is the inverse of [`to_le_bytes()`](BigInt::to_le_bytes()).
	///
	/// # Parameters
	///
	/// * `bytes` - The little-endian bytes to create the [`BigInt`] from.
	///
	#[must_use]
	pub fn from_le_bytes(bytes: &[u8]) -> Self {
		let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
		Self::from_be_bytes(&reversed)
	}

	//		from_str_radix
	/// Parses a string of digits in the given base into a [`BigInt`].
	///
	/// The string is an optional `-` followed by one or more digits, without
	/// any base prefix. Letters are accepted as digits in either case. This is
	/// the inverse of [`to_str_radix()`](BigInt::to_str_radix()).
	///
	/// # Parameters
	///
	/// * `s`    - The string to parse.
	/// * `base` - The base to use, from 2 to 16 inclusive.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::InvalidBase`] if the base is out of range, or
	/// another [`ConversionError`] if the string is not a valid integer in
	/// that base.
	///
	pub fn from_str_radix(s: &str, base: u32) -> Result<Self, ConversionError> {
		if !(2..=16).contains(&base) {
			return Err(ConversionError::InvalidBase(base));
		}
		let (sign, digits) = s.strip_prefix('-')
			.map_or((Sign::NonNegative, s), |rest| (Sign::Negative, rest))
		;
		Self::from_digits(sign, digits, base)
	}

	//		is_negative
	/// Determines if the value is negative.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.sign == Sign::Negative
	}

	//		is_positive
	/// Determines if the value is strictly positive.
	#[must_use]
	pub fn is_positive(&self) -> bool {
		self.sign == Sign::NonNegative && !self.is_zero()
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		words::is_zero(&self.words)
	}

	//		parse
	/// Parses a string into a [`BigInt`].
	///
	/// This is a convenience wrapper around [`FromStr`]; see there for the
	/// accepted format.
	///
	/// # Parameters
	///
	/// * `s` - The string to parse.
	///
	/// # Errors
	///
	/// Returns an error if the string is not a valid integer.
	///
	pub fn parse(s: &str) -> Result<Self, ConversionError> {
		s.parse()
	}

	//		pow
	/// Raises the value to the power of `exp`, by repeated squaring.
	///
	/// # Parameters
	///
	/// * `exp` - The exponent.
	///
	#[must_use]
	pub fn pow(&self, mut exp: u32) -> Self {
		let mut base   = self.clone();
		let mut result = Self::one();

		while exp > 0 {
			if exp & 1 == 1 {
				result = &result * &base;
			}
			exp >>= 1;
			if exp > 0 {
				base = &base * &base;
			}
		}

		result
	}

	//		sign
	/// Returns the sign of the value.
	#[must_use]
	pub const fn sign(&self) -> Sign {
		self.sign
	}

	//		signum
	/// Returns `-1`, `0`, or `1` according to the sign of the value.
	#[must_use]
	pub fn signum(&self) -> Self {
		match (self.sign, self.is_zero()) {
			(_,                 true)  => Self::zero(),
			(Sign::NonNegative, false) => Self::one(),
			(Sign::Negative,    false) => -Self::one(),
		}
	}

	//		size
	/// Returns the size of the stored magnitude in bytes.
	#[must_use]
	pub fn size(&self) -> usize {
		self.words.len().saturating_mul(size_of::<Word>())
	}

	//		sqrt
	/// Computes the integer square root, i.e. the largest value whose square
	/// does not exceed `self`.
	///
	/// This performs a binary search between one and half the value, using
	/// only division and multiplication, so it is exact for any size of input.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::NegativeSquareRoot`] if the value is
	/// negative.
	///
	pub fn sqrt(&self) -> Result<Self, ArithmeticError> {
		if self.is_negative() {
			return Err(ArithmeticError::NegativeSquareRoot);
		}
		if words::compare(&self.words, &[1]) != Ordering::Greater {
			return Ok(self.clone());
		}

		let one    = Self::one();
		let mut lo = Self::one();
		let mut hi = &self.halve() + &one;

		while &lo + &one < hi {
			let mid    = (&lo + &hi).halve();
			let square = &mid * &mid;

			match square.compare(self) {
				Ordering::Equal   => {
					lo = mid;
					break;
				},
				Ordering::Less    => lo = mid,
				Ordering::Greater => hi = mid,
			}
		}

		trace!(bits = self.bits(), root_bits = lo.bits(), "Square root found");
		Ok(lo)
	}

	//		to_be_bytes
	/// Returns the value as big-endian two's-complement bytes.
	///
	/// The encoding is the shortest that preserves the sign: the top bit of the
	/// first byte is set exactly when the value is negative, and zero is a
	/// single zero byte.
	///
	#[must_use]
	pub fn to_be_bytes(&self) -> Vec<u8> {
		let fill      = if self.is_negative() { 0xFF } else { 0x00 };
		let mut bytes = words::pack_be(&self.twos_complement(self.words.len().saturating_add(1)));

		//	Drop sign-extension bytes that the next byte makes redundant
		let redundant = bytes
			.windows(2)
			.take_while(|pair| matches!(*pair, [high, low] if *high == fill && (low ^ fill) & 0x80 == 0))
			.count()
		;
		drop(bytes.drain(..redundant));

		bytes
	}

	//		to_json
	/// Serialises the value to a JSON string.
	///
	/// # Errors
	///
	/// If the value cannot be serialised, an error will be returned.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_le_bytes
	/// Returns the value as little-endian two's-complement bytes.
	#[must_use]
	pub fn to_le_bytes(&self) -> Vec<u8> {
		let mut bytes = self.to_be_bytes();
		bytes.reverse();
		bytes
	}

	//		to_str_radix
	/// Formats the value in the given base, without a prefix.
	///
	/// Digits above nine are written as uppercase letters. Zero is always
	/// written as `"0"`.
	///
	/// # Parameters
	///
	/// * `base` - The base to use, from 2 to 16 inclusive.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::InvalidBase`] if the base is out of range.
	///
	pub fn to_str_radix(&self, base: u32) -> Result<String, ConversionError> {
		self.to_str_radix_prefixed(base, "")
	}

	//		to_str_radix_prefixed
	/// Formats the value in the given base, with a literal prefix.
	///
	/// The prefix is written after any minus sign and before the digits, so
	/// that e.g. `-255` in base 16 with a prefix of `"0x"` is `"-0xFF"`, which
	/// parses back to the same value. Zero is always written as `"0"`.
	///
	/// # Parameters
	///
	/// * `base`   - The base to use, from 2 to 16 inclusive.
	/// * `prefix` - The prefix to write before the digits.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::InvalidBase`] if the base is out of range.
	///
	pub fn to_str_radix_prefixed(&self, base: u32, prefix: &str) -> Result<String, ConversionError> {
		if !(2..=16).contains(&base) {
			return Err(ConversionError::InvalidBase(base));
		}
		if self.is_zero() {
			return Ok(String::from("0"));
		}

		let digits     = self.magnitude_digits(base);
		let mut result = String::with_capacity(digits.len() + prefix.len() + 1);
		if self.is_negative() {
			result.push('-');
		}
		result.push_str(prefix);
		result.push_str(&digits);

		Ok(result)
	}

	//		words
	/// Represents the magnitude as a slice of 32-bit words, least-significant
	/// first.
	#[must_use]
	pub fn words(&self) -> &[u32] {
		&self.words
	}

	//		Private methods

	//		add_signed
	/// Adds a value with the given sign to `self`.
	///
	/// Subtraction passes the negated sign of its right-hand side, so both
	/// operations share this one dispatch on sign equality.
	///
	fn add_signed(&self, rhs: &Self, rhs_sign: Sign) -> Self {
		if self.sign == rhs_sign {
			return Self::from_parts(self.sign, words::add(&self.words, &rhs.words));
		}

		match words::compare(&self.words, &rhs.words) {
			Ordering::Equal   => Self::zero(),
			Ordering::Greater => Self::from_parts(self.sign, words::sub(&self.words, &rhs.words)),
			Ordering::Less    => Self::from_parts(rhs_sign,  words::sub(&rhs.words,  &self.words)),
		}
	}

	//		bitwise
	/// Applies a bitwise operation with two's-complement semantics.
	///
	/// Both operands are widened to one word more than the longer of the two,
	/// which leaves room for the sign, and negative operands are replaced by
	/// their two's-complement encoding. The words are combined with `op`, and
	/// if `negative` says the result is negative, the combined encoding is
	/// inverted again to recover the magnitude.
	///
	fn bitwise<F, S>(&self, rhs: &Self, op: F, negative: S) -> Self
	where
		F: Fn(Word, Word) -> Word,
		S: Fn(bool, bool) -> bool,
	{
		let len      = self.words.len().max(rhs.words.len()).saturating_add(1);
		let lhs_bits = self.twos_complement(len);
		let rhs_bits = rhs.twos_complement(len);
		let combined = lhs_bits.iter().zip(&rhs_bits).map(|(&a, &b)| op(a, b)).collect::<Vec<_>>();

		if negative(self.is_negative(), rhs.is_negative()) {
			Self::from_parts(Sign::Negative, words::invert(&combined, len))
		} else {
			Self::from_parts(Sign::NonNegative, combined)
		}
	}

	//		from_digits
	/// Accumulates a string of digits in the given base into a [`BigInt`].
	fn from_digits(sign: Sign, digits: &str, radix: u32) -> Result<Self, ConversionError> {
		if digits.is_empty() {
			return Err(ConversionError::EmptyValue);
		}

		let mut magnitude = vec![0];
		for c in digits.chars() {
			let digit = c.to_digit(36).ok_or(ConversionError::InvalidDigit(c))?;
			if digit >= radix {
				return Err(ConversionError::InvalidRadix(c, radix));
			}
			words::mul_add_word(&mut magnitude, radix, digit);
		}

		Ok(Self::from_parts(sign, magnitude))
	}

	//		halve
	/// Divides a non-negative value by two.
	fn halve(&self) -> Self {
		Self::from_parts(self.sign, words::div_rem_word(&self.words, 2).0)
	}

	//		low_u128
	/// Folds up to the lowest four words of the magnitude into a [`u128`].
	fn low_u128(&self) -> u128 {
		self.words.iter().take(4).rev().fold(0, |acc, &word| (acc << WORD_BITS) | u128::from(word))
	}

	//		magnitude_digits
	/// Writes out the digits of the magnitude in the given base.
	///
	/// The digits are collected least-significant first by repeated division,
	/// then reversed.
	///
	fn magnitude_digits(&self, base: u32) -> String {
		let mut digits    = Vec::new();
		let mut remaining = self.words.clone();

		loop {
			let (quotient, digit) = words::div_rem_word(&remaining, base);
			digits.push(DIGITS[digit as usize]);
			if words::is_zero(&quotient) {
				break;
			}
			remaining = quotient;
		}

		digits.iter().rev().map(|&digit| char::from(digit)).collect()
	}

	//		shift
	/// Shifts the magnitude by a signed amount, keeping the sign.
	///
	/// A negative amount shifts in the opposite direction.
	///
	fn shift<T>(&self, bits: T, left: bool) -> Self
	where
		i64: From<T>,
	{
		let bits = i64::from(bits);
		self.shift_unsigned(bits.unsigned_abs(), (bits >= 0) == left)
	}

	//		shift_unsigned
	/// Shifts the magnitude, keeping the sign.
	///
	/// Amounts that do not fit into a [`usize`] saturate.
	///
	fn shift_unsigned<T>(&self, bits: T, left: bool) -> Self
	where
		usize: TryFrom<T>,
	{
		let amount = usize::try_from(bits).unwrap_or(usize::MAX);
		let words  = if left {
			words::shl(&self.words, amount)
		} else {
			words::shr(&self.words, amount)
		};
		Self::from_parts(self.sign, words)
	}

	//		twos_complement
	/// Returns the two's-complement encoding of the value in `len` words.
	fn twos_complement(&self, len: usize) -> Vec<Word> {
		if self.is_negative() {
			words::invert(&self.words, len)
		} else {
			let mut encoded = self.words.clone();
			encoded.resize(len, 0);
			encoded
		}
	}
}

//󰭅		Add
impl Add<&BigInt> for &BigInt {
	type Output = BigInt;

	//		add
	fn add(self, rhs: &BigInt) -> Self::Output {
		self.add_signed(rhs, rhs.sign)
	}
}

//󰭅		Binary
impl Binary for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "0b", &self.magnitude_digits(2))
	}
}

//󰭅		BitAnd
impl BitAnd<&BigInt> for &BigInt {
	type Output = BigInt;

	//		bitand
	fn bitand(self, rhs: &BigInt) -> Self::Output {
		self.bitwise(rhs, |a, b| a & b, |a, b| a && b)
	}
}

//󰭅		BitOr
impl BitOr<&BigInt> for &BigInt {
	type Output = BigInt;

	//		bitor
	fn bitor(self, rhs: &BigInt) -> Self::Output {
		self.bitwise(rhs, |a, b| a | b, |a, b| a || b)
	}
}

//󰭅		BitXor
impl BitXor<&BigInt> for &BigInt {
	type Output = BigInt;

	//		bitxor
	fn bitxor(self, rhs: &BigInt) -> Self::Output {
		self.bitwise(rhs, |a, b| a ^ b, |a, b| a != b)
	}
}

//󰭅		Debug
impl Debug for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "BigInt({self})")?;

		//	For alternate formatting (#), show the stored words
		if f.alternate() {
			write!(f, " {{ sign: {:?}, words: [", self.sign)?;
			for (i, word) in self.words.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{word:08x}")?;
			}
			write!(f, "] }}")?;
		}

		Ok(())
	}
}

//󰭅		Default
impl Default for BigInt {
	//		default
	fn default() -> Self {
		Self::zero()
	}
}

//󰭅		Deserialize
impl<'de> Deserialize<'de> for BigInt {
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(BigIntVisitor)
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(BigIntVisitor)
		}
	}
}

//󰭅		Display
impl Display for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "", &self.magnitude_digits(10))
	}
}

//󰭅		Div
impl Div<&BigInt> for &BigInt {
	type Output = BigInt;

	//		div
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: &BigInt) -> Self::Output {
		self.checked_div(rhs).expect("Attempt to divide by zero")
	}
}

//󰭅		FromSql
impl<'a> FromSql<'a> for BigInt {
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2                 => Ok(Self::from(i16::from_sql(ty, raw)?)),
			&Type::INT4                 => Ok(Self::from(i32::from_sql(ty, raw)?)),
			&Type::INT8                 => Ok(Self::from(i64::from_sql(ty, raw)?)),
			&Type::TEXT | &Type::VARCHAR => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			unknown                     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigInt: {unknown}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
}

//󰭅		FromStr
impl FromStr for BigInt {
	type Err = ConversionError;

	//		from_str
	/// Parses a string into a [`BigInt`].
	///
	/// The accepted format is an optional `-`, an optional `0x`, `0o`, or `0b`
	/// prefix selecting base 16, 8, or 2 (otherwise base 10), and then one or
	/// more digits. Letters are accepted as digits in either case, but each
	/// digit must be valid for the selected base.
	///
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (sign, unsigned) = s.strip_prefix('-')
			.map_or((Sign::NonNegative, s), |rest| (Sign::Negative, rest))
		;

		#[expect(clippy::option_if_let_else, reason = "Clearer to read as if-let-else")]
		let (radix, digits) =
			if        let Some(rest) = unsigned.strip_prefix("0x") {
				(16, rest)
			} else if let Some(rest) = unsigned.strip_prefix("0o") {
				(8, rest)
			} else if let Some(rest) = unsigned.strip_prefix("0b") {
				(2, rest)
			} else {
				(10, unsigned)
			}
		;

		Self::from_digits(sign, digits, radix)
	}
}

//󰭅		LowerHex
impl LowerHex for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "0x", &self.magnitude_digits(16).to_ascii_lowercase())
	}
}

//󰭅		Mul
impl Mul<&BigInt> for &BigInt {
	type Output = BigInt;

	//		mul
	fn mul(self, rhs: &BigInt) -> Self::Output {
		BigInt::from_parts(self.sign.product(rhs.sign), words::mul(&self.words, &rhs.words))
	}
}

//󰭅		Neg
impl Neg for &BigInt {
	type Output = BigInt;

	//		neg
	fn neg(self) -> Self::Output {
		BigInt::from_parts(-self.sign, self.words.clone())
	}
}

//󰭅		Neg
impl Neg for BigInt {
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		Self::from_parts(-self.sign, self.words)
	}
}

//󰭅		Not
impl Not for &BigInt {
	type Output = BigInt;

	//		not
	fn not(self) -> Self::Output {
		-(self + &BigInt::one())
	}
}

//󰭅		Not
impl Not for BigInt {
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		!&self
	}
}

//󰭅		Octal
impl Octal for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "0o", &self.magnitude_digits(8))
	}
}

//󰭅		Ord
impl Ord for BigInt {
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		self.compare(other)
	}
}

//󰭅		PartialOrd
impl PartialOrd for BigInt {
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product
impl Product for BigInt {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| acc * x)
	}
}

//󰭅		Product<&>
impl<'a> Product<&'a Self> for BigInt {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, x| acc * x)
	}
}

//󰭅		Rem
impl Rem<&BigInt> for &BigInt {
	type Output = BigInt;

	//		rem
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: &BigInt) -> Self::Output {
		self.checked_rem(rhs).expect("Attempt to calculate the remainder with a divisor of zero")
	}
}

//󰭅		Serialize
impl Serialize for BigInt {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as number if it fits in i64/u64
			if let Ok(v) = i64::try_from(self) {
				return serializer.serialize_i64(v);
			}
			if let Ok(v) = u64::try_from(self) {
				return serializer.serialize_u64(v);
			}
			//	Fall back to string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise two's-complement bytes
			serializer.serialize_bytes(&self.to_be_bytes())
		}
	}
}

//󰭅		Sub
impl Sub<&BigInt> for &BigInt {
	type Output = BigInt;

	//		sub
	fn sub(self, rhs: &BigInt) -> Self::Output {
		self.add_signed(rhs, -rhs.sign)
	}
}

//󰭅		Sum
impl Sum for BigInt {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>
impl<'a> Sum<&'a Self> for BigInt {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc + x)
	}
}

//󰭅		ToSql
impl ToSql for BigInt {
	//		to_sql
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2                 => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4                 => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8                 => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT | &Type::VARCHAR => self.to_string().to_sql(ty, out),
			unknown                     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigInt: {unknown}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}

	to_sql_checked!();
}

//󰭅		UpperHex
impl UpperHex for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "0x", &self.magnitude_digits(16))
	}
}

//		BigIntVisitor
/// A visitor for deserialising integers from numbers, strings, or bytes.
struct BigIntVisitor;

//󰭅		Visitor
impl Visitor<'_> for BigIntVisitor {
	type Value = BigInt;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer, an integer string, or two's-complement bytes")
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from_be_bytes(v))
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}

	//		visit_i128
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}

	//		visit_u128
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}
}



//		Macros

//		forward_binop!
/// Implements a binary operator for every combination of owned and borrowed
/// operands, plus its compound-assignment form, in terms of the
/// borrowed-borrowed implementation.
macro_rules! forward_binop {
	($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident);* $(;)?) => {$(
		//󰭅		$trait
		impl $trait<BigInt> for BigInt {
			type Output = BigInt;

			fn $method(self, rhs: BigInt) -> Self::Output {
				<&BigInt as $trait<&BigInt>>::$method(&self, &rhs)
			}
		}

		//󰭅		$trait
		impl $trait<&BigInt> for BigInt {
			type Output = BigInt;

			fn $method(self, rhs: &BigInt) -> Self::Output {
				<&BigInt as $trait<&BigInt>>::$method(&self, rhs)
			}
		}

		//󰭅		$trait
		impl $trait<BigInt> for &BigInt {
			type Output = BigInt;

			fn $method(self, rhs: BigInt) -> Self::Output {
				<&BigInt as $trait<&BigInt>>::$method(self, &rhs)
			}
		}

		//󰭅		$assign_trait
		impl $assign_trait<BigInt> for BigInt {
			fn $assign_method(&mut self, rhs: BigInt) {
				*self = <&BigInt as $trait<&BigInt>>::$method(self, &rhs);
			}
		}

		//󰭅		$assign_trait
		impl $assign_trait<&BigInt> for BigInt {
			fn $assign_method(&mut self, rhs: &BigInt) {
				*self = <&BigInt as $trait<&BigInt>>::$method(self, rhs);
			}
		}
	)*};
}

forward_binop! {
	Add,    add,    AddAssign,    add_assign;
	Sub,    sub,    SubAssign,    sub_assign;
	Mul,    mul,    MulAssign,    mul_assign;
	Div,    div,    DivAssign,    div_assign;
	Rem,    rem,    RemAssign,    rem_assign;
	BitAnd, bitand, BitAndAssign, bitand_assign;
	BitOr,  bitor,  BitOrAssign,  bitor_assign;
	BitXor, bitxor, BitXorAssign, bitxor_assign;
}

//		impl_shift!
/// Implements the shift operators for a shift amount type, via the given
/// private shift method.
macro_rules! impl_shift {
	($method:ident: $($t:ty),*) => {$(
		//󰭅		Shl
		impl Shl<$t> for &BigInt {
			type Output = BigInt;

			fn shl(self, rhs: $t) -> Self::Output {
				self.$method(rhs, true)
			}
		}

		//󰭅		Shl
		impl Shl<$t> for BigInt {
			type Output = BigInt;

			fn shl(self, rhs: $t) -> Self::Output {
				self.$method(rhs, true)
			}
		}

		//󰭅		ShlAssign
		impl ShlAssign<$t> for BigInt {
			fn shl_assign(&mut self, rhs: $t) {
				*self = self.$method(rhs, true);
			}
		}

		//󰭅		Shr
		impl Shr<$t> for &BigInt {
			type Output = BigInt;

			fn shr(self, rhs: $t) -> Self::Output {
				self.$method(rhs, false)
			}
		}

		//󰭅		Shr
		impl Shr<$t> for BigInt {
			type Output = BigInt;

			fn shr(self, rhs: $t) -> Self::Output {
				self.$method(rhs, false)
			}
		}

		//󰭅		ShrAssign
		impl ShrAssign<$t> for BigInt {
			fn shr_assign(&mut self, rhs: $t) {
				*self = self.$method(rhs, false);
			}
		}
	)*};
}

impl_shift!(shift:          i32, i64);
impl_shift!(shift_unsigned: u32, usize);

//		impl_from_signed!
/// Implements the lossless conversion from a primitive signed integer.
macro_rules! impl_from_signed {
	($($t:ty),*) => {$(
		//󰭅		From: $t -> BigInt
		impl From<$t> for BigInt {
			#[allow(clippy::cast_lossless, trivial_numeric_casts, reason = "Widening to i128 is always lossless")]
			fn from(v: $t) -> Self {
				Self::from_i128(v as i128)
			}
		}
	)*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);

//		impl_from_unsigned!
/// Implements the lossless conversion from a primitive unsigned integer.
macro_rules! impl_from_unsigned {
	($($t:ty),*) => {$(
		//󰭅		From: $t -> BigInt
		impl From<$t> for BigInt {
			#[allow(clippy::cast_lossless, trivial_numeric_casts, reason = "Widening to u128 is always lossless")]
			fn from(v: $t) -> Self {
				Self::from_u128(Sign::NonNegative, v as u128)
			}
		}
	)*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

//		impl_try_from_signed!
/// Implements the range-checked conversion to a primitive signed integer.
macro_rules! impl_try_from_signed {
	($($t:ty),*) => {$(
		//󰭅		TryFrom: &BigInt -> $t
		impl TryFrom<&BigInt> for $t {
			type Error = ConversionError;

			fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
				if *v < BigInt::from(<$t>::MIN) {
					return Err(ConversionError::ValueTooSmall);
				}
				if *v > BigInt::from(<$t>::MAX) {
					return Err(ConversionError::ValueTooLarge);
				}
				let magnitude = v.low_u128();
				let value     = if v.is_negative() {
					0_i128.wrapping_sub_unsigned(magnitude)
				} else {
					i128::try_from(magnitude)?
				};
				<$t>::try_from(value).map_err(|_| ConversionError::ValueTooLarge)
			}
		}

		//󰭅		TryFrom: BigInt -> $t
		impl TryFrom<BigInt> for $t {
			type Error = ConversionError;

			fn try_from(v: BigInt) -> Result<Self, Self::Error> {
				Self::try_from(&v)
			}
		}
	)*};
}

impl_try_from_signed!(i8, i16, i32, i64, i128, isize);

//		impl_try_from_unsigned!
/// Implements the range-checked conversion to a primitive unsigned integer.
macro_rules! impl_try_from_unsigned {
	($($t:ty),*) => {$(
		//󰭅		TryFrom: &BigInt -> $t
		impl TryFrom<&BigInt> for $t {
			type Error = ConversionError;

			fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
				if v.is_negative() {
					return Err(ConversionError::ValueIsNegative);
				}
				if *v > BigInt::from(<$t>::MAX) {
					return Err(ConversionError::ValueTooLarge);
				}
				<$t>::try_from(v.low_u128()).map_err(|_| ConversionError::ValueTooLarge)
			}
		}

		//󰭅		TryFrom: BigInt -> $t
		impl TryFrom<BigInt> for $t {
			type Error = ConversionError;

			fn try_from(v: BigInt) -> Result<Self, Self::Error> {
				Self::try_from(&v)
			}
		}
	)*};
}

impl_try_from_unsigned!(u8, u16, u32, u64, u128, usize);
