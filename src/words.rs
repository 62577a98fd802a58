//! Primitives over little-endian word vectors.
//!
//! A magnitude is stored as a sequence of 32-bit words, least-significant
//! word first. Unless stated otherwise, every function here expects clamped
//! input and returns a clamped magnitude, i.e. one with no most-significant
//! zero words and a length of at least one.

//	Every index used in this module is derived from the lengths of the slices
//	being worked on, and the word loops are far easier to follow with direct
//	indexing than with iterator gymnastics.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are bounded by the slice lengths"
)]

//	Carries, borrows, and quotient digits are computed in double-width
//	arithmetic and deliberately split back down into words.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss,
	clippy::integer_division,
	reason = "Word splitting is the whole point of this module"
)]



//		Modules

#[cfg(test)]
#[path = "tests/words.rs"]
mod tests;



//		Packages

use core::cmp::Ordering;
use tracing::trace;



//		Type aliases

/// A single base-2³² digit.
pub type Word = u32;

/// A value wide enough to hold the product of two [`Word`]s plus a carry.
pub type DoubleWord = u64;



//		Constants

/// Number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

/// The numeric base of the representation, i.e. 2³².
pub const BASE: DoubleWord = 1 << WORD_BITS;



//		Functions

//		add
/// Adds two magnitudes.
///
/// The operands may be given in either order; the longer one drives the loop
/// and a final carry extends the result by one word.
///
pub fn add(a: &[Word], b: &[Word]) -> Vec<Word> {
	let (hi, lo)   = if a.len() >= b.len() { (a, b) } else { (b, a) };
	let mut result = Vec::with_capacity(hi.len() + 1);
	let mut carry  = 0;

	for (i, &word) in hi.iter().enumerate() {
		let sum = DoubleWord::from(word) + DoubleWord::from(lo.get(i).copied().unwrap_or(0)) + carry;
		result.push(sum as Word);
		carry   = sum >> WORD_BITS;
	}

	if carry != 0 {
		result.push(carry as Word);
	}

	result
}

//		clamp
/// Strips most-significant zero words, leaving at least one word.
pub fn clamp(words: &mut Vec<Word>) {
	while words.len() > 1 && words.last() == Some(&0) {
		words.pop();
	}
	if words.is_empty() {
		words.push(0);
	}
}

//		compare
/// Compares two magnitudes.
///
/// As both are clamped, a longer magnitude is always the larger one. Equal
/// lengths are compared word by word from the most-significant end.
///
pub fn compare(a: &[Word], b: &[Word]) -> Ordering {
	a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

//		div_rem
/// Divides one magnitude by another, returning the quotient and remainder.
///
/// The divisor must not be zero. Single-word divisors take a fast path, and
/// everything else goes through Knuth's Algorithm D.
///
pub fn div_rem(dividend: &[Word], divisor: &[Word]) -> (Vec<Word>, Vec<Word>) {
	debug_assert!(!is_zero(divisor), "Divisor must not be zero");

	if compare(dividend, divisor) == Ordering::Less {
		return (vec![0], dividend.to_vec());
	}

	if let &[digit] = divisor {
		let (quotient, remainder) = div_rem_word(dividend, digit);
		return (quotient, vec![remainder]);
	}

	div_rem_knuth(dividend, divisor)
}

//		div_rem_knuth
/// Long division of magnitudes using Knuth's Algorithm D.
///
/// Requires a divisor of at least two words, and a dividend at least as large
/// as the divisor.
///
/// Both operands are first normalised: shifted left until the top bit of the
/// divisor's most-significant word is set, with the dividend gaining an extra
/// leading word to receive the bits shifted out of it. Each quotient digit is
/// then estimated from the top two words of the current dividend window,
/// corrected against the divisor's second word, and finally verified by the
/// multiply-and-subtract step, which adds the divisor back in the rare case
/// that the estimate was still one too high.
///
fn div_rem_knuth(dividend: &[Word], divisor: &[Word]) -> (Vec<Word>, Vec<Word>) {
	let n     = divisor.len();
	let m     = dividend.len();
	let shift = divisor[n - 1].leading_zeros();

	//	D1: Normalise
	let vn     = shl(divisor, shift as usize);
	let mut un = shl(dividend, shift as usize);
	un.resize(m + 1, 0);

	let v_top      = DoubleWord::from(vn[n - 1]);
	let v_next     = DoubleWord::from(vn[n - 2]);
	let mut quotient = vec![0; m - n + 1];

	//	D2: Loop over quotient digits, most-significant first
	for j in (0..=m - n).rev() {
		//	D3: Estimate the quotient digit
		let numerator = (DoubleWord::from(un[j + n]) << WORD_BITS) | DoubleWord::from(un[j + n - 1]);
		let mut qhat  = numerator / v_top;
		let mut rhat  = numerator % v_top;

		while qhat >= BASE || qhat * v_next > ((rhat << WORD_BITS) | DoubleWord::from(un[j + n - 2])) {
			qhat -= 1;
			rhat += v_top;
			if rhat >= BASE {
				break;
			}
		}

		//	D4: Multiply and subtract
		let mut borrow = 0_i64;
		for i in 0..n {
			let product = qhat * DoubleWord::from(vn[i]);
			let diff    = i64::from(un[i + j]) - borrow - i64::from(product as Word);
			un[i + j]   = diff as Word;
			borrow      = i64::from((product >> WORD_BITS) as Word) - (diff >> WORD_BITS);
		}
		let diff  = i64::from(un[j + n]) - borrow;
		un[j + n] = diff as Word;

		//	D5: Store the quotient digit
		quotient[j] = qhat as Word;

		//	D6: Add back if the estimate was one too high
		if diff < 0 {
			trace!(digit = j, estimate = qhat, "Quotient digit overestimated, adding divisor back");
			quotient[j] -= 1;
			let mut carry = 0;
			for i in 0..n {
				let sum   = DoubleWord::from(un[i + j]) + DoubleWord::from(vn[i]) + carry;
				un[i + j] = sum as Word;
				carry     = sum >> WORD_BITS;
			}
			un[j + n] = un[j + n].wrapping_add(carry as Word);
		}
	}

	//	D8: Unnormalise the remainder
	un.truncate(n);
	let remainder = shr(&un, shift as usize);
	clamp(&mut quotient);

	(quotient, remainder)
}

//		div_rem_word
/// Divides a magnitude by a single non-zero word.
///
/// Runs from the most-significant word down, carrying the running remainder
/// into the next step as the high half of a double-width dividend.
///
pub fn div_rem_word(dividend: &[Word], divisor: Word) -> (Vec<Word>, Word) {
	let divisor      = DoubleWord::from(divisor);
	let mut quotient = vec![0; dividend.len()];
	let mut k        = 0;

	for (digit, &word) in quotient.iter_mut().zip(dividend).rev() {
		let current = (k << WORD_BITS) | DoubleWord::from(word);
		*digit      = (current / divisor) as Word;
		k           = current - DoubleWord::from(*digit) * divisor;
	}

	clamp(&mut quotient);
	(quotient, k as Word)
}

//		invert
/// Negates a magnitude within a fixed width of `len` words.
///
/// Every bit is flipped and one is added, discarding any carry out of the
/// top, which gives 2^(32·`len`) minus the value. Applied to a magnitude this
/// yields its two's-complement encoding; applied to a two's-complement
/// encoding of a negative value it recovers the magnitude. The input is
/// zero-extended to `len` words first, so `len` must be at least its length.
/// The result is not clamped.
///
pub fn invert(words: &[Word], len: usize) -> Vec<Word> {
	debug_assert!(len >= words.len(), "Cannot invert into a narrower width");

	let mut result = words.to_vec();
	result.resize(len, 0);

	let mut carry = true;
	for word in &mut result {
		let (sum, overflow) = (!*word).overflowing_add(Word::from(carry));
		*word               = sum;
		carry               = overflow;
	}

	result
}

//		is_zero
/// Determines if a magnitude is zero.
pub fn is_zero(words: &[Word]) -> bool {
	words.iter().all(|&word| word == 0)
}

//		mul
/// Multiplies two magnitudes using the schoolbook method.
pub fn mul(a: &[Word], b: &[Word]) -> Vec<Word> {
	if is_zero(a) || is_zero(b) {
		return vec![0];
	}

	let mut result = vec![0; a.len() + b.len()];

	for (i, &x) in a.iter().enumerate() {
		let mut carry = 0;
		for (j, &y) in b.iter().enumerate() {
			//	Cannot overflow: (2³²-1)² + 2·(2³²-1) = 2⁶⁴-1
			let acc       = DoubleWord::from(result[i + j]) + DoubleWord::from(x) * DoubleWord::from(y) + carry;
			result[i + j] = acc as Word;
			carry         = acc >> WORD_BITS;
		}
		result[i + b.len()] = carry as Word;
	}

	clamp(&mut result);
	result
}

//		mul_add_word
/// Multiplies a magnitude by a single word and adds another, in place.
pub fn mul_add_word(words: &mut Vec<Word>, factor: Word, addend: Word) {
	let mut carry = DoubleWord::from(addend);

	for word in words.iter_mut() {
		let acc = DoubleWord::from(*word) * DoubleWord::from(factor) + carry;
		*word   = acc as Word;
		carry   = acc >> WORD_BITS;
	}

	if carry != 0 {
		words.push(carry as Word);
	}
	clamp(words);
}

//		pack_be
/// Lays a magnitude out as big-endian bytes, four per word.
pub fn pack_be(words: &[Word]) -> Vec<u8> {
	words.iter().rev().flat_map(|word| word.to_be_bytes()).collect()
}

//		shl
/// Shifts a magnitude left by `bits`.
///
/// Whole words are moved first by inserting zero words at the low end, and
/// any residual bits are then carried up through the words from the
/// least-significant end, with a final word appended if bits remain. Zero
/// stays zero without allocating, whatever the amount.
///
pub fn shl(words: &[Word], bits: usize) -> Vec<Word> {
	if is_zero(words) {
		return vec![0];
	}

	let word_shift = bits / WORD_BITS as usize;
	let bit_shift  = (bits % WORD_BITS as usize) as u32;
	let mut result = Vec::with_capacity(word_shift + words.len() + 1);
	result.resize(word_shift, 0);

	if bit_shift == 0 {
		result.extend_from_slice(words);
	} else {
		let mut carry = 0;
		for &word in words {
			result.push((word << bit_shift) | carry);
			carry = word >> (WORD_BITS - bit_shift);
		}
		if carry != 0 {
			result.push(carry);
		}
	}

	clamp(&mut result);
	result
}

//		shr
/// Shifts a magnitude right by `bits`.
///
/// The input does not need to be clamped. Whole words are dropped from the
/// low end, and any residual bits are then carried down through the words
/// from the most-significant end.
///
pub fn shr(words: &[Word], bits: usize) -> Vec<Word> {
	let word_shift = bits / WORD_BITS as usize;
	let bit_shift  = (bits % WORD_BITS as usize) as u32;

	if word_shift >= words.len() {
		return vec![0];
	}

	let mut result = words[word_shift..].to_vec();

	if bit_shift != 0 {
		let mut carry = 0;
		for word in result.iter_mut().rev() {
			let shifted_out = *word << (WORD_BITS - bit_shift);
			*word           = (*word >> bit_shift) | carry;
			carry           = shifted_out;
		}
	}

	clamp(&mut result);
	result
}

//		sub
/// Subtracts the smaller magnitude `lo` from the larger magnitude `hi`.
///
/// The caller is responsible for ensuring that `hi` is not smaller than `lo`.
///
pub fn sub(hi: &[Word], lo: &[Word]) -> Vec<Word> {
	debug_assert!(compare(hi, lo) != Ordering::Less, "Subtraction would underflow");

	let mut result = Vec::with_capacity(hi.len());
	let mut borrow = false;

	for (i, &word) in hi.iter().enumerate() {
		let (diff1, b1) = word.overflowing_sub(lo.get(i).copied().unwrap_or(0));
		let (diff2, b2) = diff1.overflowing_sub(Word::from(borrow));
		result.push(diff2);
		borrow          = b1 || b2;
	}

	clamp(&mut result);
	result
}

//		unpack_be
/// Reads big-endian bytes into words.
///
/// When the byte count is not a multiple of four, the most-significant word
/// is padded with `fill`, which allows two's-complement values to be
/// sign-extended. The result is not clamped, and is empty for empty input.
///
pub fn unpack_be(bytes: &[u8], fill: u8) -> Vec<Word> {
	bytes
		.rchunks(4)
		.map(|chunk| chunk.iter().fold(Word::from_ne_bytes([fill; 4]), |acc, &byte| (acc << 8) | Word::from(byte)))
		.collect()
}
