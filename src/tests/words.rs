//		Packages

use super::*;



//		Tests

mod clamping {
	use super::*;

	//		clamp
	#[test]
	fn clamp__strips_leading_zeros() {
		let mut words = vec![5, 0, 0];
		clamp(&mut words);
		assert_eq!(words, vec![5]);
	}
	#[test]
	fn clamp__keeps_single_zero() {
		let mut words = vec![0, 0, 0];
		clamp(&mut words);
		assert_eq!(words, vec![0]);
	}
	#[test]
	fn clamp__empty() {
		let mut words = vec![];
		clamp(&mut words);
		assert_eq!(words, vec![0]);
	}
	#[test]
	fn clamp__already_clamped() {
		let mut words = vec![0, 1];
		clamp(&mut words);
		assert_eq!(words, vec![0, 1]);
	}

	//		is_zero
	#[test]
	fn is_zero__various() {
		assert!( is_zero(&[0]));
		assert!( is_zero(&[0, 0]));
		assert!( is_zero(&[]));
		assert!(!is_zero(&[0, 1]));
	}
}

mod comparison {
	use super::*;

	//		compare
	#[test]
	fn compare__by_length() {
		assert_eq!(compare(&[0, 1], &[0xFFFF_FFFF]), Ordering::Greater);
		assert_eq!(compare(&[0xFFFF_FFFF], &[0, 1]), Ordering::Less);
	}
	#[test]
	fn compare__by_top_word() {
		assert_eq!(compare(&[0xFFFF_FFFF, 1], &[0, 2]), Ordering::Less);
		assert_eq!(compare(&[0, 2], &[0xFFFF_FFFF, 1]), Ordering::Greater);
	}
	#[test]
	fn compare__equal() {
		assert_eq!(compare(&[7, 8, 9], &[7, 8, 9]), Ordering::Equal);
		assert_eq!(compare(&[0], &[0]),             Ordering::Equal);
	}
}

mod arithmetic {
	use super::*;

	//		add
	#[test]
	fn add__no_carry() {
		assert_eq!(add(&[1, 2], &[3]), vec![4, 2]);
	}
	#[test]
	fn add__carry_extends() {
		assert_eq!(add(&[0xFFFF_FFFF, 0xFFFF_FFFF], &[1]), vec![0, 0, 1]);
	}
	#[test]
	fn add__either_order() {
		assert_eq!(add(&[1], &[0xFFFF_FFFF, 7]), vec![0, 8]);
		assert_eq!(add(&[0xFFFF_FFFF, 7], &[1]), vec![0, 8]);
	}

	//		sub
	#[test]
	fn sub__borrow_propagates() {
		assert_eq!(sub(&[0, 0, 1], &[1]), vec![0xFFFF_FFFF, 0xFFFF_FFFF]);
	}
	#[test]
	fn sub__to_zero() {
		assert_eq!(sub(&[9, 9], &[9, 9]), vec![0]);
	}
	#[test]
	fn sub__clamps() {
		assert_eq!(sub(&[5, 1], &[6]), vec![0xFFFF_FFFF]);
	}

	//		mul
	#[test]
	fn mul__by_zero() {
		assert_eq!(mul(&[0], &[1, 2, 3]), vec![0]);
		assert_eq!(mul(&[1, 2, 3], &[0]), vec![0]);
	}
	#[test]
	fn mul__max_words() {
		assert_eq!(
			mul(&[0xFFFF_FFFF, 0xFFFF_FFFF], &[0xFFFF_FFFF, 0xFFFF_FFFF]),
			vec![1, 0, 0xFFFF_FFFE, 0xFFFF_FFFF],
		);
	}
	#[test]
	fn mul__no_final_carry() {
		assert_eq!(mul(&[2], &[3]), vec![6]);
	}

	//		mul_add_word
	#[test]
	fn mul_add_word__grows() {
		let mut words = vec![0xFFFF_FFFF];
		mul_add_word(&mut words, 16, 15);
		assert_eq!(words, vec![0xFFFF_FFFF, 0xF]);
	}
	#[test]
	fn mul_add_word__from_zero() {
		let mut words = vec![0];
		mul_add_word(&mut words, 10, 7);
		assert_eq!(words, vec![7]);
	}
}

mod division {
	use super::*;

	//		div_rem
	#[test]
	fn div_rem__dividend_smaller() {
		assert_eq!(div_rem(&[5], &[0, 1]), (vec![0], vec![5]));
	}
	#[test]
	fn div_rem__single_word() {
		assert_eq!(div_rem(&[7], &[2]), (vec![3], vec![1]));
	}
	#[test]
	fn div_rem__multi_word() {
		//	10^30 / (10^12 + 39)
		let (quotient, remainder) = div_rem(&[1_073_741_824, 1_182_068_202, 2_670_501_072, 12], &[3_567_587_367, 232]);
		assert_eq!(quotient,  vec![2_769_348_672, 232_830_643]);
		assert_eq!(remainder, vec![1_521_000_000]);
	}
	#[test]
	fn div_rem__equal() {
		assert_eq!(div_rem(&[3, 4], &[3, 4]), (vec![1], vec![0]));
	}
	#[test]
	fn div_rem__add_back() {
		//	The first estimate for this quotient digit is one too high
		let (quotient, remainder) = div_rem(&[0, 0, 0x8000_0000, 0x7FFF_FFFF], &[1, 0, 0x8000_0000]);
		assert_eq!(quotient,  vec![0xFFFF_FFFE]);
		assert_eq!(remainder, vec![2, 0xFFFF_FFFF, 0x7FFF_FFFF]);
	}

	//		div_rem_word
	#[test]
	fn div_rem_word__multi_word() {
		assert_eq!(div_rem_word(&[0x1234_5678, 0x9ABC_DEF0, 1], 0x1_0000), (vec![0xDEF0_1234, 0x1_9ABC], 0x5678));
	}
	#[test]
	fn div_rem_word__clamps() {
		assert_eq!(div_rem_word(&[0, 1], 0xFFFF_FFFF), (vec![1], 1));
	}
}

mod shifting {
	use super::*;

	//		shl
	#[test]
	fn shl__across_words() {
		assert_eq!(shl(&[0x1234_5678, 0x9ABC_DEF0, 1], 36), vec![0, 0x2345_6780, 0xABCD_EF01, 0x19]);
	}
	#[test]
	fn shl__whole_words() {
		assert_eq!(shl(&[1, 2], 64), vec![0, 0, 1, 2]);
	}
	#[test]
	fn shl__zero() {
		assert_eq!(shl(&[0], 100), vec![0]);
		assert_eq!(shl(&[5], 0),   vec![5]);
	}
	#[test]
	fn shl__zero_by_huge_amount() {
		assert_eq!(shl(&[0],    usize::MAX), vec![0]);
		assert_eq!(shl(&[0, 0], usize::MAX), vec![0]);
	}

	//		shr
	#[test]
	fn shr__across_words() {
		assert_eq!(shr(&[0x1234_5678, 0x9ABC_DEF0, 1], 36), vec![0x19AB_CDEF]);
	}
	#[test]
	fn shr__everything() {
		assert_eq!(shr(&[1, 2], 64),         vec![0]);
		assert_eq!(shr(&[1, 2], usize::MAX), vec![0]);
	}
	#[test]
	fn shr__unclamped_input() {
		assert_eq!(shr(&[0, 2, 0, 0], 1), vec![0, 1]);
	}
}

mod twos_complement {
	use super::*;

	//		invert
	#[test]
	fn invert__one() {
		assert_eq!(invert(&[1], 2), vec![0xFFFF_FFFF, 0xFFFF_FFFF]);
	}
	#[test]
	fn invert__zero() {
		assert_eq!(invert(&[0], 2), vec![0, 0]);
	}
	#[test]
	fn invert__involution() {
		let words = vec![0x8000_0000, 3, 0];
		assert_eq!(invert(&invert(&words, 3), 3), words);
	}

	//		pack_be
	#[test]
	fn pack_be__word_order() {
		assert_eq!(pack_be(&[0x0506_0708, 0x0102_0304]), vec![1, 2, 3, 4, 5, 6, 7, 8]);
	}

	//		unpack_be
	#[test]
	fn unpack_be__zero_fill() {
		assert_eq!(unpack_be(&[1, 2, 3, 4, 5], 0x00), vec![0x0203_0405, 0x01]);
	}
	#[test]
	fn unpack_be__sign_fill() {
		assert_eq!(unpack_be(&[0xFF, 0x7F], 0xFF), vec![0xFFFF_FF7F]);
	}
	#[test]
	fn unpack_be__empty() {
		assert!(unpack_be(&[], 0x00).is_empty());
	}
}
