// tests/proptest.rs

use bitwise_util::{
    BitwiseError, clear_bit, clear_bit_in_place, count_set_bits, get_bit, iter_set_bits,
    pack_bools, set_bit, set_bit_in_place, split_to_bools, toggle_bit, toggle_bit_in_place,
    try_set_bit, unpack_words, words_for, words_from_le_bytes, words_to_le_bytes,
};
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Single-word Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_then_get_is_true(w: u32, p in 0u32..32) {
        prop_assert!(get_bit(set_bit(w, p), p));
    }

    #[test]
    fn prop_clear_then_get_is_false(w: u32, p in 0u32..32) {
        prop_assert!(!get_bit(clear_bit(w, p), p));
    }

    #[test]
    fn prop_toggle_twice_is_identity(w: u32, p in 0u32..32) {
        prop_assert_eq!(toggle_bit(toggle_bit(w, p), p), w);
    }

    #[test]
    fn prop_mutations_leave_other_bits_alone(w: u32, p in 0u32..32) {
        let others = !(1u32 << p);
        prop_assert_eq!(set_bit(w, p) & others, w & others);
        prop_assert_eq!(clear_bit(w, p) & others, w & others);
        prop_assert_eq!(toggle_bit(w, p) & others, w & others);
    }

    #[test]
    fn prop_in_place_matches_pure(w: u32, p in 0u32..32) {
        let (mut a, mut b, mut c) = (w, w, w);
        set_bit_in_place(&mut a, p);
        clear_bit_in_place(&mut b, p);
        toggle_bit_in_place(&mut c, p);
        prop_assert_eq!(a, set_bit(w, p));
        prop_assert_eq!(b, clear_bit(w, p));
        prop_assert_eq!(c, toggle_bit(w, p));
    }

    #[test]
    fn prop_count_matches_get(w: u32) {
        let counted = (0..32).filter(|&p| get_bit(w, p)).count() as u32;
        prop_assert_eq!(count_set_bits(w), counted);
    }

    #[test]
    fn prop_iter_set_bits_matches_get(w: u32) {
        let expected: Vec<u32> = (0..32).filter(|&p| get_bit(w, p)).collect();
        prop_assert_eq!(iter_set_bits(w).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_checked_rejects_out_of_range(w: u32, p in 32u32..=u32::MAX) {
        prop_assert_eq!(try_set_bit(w, p), Err(BitwiseError::PositionOutOfRange(p)));
    }
}

//
// -----------------------------------------------------------------------------
// Packing Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_split_then_pack_reproduces_word(w: u32) {
        prop_assert_eq!(pack_bools(&split_to_bools(w)), vec![w]);
    }

    #[test]
    fn prop_pack_then_unpack_roundtrip(values in prop::collection::vec(any::<bool>(), 0..500)) {
        let words = pack_bools(&values);
        prop_assert_eq!(words.len(), words_for(values.len()));
        prop_assert_eq!(unpack_words(&words, values.len()).unwrap(), values);
    }

    #[test]
    fn prop_pack_preserves_popcount(values in prop::collection::vec(any::<bool>(), 0..500)) {
        let words = pack_bools(&values);
        let total: u32 = words.iter().map(|&w| count_set_bits(w)).sum();
        prop_assert_eq!(total as usize, values.iter().filter(|b| **b).count());
    }

    #[test]
    fn prop_padding_bits_are_zero(values in prop::collection::vec(any::<bool>(), 1..500)) {
        let words = pack_bools(&values);
        let tail = values.len() % 32;
        if tail != 0 {
            let last = *words.last().unwrap();
            prop_assert_eq!(last >> tail, 0);
        }
    }

    #[test]
    fn prop_le_bytes_roundtrip(words in prop::collection::vec(any::<u32>(), 0..100)) {
        let bytes = words_to_le_bytes(&words);
        prop_assert_eq!(bytes.len(), words.len() * 4);
        prop_assert_eq!(words_from_le_bytes(&bytes).unwrap(), words);
    }
}

#[cfg(feature = "legacy")]
proptest! {
    #[test]
    fn prop_legacy_count_agrees_for_non_negative(w in 0i32..=i32::MAX) {
        prop_assert_eq!(bitwise_util::legacy::count_set_bits(w), count_set_bits(w as u32));
    }

    #[test]
    fn prop_legacy_merge_sizing(values in prop::collection::vec(any::<bool>(), 0..300)) {
        let words = bitwise_util::legacy::merge_bools(&values);
        prop_assert_eq!(words.len(), values.len() / 32 + 1);
        for w in words {
            prop_assert!(count_set_bits(w as u32) <= 1);
        }
    }
}
