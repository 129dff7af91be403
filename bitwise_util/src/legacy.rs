//! Bit-compatible reproductions of the historical signed-word helpers.
//!
//! Use these only to read or produce data that has to match what the old
//! helpers wrote. New code should use [`crate::pack_bools`] and
//! [`crate::count_set_bits`].
//!
//! The old merge had two quirks that are kept here on purpose:
//!
//! * it sizes the result as `len / 32 + 1`, one word too many when `len` is
//!   a multiple of 32 (and one word for empty input);
//! * it reads flag `i` (the word index) for every bit of word `i` and
//!   writes bit `i % 32`, so each word holds at most one set bit.

use crate::bit_ops::set_bit_in_place;
use crate::{BitPosition, WORD_BITS, Word, words_for};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Counts set bits while `value > 0`, so negative words count as 0.
pub fn count_set_bits(value: i32) -> u32 {
    let mut value = value;
    let mut count = 0;
    while value > 0 {
        count += (value & 1) as u32;
        value >>= 1;
    }
    count
}

/// Merges flags into signed words with the historical layout.
///
/// ```
/// use bitwise_util::legacy;
///
/// assert_eq!(legacy::merge_bools(&[true; 32]), vec![1, 0]);
/// assert_eq!(legacy::merge_bools(&[]), vec![0]);
/// ```
pub fn merge_bools(values: &[bool]) -> Vec<i32> {
    let bits = WORD_BITS as usize;
    let word_count = values.len() / bits + 1;
    if word_count != words_for(values.len()) {
        log::debug!(
            "legacy sizing for {} flags yields {} words, corrected sizing {}",
            values.len(),
            word_count,
            words_for(values.len())
        );
    }

    let mut result = vec![0i32; word_count];
    for (i, slot) in result.iter_mut().enumerate() {
        let mut word: Word = 0;
        let passes = values.len().saturating_sub(i * bits).min(bits);
        for _ in 0..passes {
            if values[i] {
                set_bit_in_place(&mut word, i as BitPosition);
            }
        }
        *slot = word as i32;
    }
    result
}
