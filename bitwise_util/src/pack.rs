//! Conversion between boolean sequences and word arrays.
//!
//! Flag `j` of the sequence lands in bit `j % 32` of word `j / 32`.
//!
//! ```rust
//! use bitwise_util::{pack_bools, iter_set_bits};
//!
//! let words = pack_bools(&[true, false, true]);
//! assert_eq!(words, vec![0b101]);
//! assert_eq!(iter_set_bits(words[0]).collect::<Vec<_>>(), vec![0, 2]);
//! ```

use crate::bit_ops::{get_bit, set_bit_in_place};
use crate::{BitPosition, BitwiseError, Result, WORD_BITS, Word};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Number of words needed to hold `len` flags.
#[inline]
pub const fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BITS as usize)
}

/// Splits a word into its 32 bits, least significant first.
pub fn split_to_bools(value: Word) -> [bool; 32] {
    let mut result = [false; 32];
    for (i, slot) in result.iter_mut().enumerate() {
        *slot = get_bit(value, i as BitPosition);
    }
    result
}

/// Packs flags into words, 32 per word. The last word is zero-padded.
pub fn pack_bools(values: &[bool]) -> Vec<Word> {
    let mut result = vec![0; words_for(values.len())];
    for (word, chunk) in result.iter_mut().zip(values.chunks(WORD_BITS as usize)) {
        for (j, &flag) in chunk.iter().enumerate() {
            if flag {
                set_bit_in_place(word, j as BitPosition);
            }
        }
    }
    result
}

/// Reads the first `len` flags back out of `words`.
///
/// Extra words past `words_for(len)` are ignored.
pub fn unpack_words(words: &[Word], len: usize) -> Result<Vec<bool>> {
    let needed = words_for(len);
    if words.len() < needed {
        return Err(BitwiseError::InsufficientWords {
            needed,
            available: words.len(),
        });
    }

    let mut result = Vec::with_capacity(len);
    for i in 0..len {
        let word = words[i / WORD_BITS as usize];
        result.push(get_bit(word, (i % WORD_BITS as usize) as BitPosition));
    }
    Ok(result)
}

/// Iterates over the positions of the set bits of `value`, lowest first.
pub fn iter_set_bits(value: Word) -> SetBits {
    SetBits::new(value)
}

#[derive(Debug, Clone)]
pub struct SetBits {
    bits: Word,
}

impl SetBits {
    pub fn new(bits: Word) -> Self {
        Self { bits }
    }
}

impl Iterator for SetBits {
    type Item = BitPosition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let position = self.bits.trailing_zeros();
        // drop lowest set bit
        self.bits &= self.bits - 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetBits {}
