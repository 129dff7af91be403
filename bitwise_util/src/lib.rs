//! # bitwise_util
//!
//! A `no_std` compatible library of bit helpers over 32-bit words.
//!
//! ```rust
//! use bitwise_util::{count_set_bits, get_bit, set_bit, clear_bit, toggle_bit};
//!
//! let word = set_bit(0, 3);
//! assert_eq!(word, 8);
//! assert!(get_bit(word, 3));
//! assert_eq!(clear_bit(15, 0), 14);
//! assert_eq!(toggle_bit(toggle_bit(word, 7), 7), word);
//! assert_eq!(count_set_bits(7), 3);
//! ```
//!
//! ## Packing flags
//!
//! ```rust
//! use bitwise_util::{pack_bools, split_to_bools, unpack_words};
//!
//! // 40 flags need 2 words instead of 40 bytes
//! let flags: Vec<bool> = (0..40).map(|i| i % 3 == 0).collect();
//! let words = pack_bools(&flags);
//! assert_eq!(words.len(), 2);
//! assert_eq!(unpack_words(&words, flags.len()).unwrap(), flags);
//!
//! let bools = split_to_bools(words[0]);
//! assert_eq!(pack_bools(&bools), vec![words[0]]);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitwiseError;

pub mod bit_ops;
pub mod bytes;
pub mod pack;

#[cfg(feature = "legacy")]
pub mod legacy;

pub use bit_ops::{
    clear_bit, clear_bit_in_place, count_set_bits, get_bit, set_bit, set_bit_in_place, toggle_bit,
    toggle_bit_in_place, try_clear_bit, try_get_bit, try_set_bit, try_toggle_bit,
};
pub use bytes::{words_as_bytes, words_from_le_bytes, words_to_le_bytes};
pub use pack::{SetBits, iter_set_bits, pack_bools, split_to_bools, unpack_words, words_for};

/// A 32-bit word used as a bit container.
pub type Word = u32;

/// Zero-based index of a bit inside a [`Word`].
pub type BitPosition = u32;

/// Number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

pub type Result<T> = core::result::Result<T, BitwiseError>;
