//! Single-word bit queries and mutations.
//!
//! The unchecked functions never panic: the position is reduced modulo 32,
//! so `p` and `p + 32` address the same bit. Use the `try_*` variants when
//! positions come from untrusted input.

use crate::{BitPosition, BitwiseError, Result, WORD_BITS, Word};

#[inline(always)]
fn mask(position: BitPosition) -> Word {
    1u32.wrapping_shl(position)
}

#[inline(always)]
fn check(position: BitPosition) -> Result<()> {
    if position < WORD_BITS {
        Ok(())
    } else {
        Err(BitwiseError::PositionOutOfRange(position))
    }
}

/// Counts how many bits of `value` are set to 1.
///
/// ```
/// assert_eq!(bitwise_util::count_set_bits(0xFFFF_FFFF), 32);
/// ```
#[inline]
pub fn count_set_bits(value: Word) -> u32 {
    value.count_ones()
}

#[inline]
pub fn get_bit(value: Word, position: BitPosition) -> bool {
    (value.wrapping_shr(position) & 1) == 1
}

/// Returns `value` with bit `position` set.
#[inline]
pub fn set_bit(value: Word, position: BitPosition) -> Word {
    value | mask(position)
}

/// Returns `value` with bit `position` cleared.
#[inline]
pub fn clear_bit(value: Word, position: BitPosition) -> Word {
    value & !mask(position)
}

/// Returns `value` with bit `position` flipped.
#[inline]
pub fn toggle_bit(value: Word, position: BitPosition) -> Word {
    value ^ mask(position)
}

#[inline]
pub fn set_bit_in_place(value: &mut Word, position: BitPosition) {
    *value |= mask(position);
}

#[inline]
pub fn clear_bit_in_place(value: &mut Word, position: BitPosition) {
    *value &= !mask(position);
}

#[inline]
pub fn toggle_bit_in_place(value: &mut Word, position: BitPosition) {
    *value ^= mask(position);
}

/// Like [`get_bit`], but rejects positions outside `0..32`.
///
/// ```
/// use bitwise_util::{try_get_bit, BitwiseError};
///
/// assert_eq!(try_get_bit(5, 2), Ok(true));
/// assert_eq!(try_get_bit(5, 32), Err(BitwiseError::PositionOutOfRange(32)));
/// ```
pub fn try_get_bit(value: Word, position: BitPosition) -> Result<bool> {
    check(position)?;
    Ok(get_bit(value, position))
}

pub fn try_set_bit(value: Word, position: BitPosition) -> Result<Word> {
    check(position)?;
    Ok(set_bit(value, position))
}

pub fn try_clear_bit(value: Word, position: BitPosition) -> Result<Word> {
    check(position)?;
    Ok(clear_bit(value, position))
}

pub fn try_toggle_bit(value: Word, position: BitPosition) -> Result<Word> {
    check(position)?;
    Ok(toggle_bit(value, position))
}
