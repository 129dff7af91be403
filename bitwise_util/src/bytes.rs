//! Byte-level views of word arrays, for writing packed flags to storage.

use crate::{BitwiseError, Result, Word};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// Views `words` as raw bytes in native endianness, without copying.
///
/// Only use this for data that stays on the same machine; see
/// [`words_to_le_bytes`] for a portable layout.
pub fn words_as_bytes(words: &[Word]) -> &[u8] {
    bytemuck::cast_slice(words)
}

/// Encodes `words` as little-endian bytes.
pub fn words_to_le_bytes(words: &[Word]) -> Vec<u8> {
    log::trace!("encoding {} words as little-endian bytes", words.len());
    let mut out = Vec::with_capacity(words.len() * WORD_BYTES);
    for word in words {
        out.extend_from_slice(&word.to_le_bytes());
    }
    out
}

/// Decodes words previously written by [`words_to_le_bytes`].
///
/// ```
/// use bitwise_util::{words_from_le_bytes, BitwiseError};
///
/// assert_eq!(words_from_le_bytes(&[1, 0, 0, 0]), Ok(vec![1]));
/// assert_eq!(words_from_le_bytes(&[1, 0]), Err(BitwiseError::MisalignedBytes(2)));
/// ```
pub fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<Word>> {
    if bytes.len() % WORD_BYTES != 0 {
        log::trace!("rejecting {} bytes, not word aligned", bytes.len());
        return Err(BitwiseError::MisalignedBytes(bytes.len()));
    }
    let words = bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| Word::from_le_bytes(bytemuck::pod_read_unaligned(chunk)))
        .collect();
    Ok(words)
}
