use crate::BitPosition;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitwiseError {
    #[cfg_attr(
        feature = "std",
        error("Bit position {0} is out of range for a 32-bit word")
    )]
    PositionOutOfRange(BitPosition),

    #[cfg_attr(
        feature = "std",
        error("Need {needed} words to unpack, only {available} available")
    )]
    InsufficientWords { needed: usize, available: usize },

    #[cfg_attr(
        feature = "std",
        error("Byte length {0} is not a multiple of the word size")
    )]
    MisalignedBytes(usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitwiseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitwiseError::PositionOutOfRange(p) => {
                write!(f, "Bit position {} is out of range for a 32-bit word", p)
            }
            BitwiseError::InsufficientWords { needed, available } => write!(
                f,
                "Need {} words to unpack, only {} available",
                needed, available
            ),
            BitwiseError::MisalignedBytes(len) => {
                write!(f, "Byte length {} is not a multiple of the word size", len)
            }
        }
    }
}
