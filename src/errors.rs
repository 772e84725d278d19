//! Error type for bitfield access and bit helpers.

use std::fmt;

/// Errors produced by [crate::Bitfield] operations and the helpers in [crate::bits].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitfieldError {
    /// Bit index is not below the declared length of the field.
    IndexOutOfRange { index: usize, length: usize },
    /// Initial value has more significant bits than the field can hold.
    ValueTooWide { bits: usize, length: usize },
    /// A fixed-width integer helper was asked for more bits than it has.
    WidthTooLarge { width: usize, max: usize },
}

impl fmt::Display for BitfieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitfieldError::IndexOutOfRange { index, length } => {
                write!(f, "bit index {} out of range for length {}", index, length)
            }
            BitfieldError::ValueTooWide { bits, length } => {
                write!(f, "value needs {} bits but field length is {}", bits, length)
            }
            BitfieldError::WidthTooLarge { width, max } => {
                write!(f, "width {} exceeds maximum of {} bits", width, max)
            }
        }
    }
}

impl std::error::Error for BitfieldError {}
