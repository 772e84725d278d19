//! Serde shapes for [crate::Bitfield].
//!
//! A field is stored as its length plus the bytes [crate::Bitfield::to_bytes]
//! produces, with the bit order those bytes were written in:
//!
//! ```json
//! { "length": 12, "bytes": [10, 188], "bit_order": "Big" }
//! ```
//!
//! `bit_order` may be omitted and defaults to `Big`.

use serde::{Deserialize, Serialize};

use crate::{bitfield::Bitfield, order::BitOrder};

/// Bit order of the stored bytes.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum BitOrderDef {
    #[default]
    /// Value written most significant byte first.
    Big,
    /// Value bit-reversed before writing; bit 0 is the high bit of byte 0.
    Little,
}

impl From<BitOrderDef> for BitOrder {
    fn from(value: BitOrderDef) -> Self {
        match value {
            BitOrderDef::Big => BitOrder::Big,
            BitOrderDef::Little => BitOrder::Little,
        }
    }
}

impl From<BitOrder> for BitOrderDef {
    fn from(value: BitOrder) -> Self {
        match value {
            BitOrder::Big => BitOrderDef::Big,
            BitOrder::Little => BitOrderDef::Little,
        }
    }
}

/// Serialized form of a [Bitfield].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BitfieldDef {
    /// Declared number of bits.
    pub length: usize,
    /// Field contents; extra high bits are dropped on load.
    pub bytes: Vec<u8>,
    #[serde(default)]
    pub bit_order: BitOrderDef,
}

impl From<Bitfield> for BitfieldDef {
    fn from(value: Bitfield) -> Self {
        BitfieldDef {
            length: value.len(),
            bytes: value.to_bytes(BitOrder::Big),
            bit_order: BitOrderDef::Big,
        }
    }
}
