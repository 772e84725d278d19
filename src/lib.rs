//! # bitfield
//!
//! A fixed-length bit vector read as one unsigned integer of arbitrary size.
//!
//! Bits are indexed from the least significant bit. A [Bitfield] converts to and
//! from lists of bools and byte buffers; a [BitOrder] selects whether bit 0 comes
//! last ([BitOrder::Big], plain big-endian integer) or first
//! ([BitOrder::Little], bit-reversed) in the serialized form.
//!
//! ## Example
//!
//! ```
//! use bitfield::{BitOrder, Bitfield};
//!
//! let field = Bitfield::from_bool_list(&[true, false, true], 3, BitOrder::Big);
//! assert!(field.is_bit(0).unwrap());
//! assert!(!field.is_bit(1).unwrap());
//!
//! assert_eq!(field.to_bytes(BitOrder::Big), vec![0b0000_0101]);
//! assert_eq!(field.to_bytes(BitOrder::Little), vec![0b1010_0000]);
//!
//! let back = Bitfield::from_bytes(&[0b1010_0000], 3, BitOrder::Little);
//! assert_eq!(back, field);
//! ```

pub mod bitfield;
pub mod bits;
pub mod errors;
pub mod order;
#[cfg(feature = "serde")]
pub mod serde;

pub use bitfield::Bitfield;
pub use bits::{bit_mask, reverse_bits};
pub use errors::BitfieldError;
pub use order::BitOrder;
