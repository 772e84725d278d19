//! The [Bitfield] value type: a fixed-length vector of bits read as one unsigned integer.
//!
//! Bit `i` of a field is bit `i` of its value, counted from the least significant
//! bit. The length is fixed when the field is built and every bit access is
//! checked against it.

use std::fmt::{self, Write as _};

use bitvec::prelude::*;

use crate::{
    bits::{self, MAX_WIDTH},
    errors::BitfieldError,
    order::BitOrder,
};

/// Fixed-length bit vector backed by an arbitrary-precision unsigned value.
///
/// ```
/// use bitfield::{BitOrder, Bitfield};
///
/// let mut field = Bitfield::new(10);
/// field.set_bit(0).unwrap();
/// field.set_bit(9).unwrap();
///
/// assert_eq!(field.to_bytes(BitOrder::Big), vec![0b0000_0010, 0b0000_0001]);
/// assert_eq!(field.to_bytes(BitOrder::Little), vec![0b1000_0000, 0b0100_0000]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(from = "crate::serde::BitfieldDef", into = "crate::serde::BitfieldDef")
)]
pub struct Bitfield {
    bits: BitVec<u64, Lsb0>,
}

impl Bitfield {
    /// Creates a field of `length` bits, all clear.
    pub fn new(length: usize) -> Self {
        Bitfield {
            bits: BitVec::repeat(false, length),
        }
    }

    /// Creates a field of `length` bits holding `value`.
    ///
    /// Fails with [BitfieldError::ValueTooWide] if `value` has more significant
    /// bits than `length`. Fields seeded with more than 128 bits go through
    /// [Bitfield::from_bytes] or [Bitfield::from_bool_list].
    pub fn with_value(length: usize, value: u128) -> Result<Self, BitfieldError> {
        let significant = bits::bit_length(value);
        if significant > length {
            return Err(BitfieldError::ValueTooWide {
                bits: significant,
                length,
            });
        }

        let mut bitfield = Self::new(length);
        for index in 0..significant {
            if value & bits::bit_mask(index)? != 0 {
                bitfield.bits.set(index, true);
            }
        }

        Ok(bitfield)
    }

    /// Declared number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of bytes [Bitfield::to_bytes] produces: `ceil(len / 8)`.
    pub fn byte_length(&self) -> usize {
        bits::byte_length(self.len())
    }

    /// Number of significant bits in the value (index of the highest set bit plus one).
    pub fn bit_length(&self) -> usize {
        self.bits.last_one().map_or(0, |index| index + 1)
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Returns the value as a `u128`, or [BitfieldError::WidthTooLarge] if it
    /// has more than 128 significant bits.
    pub fn value(&self) -> Result<u128, BitfieldError> {
        let significant = self.bit_length();
        if significant > MAX_WIDTH {
            return Err(BitfieldError::WidthTooLarge {
                width: significant,
                max: MAX_WIDTH,
            });
        }

        self.bits
            .iter_ones()
            .try_fold(0u128, |acc, index| Ok(acc | bits::bit_mask(index)?))
    }

    /// Sets bit `index` to 1.
    pub fn set_bit(&mut self, index: usize) -> Result<(), BitfieldError> {
        self.check_index(index)?;
        self.bits.set(index, true);

        Ok(())
    }

    /// Clears bit `index`.
    pub fn remove_bit(&mut self, index: usize) -> Result<(), BitfieldError> {
        self.check_index(index)?;
        self.bits.set(index, false);

        Ok(())
    }

    /// Returns `true` if bit `index` is set.
    pub fn is_bit(&self, index: usize) -> Result<bool, BitfieldError> {
        self.check_index(index)?;

        Ok(self.bits[index])
    }

    fn check_index(&self, index: usize) -> Result<(), BitfieldError> {
        if index >= self.len() {
            return Err(BitfieldError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }

        Ok(())
    }

    /// Returns one bool per bit. With [BitOrder::Big] element `i` is bit `i`;
    /// [BitOrder::Little] returns the same list reversed.
    pub fn to_bool_list(&self, order: BitOrder) -> Vec<bool> {
        let mut list: Vec<bool> = self.bits.iter().by_vals().collect();
        if order.is_little() {
            list.reverse();
        }

        list
    }

    /// Builds a field from a list of bools, the inverse of [Bitfield::to_bool_list].
    ///
    /// A list longer than `length` widens the field to the list's size.
    pub fn from_bool_list(list: &[bool], length: usize, order: BitOrder) -> Self {
        let length = if list.len() > length {
            log::trace!(
                "from_bool_list - widening length {} to {}",
                length,
                list.len()
            );
            list.len()
        } else {
            length
        };

        let mut bitfield = Self::new(length);
        for (position, &bit) in list.iter().enumerate() {
            let index = match order {
                BitOrder::Big => position,
                BitOrder::Little => list.len() - 1 - position,
            };
            bitfield.bits.set(index, bit);
        }

        bitfield
    }

    /// Serializes the field into exactly [Bitfield::byte_length] bytes.
    ///
    /// [BitOrder::Big] writes the value most significant byte first, padded
    /// with zero bits on the high side. [BitOrder::Little] writes the value
    /// bit-reversed across `byte_length * 8` bits: bit 0 becomes the high bit
    /// of byte 0 and the padding sits at the low end of the last byte.
    pub fn to_bytes(&self, order: BitOrder) -> Vec<u8> {
        let byte_len = self.byte_length();
        let mut out = vec![0u8; byte_len];

        for index in self.bits.iter_ones() {
            match order {
                BitOrder::Big => out[byte_len - 1 - index / 8] |= 1 << (index % 8),
                BitOrder::Little => out[index / 8] |= 0x80 >> (index % 8),
            }
        }

        out
    }

    /// Reads a field of `length` bits from `data`, the inverse of [Bitfield::to_bytes].
    ///
    /// `data` is read as a big-endian unsigned integer. [BitOrder::Little]
    /// bit-reverses it across `data.len() * 8` bits first. Set bits at or above
    /// `length` are dropped so the low `length` bits are kept; a short buffer
    /// leaves the high bits clear.
    pub fn from_bytes(data: &[u8], length: usize, order: BitOrder) -> Self {
        let mut bitfield = Self::new(length);
        let mut dropped = 0usize;

        for (byte_index, &byte) in data.iter().enumerate() {
            for bit in 0..8 {
                if (byte >> bit) & 1 == 0 {
                    continue;
                }

                let index = match order {
                    BitOrder::Big => (data.len() - 1 - byte_index) * 8 + bit,
                    BitOrder::Little => byte_index * 8 + (7 - bit),
                };

                if index < length {
                    bitfield.bits.set(index, true);
                } else {
                    dropped += 1;
                }
            }
        }

        if dropped > 0 {
            log::trace!(
                "from_bytes - truncated {} set bits above length {} ({} bytes, {:?})",
                dropped,
                length,
                data.len(),
                order
            );
        }

        bitfield
    }

    /// Returns a field whose bit `i` is bit `width - 1 - i` of this one.
    ///
    /// `None` swaps across [Bitfield::len]. The width is raised to
    /// [Bitfield::bit_length] when smaller, so no set bit is lost. The result
    /// is `width` bits long.
    pub fn swapped(&self, width: Option<usize>) -> Bitfield {
        let width = width.unwrap_or(self.len()).max(self.bit_length());

        let mut swapped = Self::new(width);
        for index in self.bits.iter_ones() {
            swapped.bits.set(width - 1 - index, true);
        }

        swapped
    }
}

impl fmt::Binary for Bitfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in (0..self.len()).rev() {
            f.write_char(if self.bits[index] { '1' } else { '0' })?;
        }

        Ok(())
    }
}

impl fmt::Display for Bitfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

impl fmt::Debug for Bitfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitfield")
            .field("length", &self.len())
            .field("bits", &format_args!("{:b}", self))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::BitfieldDef> for Bitfield {
    fn from(value: crate::serde::BitfieldDef) -> Self {
        Bitfield::from_bytes(&value.bytes, value.length, value.bit_order.into())
    }
}
