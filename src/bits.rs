//! Low-level helpers on fixed-width integers.
//!
//! Bits are addressed LSB-first: bit 0 is the least significant bit of the value.

use crate::errors::BitfieldError;

/// Widest value the integer helpers in this module accept, in bits.
pub const MAX_WIDTH: usize = u128::BITS as usize;

/// Returns `2^index`: a mask with only bit `index` set.
pub fn bit_mask(index: usize) -> Result<u128, BitfieldError> {
    if index >= MAX_WIDTH {
        return Err(BitfieldError::WidthTooLarge {
            width: index.saturating_add(1),
            max: MAX_WIDTH,
        });
    }

    Ok(1u128 << index)
}

/// Number of significant bits in `value`. Zero has a bit length of 0.
pub fn bit_length(value: u128) -> usize {
    (u128::BITS - value.leading_zeros()) as usize
}

/// Number of bytes needed to hold `bits` bits.
pub fn byte_length(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Reverses the binary digits of `value` after left-padding it with zeros to
/// `width` digits, so `0b10` becomes `0b01` and `(0b10, Some(4))` becomes `0b0100`.
///
/// `None` uses the bit length of `value`. A width below the bit length is
/// raised to it; digits are never dropped.
pub fn reverse_bits(value: u128, width: Option<usize>) -> Result<u128, BitfieldError> {
    let significant = bit_length(value);
    let width = width.unwrap_or(significant).max(significant);

    if width > MAX_WIDTH {
        return Err(BitfieldError::WidthTooLarge {
            width,
            max: MAX_WIDTH,
        });
    }

    Ok(reverse_bits_n(value, width))
}

/// Reverses the low `n` bits of `x` (LSB becomes MSB of the result).
fn reverse_bits_n(mut x: u128, n: usize) -> u128 {
    let mut r = 0u128;
    for _ in 0..n {
        r = (r << 1) | (x & 1);
        x >>= 1;
    }

    r
}
