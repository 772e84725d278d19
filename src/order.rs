//! Bit order options for list and byte conversion.

/// Direction in which logical bit indices map onto a serialized sequence.
///
/// The order never changes the stored value, only how it is enumerated or
/// written out. Byte layout is always big-endian; this enum selects the bit
/// order on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitOrder {
    /// Bytes hold the value most significant byte first. Bool lists start
    /// at bit 0.
    #[default]
    Big,
    /// The value is bit-reversed before serializing, so bit 0 is the high
    /// bit of byte 0. Bool lists start at the highest bit.
    Little,
}

impl BitOrder {
    pub fn is_little(self) -> bool {
        self == BitOrder::Little
    }
}
