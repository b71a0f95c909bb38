//! Wire constants and decoding limits.
//!
//! The length ceiling is fixed by the format itself. The nesting limit is a
//! decoder safeguard against adversarial input: the wire format places no
//! bound on list depth, so the decoder does.

/// Maximum number of length bytes following the format byte.
pub const MAX_LENGTH_BYTES: usize = 3;

/// Maximum value of the length field (3 big-endian bytes).
///
/// For an item this is a byte count; for a list it is the number of direct
/// elements.
pub const MAX_LENGTH: usize = 0xFF_FFFF;

/// Default maximum list nesting depth accepted by the decoder.
///
/// A root list is depth 1, a list inside it depth 2, and so on.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Smallest possible encoding of any node: format byte plus one length byte.
pub const MIN_NODE_SIZE: usize = 2;

/// Default number of spaces per SML indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Bits of the format byte holding the length-byte count.
pub(crate) const LENGTH_BYTE_COUNT_MASK: u8 = 0b0000_0011;

/// Shift of the 6-bit format code inside the format byte.
pub(crate) const FORMAT_CODE_SHIFT: u32 = 2;
