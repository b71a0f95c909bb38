//! Length rules and format byte packing.
//!
//! ```text
//! 7  6  5  4  3  2          1           0
//! +--------------+------------------------+
//! |  Format Code | Number of Length Bytes |
//! +--------------+------------------------+
//! |        Length Bytes (1-3, MS first)   |
//! +---------------------------------------+
//! |               Item Body               |
//! +---------------------------------------+
//! ```
//!
//! Encoder and decoder both go through these helpers so they agree on every
//! boundary (`0xFF` takes one length byte, `0x100` takes two).

use crate::limits::{FORMAT_CODE_SHIFT, LENGTH_BYTE_COUNT_MASK, MAX_LENGTH, MAX_LENGTH_BYTES};
use crate::model::{FormatType, Item, Value};

/// Returns the wire length of an item: its body size in bytes.
pub fn item_length(item: &Item) -> usize {
    item.byte_len()
}

/// Returns the wire length of a value.
///
/// For an item this is the body size in bytes (one byte per boolean). For a
/// list it is the number of direct elements.
pub fn length_of(value: &Value) -> usize {
    match value {
        Value::Item(item) => item_length(item),
        Value::List(list) => list.len(),
    }
}

/// Returns true if `len` fits in the 3-byte length field.
#[inline]
pub fn is_within_max_length(len: usize) -> bool {
    len <= MAX_LENGTH
}

/// Returns true if `count` is a legal number of length bytes (1 to 3).
#[inline]
pub fn is_valid_length_byte_count(count: usize) -> bool {
    (1..=MAX_LENGTH_BYTES).contains(&count)
}

/// Returns the number of length bytes needed to encode `len`, or `None` if it
/// exceeds the maximum length.
pub fn required_length_byte_count(len: usize) -> Option<usize> {
    if len <= 0xFF {
        Some(1)
    } else if len <= 0xFFFF {
        Some(2)
    } else if is_within_max_length(len) {
        Some(3)
    } else {
        None
    }
}

/// Packs a format code and a length-byte count into a format byte.
#[inline]
pub fn format_byte(format: FormatType, length_byte_count: usize) -> u8 {
    debug_assert!(is_valid_length_byte_count(length_byte_count));
    (format.code() << FORMAT_CODE_SHIFT) | (length_byte_count as u8 & LENGTH_BYTE_COUNT_MASK)
}

/// Splits a format byte into its 6-bit format code and its length-byte count.
#[inline]
pub fn split_format_byte(byte: u8) -> (u8, usize) {
    (
        byte >> FORMAT_CODE_SHIFT,
        (byte & LENGTH_BYTE_COUNT_MASK) as usize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_length_byte_count_boundaries() {
        assert_eq!(required_length_byte_count(0), Some(1));
        assert_eq!(required_length_byte_count(0xFF), Some(1));
        assert_eq!(required_length_byte_count(0x100), Some(2));
        assert_eq!(required_length_byte_count(0xFFFF), Some(2));
        assert_eq!(required_length_byte_count(0x10000), Some(3));
        assert_eq!(required_length_byte_count(0xFF_FFFF), Some(3));
        assert_eq!(required_length_byte_count(0x100_0000), None);
    }

    #[test]
    fn test_max_length() {
        assert!(is_within_max_length(0));
        assert!(is_within_max_length(MAX_LENGTH));
        assert!(!is_within_max_length(MAX_LENGTH + 1));
    }

    #[test]
    fn test_valid_length_byte_count() {
        assert!(!is_valid_length_byte_count(0));
        assert!(is_valid_length_byte_count(1));
        assert!(is_valid_length_byte_count(3));
        assert!(!is_valid_length_byte_count(4));
    }

    #[test]
    fn test_format_byte_packing() {
        assert_eq!(format_byte(FormatType::Binary, 1), 0b001000_01);
        assert_eq!(format_byte(FormatType::Boolean, 1), 0b001001_01);
        assert_eq!(format_byte(FormatType::U1, 2), 0b101001_10);
        assert_eq!(format_byte(FormatType::List, 3), 0b000000_11);

        for format in FormatType::ALL {
            for count in 1..=3 {
                let (code, n) = split_format_byte(format_byte(format, count));
                assert_eq!(code, format.code());
                assert_eq!(n, count);
            }
        }
    }

    #[test]
    fn test_length_of() {
        assert_eq!(length_of(&Item::U2(vec![1, 2, 3]).into()), 6);
        assert_eq!(length_of(&Item::Boolean(vec![true; 5]).into()), 5);
        assert_eq!(length_of(&Item::F8(vec![]).into()), 0);

        let nested = Value::List(vec![
            Value::List(vec![Item::U1(vec![1]).into(), Item::U1(vec![2]).into()]),
            Item::ascii("abc").into(),
        ]);
        assert_eq!(length_of(&nested), 2);
    }
}
