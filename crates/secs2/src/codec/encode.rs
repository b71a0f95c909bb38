//! Encoding of a value tree into SECS-II bytes.

use crate::codec::length::{format_byte, item_length, required_length_byte_count};
use crate::codec::primitives::Writer;
use crate::error::EncodeError;
use crate::limits::MAX_LENGTH;
use crate::model::{FormatType, Item, Value};

/// Encodes a value into a new buffer.
///
/// Fails if the length of any node in the tree exceeds
/// [`MAX_LENGTH`](crate::limits::MAX_LENGTH); no partial output is returned.
///
/// Nesting depth is not limited here. A tree with lists nested deeper than
/// [`MAX_NESTING_DEPTH`](crate::limits::MAX_NESTING_DEPTH) encodes, but
/// [`decode_value`](crate::codec::decode_value) rejects the result; decode it
/// with [`DecodeOptions::max_depth`](crate::codec::DecodeOptions::max_depth)
/// set to at least the tree's depth.
pub fn encode_value(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::with_capacity(estimate_capacity(value));
    encode_value_into(&mut writer, value)?;
    tracing::trace!(len = writer.len(), "encoded SECS-II value");
    Ok(writer.into_bytes())
}

/// Appends the encoding of a value to `writer` and returns the number of
/// bytes written.
///
/// On failure the writer is restored to its length before the call.
pub fn encode_value_into(writer: &mut Writer, value: &Value) -> Result<usize, EncodeError> {
    let start = writer.len();
    match encode_tree(writer, value) {
        Ok(()) => Ok(writer.len() - start),
        Err(err) => {
            tracing::debug!(%err, "failed to encode SECS-II value");
            writer.truncate(start);
            Err(err)
        }
    }
}

/// Walks the tree depth-first with an explicit stack of pending list
/// iterators, so arbitrarily deep trees never exhaust the call stack.
fn encode_tree(writer: &mut Writer, root: &Value) -> Result<(), EncodeError> {
    let mut pending = Vec::new();
    let mut next = Some(root);

    loop {
        match next.take() {
            Some(Value::Item(item)) => encode_item(writer, item)?,
            Some(Value::List(list)) => {
                encode_header(writer, FormatType::List, list.len())?;
                pending.push(list.iter());
            }
            None => {}
        }

        let Some(elements) = pending.last_mut() else {
            return Ok(());
        };
        match elements.next() {
            Some(value) => next = Some(value),
            None => {
                pending.pop();
            }
        }
    }
}

/// Writes the format byte and the length bytes of a node.
fn encode_header(writer: &mut Writer, format: FormatType, len: usize) -> Result<(), EncodeError> {
    let count = required_length_byte_count(len).ok_or(EncodeError::LengthExceedsLimit {
        format,
        len,
        max: MAX_LENGTH,
    })?;
    writer.write_byte(format_byte(format, count));
    writer.write_be_uint(len, count);
    Ok(())
}

/// Writes a complete item: header followed by its body.
fn encode_item(writer: &mut Writer, item: &Item) -> Result<(), EncodeError> {
    encode_header(writer, item.format_type(), item_length(item))?;
    match item {
        Item::Binary(vals) | Item::Ascii(vals) | Item::U1(vals) => writer.write_bytes(vals),
        Item::Boolean(vals) => {
            for &val in vals {
                writer.write_byte(u8::from(val));
            }
        }
        Item::I1(vals) => writer.write_elements(vals),
        Item::I2(vals) => writer.write_elements(vals),
        Item::I4(vals) => writer.write_elements(vals),
        Item::I8(vals) => writer.write_elements(vals),
        Item::U2(vals) => writer.write_elements(vals),
        Item::U4(vals) => writer.write_elements(vals),
        Item::U8(vals) => writer.write_elements(vals),
        Item::F4(vals) => writer.write_elements(vals),
        Item::F8(vals) => writer.write_elements(vals),
    }
    Ok(())
}

/// Size hint for the root node; lists grow the buffer as they go.
fn estimate_capacity(value: &Value) -> usize {
    match value {
        Value::Item(item) => item_length(item).min(MAX_LENGTH) + 4,
        Value::List(list) => list.len().saturating_mul(4).min(MAX_LENGTH) + 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{DecodeOptions, decode_value, decode_value_with_options};
    use crate::error::DecodeError;
    use crate::limits::MAX_NESTING_DEPTH;

    #[test]
    fn test_empty_binary() {
        let bytes = encode_value(&Item::Binary(vec![]).into()).unwrap();
        assert_eq!(bytes, vec![0b001000_01, 0x00]);
    }

    #[test]
    fn test_boolean() {
        let bytes = encode_value(&Item::Boolean(vec![true, false]).into()).unwrap();
        assert_eq!(bytes, vec![0b001001_01, 0x02, 0x01, 0x00]);
    }

    #[test]
    fn test_u2_big_endian() {
        let bytes = encode_value(&Item::U2(vec![1, 2, 3, 4]).into()).unwrap();
        assert_eq!(bytes, vec![0b101010_01, 8, 0, 1, 0, 2, 0, 3, 0, 4]);
    }

    #[test]
    fn test_signed_and_float() {
        let bytes = encode_value(&Item::I2(vec![-1]).into()).unwrap();
        assert_eq!(bytes, vec![0b011010_01, 2, 0xFF, 0xFF]);

        let bytes = encode_value(&Item::F8(vec![1.0]).into()).unwrap();
        assert_eq!(bytes, vec![0b100000_01, 8, 0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_length_byte_boundaries() {
        let cases = [
            (0xFF, vec![0b101001_01, 0xFF]),
            (0x100, vec![0b101001_10, 0x01, 0x00]),
            (0xFFFF, vec![0b101001_10, 0xFF, 0xFF]),
            (0x10000, vec![0b101001_11, 0x01, 0x00, 0x00]),
        ];
        for (len, header) in cases {
            let bytes = encode_value(&Item::U1(vec![0; len]).into()).unwrap();
            assert_eq!(&bytes[..header.len()], &header[..], "header for {:#x}", len);
            assert_eq!(bytes.len(), header.len() + len);
        }
    }

    #[test]
    fn test_max_length_boundary() {
        let bytes = encode_value(&Item::Binary(vec![0; MAX_LENGTH]).into()).unwrap();
        assert_eq!(&bytes[..4], &[0b001000_11, 0xFF, 0xFF, 0xFF]);

        let result = encode_value(&Item::Binary(vec![0; MAX_LENGTH + 1]).into());
        assert_eq!(
            result,
            Err(EncodeError::LengthExceedsLimit {
                format: FormatType::Binary,
                len: MAX_LENGTH + 1,
                max: MAX_LENGTH,
            })
        );
    }

    #[test]
    fn test_wide_items_count_bytes() {
        // 0x40_0000 four-byte elements = 0x100_0000 bytes, one past the limit.
        let result = encode_value(&Item::U4(vec![0; 0x40_0000]).into());
        assert!(matches!(
            result,
            Err(EncodeError::LengthExceedsLimit { len: 0x100_0000, .. })
        ));
    }

    #[test]
    #[rustfmt::skip]
    fn test_nested_list() {
        let nums = Value::Item(Item::U1(vec![1, 2]));
        let inner = Value::List(vec![nums.clone()]);
        let value = Value::List(vec![nums, inner, Item::ascii("msg").into()]);

        let bytes = encode_value(&value).unwrap();
        assert_eq!(
            bytes,
            vec![
                0b000000_01, 3,
                0b101001_01, 2, 1, 2,
                0b000000_01, 1,
                0b101001_01, 2, 1, 2,
                0b010000_01, 3, b'm', b's', b'g',
            ]
        );
    }

    #[test]
    fn test_failure_discards_partial_output() {
        let value = Value::List(vec![
            Item::U1(vec![1]).into(),
            Value::List(vec![Item::U1(vec![0; MAX_LENGTH + 1]).into()]),
        ]);
        assert!(encode_value(&value).is_err());

        let mut writer = Writer::new();
        writer.write_bytes(&[0xAA, 0xBB]);
        assert!(encode_value_into(&mut writer, &value).is_err());
        assert_eq!(writer.as_bytes(), &[0xAA, 0xBB]);

        let written = encode_value_into(&mut writer, &Item::U1(vec![7]).into()).unwrap();
        assert_eq!(written, 3);
        assert_eq!(writer.as_bytes(), &[0xAA, 0xBB, 0b101001_01, 1, 7]);
    }

    #[test]
    fn test_tree_deeper_than_decode_limit() {
        let depth = MAX_NESTING_DEPTH + 1;
        let mut value = Value::List(vec![]);
        for _ in 1..depth {
            value = Value::List(vec![value]);
        }
        let bytes = encode_value(&value).unwrap();
        assert_eq!(bytes.len(), 2 * depth);

        assert_eq!(
            decode_value(&bytes),
            Err(DecodeError::NestingTooDeep {
                max: MAX_NESTING_DEPTH
            })
        );

        let options = DecodeOptions::new().max_depth(depth);
        let (decoded, consumed) = decode_value_with_options(&bytes, &options).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn test_deep_tree_does_not_overflow_stack() {
        let mut value = Value::List(vec![]);
        for _ in 0..100_000 {
            value = Value::List(vec![value]);
        }
        let bytes = encode_value(&value).unwrap();
        assert_eq!(bytes.len(), 2 * 100_001);

        // Unwind iteratively; the derived Drop would recurse.
        let mut current = Some(value);
        while let Some(Value::List(mut list)) = current.take() {
            current = list.pop();
        }
    }
}
