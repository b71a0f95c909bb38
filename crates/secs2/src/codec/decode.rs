//! Decoding of SECS-II bytes into a value tree.

use crate::codec::length::{is_valid_length_byte_count, split_format_byte};
use crate::codec::primitives::{BigEndian, Reader};
use crate::error::DecodeError;
use crate::limits::{MAX_NESTING_DEPTH, MIN_NODE_SIZE};
use crate::model::{FormatType, Item, List, Value};

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum list nesting depth. A root list is depth 1.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Creates default decoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum list nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Decodes one value from the start of `input`.
///
/// Returns the value and the number of bytes it occupied. Bytes after the
/// value are left untouched and are not counted.
pub fn decode_value(input: &[u8]) -> Result<(Value, usize), DecodeError> {
    decode_value_with_options(input, &DecodeOptions::default())
}

/// Decodes one value from the start of `input` with custom options.
pub fn decode_value_with_options(
    input: &[u8],
    options: &DecodeOptions,
) -> Result<(Value, usize), DecodeError> {
    let mut reader = Reader::new(input);
    match decode_node(&mut reader, 0, options) {
        Ok(value) => {
            tracing::trace!(consumed = reader.position(), "decoded SECS-II value");
            Ok((value, reader.position()))
        }
        Err(err) => {
            tracing::debug!(%err, input_len = input.len(), "failed to decode SECS-II value");
            Err(err)
        }
    }
}

/// Decodes consecutive values until `input` is exhausted.
pub fn decode_all(input: &[u8]) -> Result<Vec<Value>, DecodeError> {
    let mut values = Vec::new();
    let mut offset = 0;
    while offset < input.len() {
        let (value, consumed) = decode_value(&input[offset..])?;
        values.push(value);
        offset += consumed;
    }
    Ok(values)
}

/// Decodes a single node (header and body). `depth` is the number of
/// enclosing lists.
fn decode_node(
    reader: &mut Reader<'_>,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, DecodeError> {
    let (code, length_byte_count) = split_format_byte(reader.read_byte("format byte")?);
    if !is_valid_length_byte_count(length_byte_count) {
        return Err(DecodeError::InvalidLengthByteCount {
            count: length_byte_count,
        });
    }
    let format = FormatType::from_code(code).ok_or(DecodeError::UnknownType { code })?;
    let len = reader.read_be_uint(length_byte_count, "length bytes")?;

    let item = match format {
        FormatType::List => return decode_list(reader, len, depth, options).map(Value::List),
        FormatType::Boolean => {
            let bytes = reader.read_bytes(len, "Boolean")?;
            Item::Boolean(bytes.iter().map(|&b| b != 0).collect())
        }
        FormatType::Binary => Item::Binary(reader.read_bytes(len, "Binary")?.to_vec()),
        FormatType::Ascii => Item::Ascii(reader.read_bytes(len, "ASCII")?.to_vec()),
        FormatType::I1 => Item::I1(read_numeric(reader, format, len)?),
        FormatType::I2 => Item::I2(read_numeric(reader, format, len)?),
        FormatType::I4 => Item::I4(read_numeric(reader, format, len)?),
        FormatType::I8 => Item::I8(read_numeric(reader, format, len)?),
        FormatType::U1 => Item::U1(read_numeric(reader, format, len)?),
        FormatType::U2 => Item::U2(read_numeric(reader, format, len)?),
        FormatType::U4 => Item::U4(read_numeric(reader, format, len)?),
        FormatType::U8 => Item::U8(read_numeric(reader, format, len)?),
        FormatType::F4 => Item::F4(read_numeric(reader, format, len)?),
        FormatType::F8 => Item::F8(read_numeric(reader, format, len)?),
    };
    Ok(Value::Item(item))
}

/// Decodes `count` direct elements of a list.
fn decode_list(
    reader: &mut Reader<'_>,
    count: usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<List, DecodeError> {
    let depth = depth + 1;
    if depth > options.max_depth {
        return Err(DecodeError::NestingTooDeep {
            max: options.max_depth,
        });
    }

    // Each element takes at least two bytes, so a hostile count cannot force
    // a larger allocation than the input could ever fill.
    let mut list = Vec::with_capacity(count.min(reader.remaining_len() / MIN_NODE_SIZE));
    for _ in 0..count {
        list.push(decode_node(reader, depth, options)?);
    }
    Ok(list)
}

/// Reads a body of `len` bytes as big-endian elements of `format`.
fn read_numeric<T: BigEndian>(
    reader: &mut Reader<'_>,
    format: FormatType,
    len: usize,
) -> Result<Vec<T>, DecodeError> {
    if len % T::WIDTH != 0 {
        return Err(DecodeError::UnalignedLength {
            len,
            format,
            width: T::WIDTH,
        });
    }
    reader.read_elements(len, format.name())
}
