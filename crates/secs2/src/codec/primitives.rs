//! Primitive encoding/decoding for the SECS-II binary format.
//!
//! All multi-byte values are big-endian ("MS byte first") on the wire.

use crate::error::DecodeError;

// =============================================================================
// ELEMENTS
// =============================================================================

/// A fixed-width numeric element with a big-endian wire representation.
pub trait BigEndian: Copy + Sized {
    /// Width of one element in bytes.
    const WIDTH: usize;

    /// Decodes one element. `bytes` must be exactly `WIDTH` long.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Appends the big-endian bytes of this element.
    fn extend_be(self, buf: &mut Vec<u8>);
}

macro_rules! impl_big_endian {
    ($($t:ty),*) => {
        $(
            impl BigEndian for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn from_be_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_be_bytes(raw)
                }

                #[inline]
                fn extend_be(self, buf: &mut Vec<u8>) {
                    buf.extend_from_slice(&self.to_be_bytes());
                }
            }
        )*
    };
}
impl_big_endian!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        let bytes = self.read_bytes(1, context)?;
        Ok(bytes[0])
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        let available = self.remaining_len();
        if n > available {
            return Err(DecodeError::IncompleteData {
                context,
                needed: n,
                available,
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads an unsigned big-endian integer of `count` bytes (at most 8).
    #[inline]
    pub fn read_be_uint(
        &mut self,
        count: usize,
        context: &'static str,
    ) -> Result<usize, DecodeError> {
        debug_assert!(count <= 8);
        let bytes = self.read_bytes(count, context)?;
        Ok(bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize))
    }

    /// Reads `len` bytes as a sequence of big-endian elements.
    ///
    /// The caller must check that `len` is a multiple of `T::WIDTH`.
    pub fn read_elements<T: BigEndian>(
        &mut self,
        len: usize,
        context: &'static str,
    ) -> Result<Vec<T>, DecodeError> {
        debug_assert_eq!(len % T::WIDTH, 0);
        let bytes = self.read_bytes(len, context)?;
        Ok(bytes.chunks_exact(T::WIDTH).map(T::from_be_slice).collect())
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Discards everything written after the first `len` bytes.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes the low `count` bytes of `value`, most significant first.
    #[inline]
    pub fn write_be_uint(&mut self, value: usize, count: usize) {
        debug_assert!(count <= 8);
        let raw = (value as u64).to_be_bytes();
        self.buf.extend_from_slice(&raw[raw.len() - count..]);
    }

    /// Writes a sequence of big-endian elements.
    pub fn write_elements<T: BigEndian>(&mut self, vals: &[T]) {
        self.buf.reserve(vals.len() * T::WIDTH);
        for &val in vals {
            val.extend_be(&mut self.buf);
        }
    }
}
