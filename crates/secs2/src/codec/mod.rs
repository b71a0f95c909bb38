//! Binary encoding/decoding for SECS-II.
//!
//! This module implements the SECS-II item format (SEMI E5 Section 9).

pub mod decode;
pub mod encode;
pub mod length;
pub mod primitives;

pub use decode::{DecodeOptions, decode_all, decode_value, decode_value_with_options};
pub use encode::{encode_value, encode_value_into};
pub use length::{is_within_max_length, length_of, required_length_byte_count};
pub use primitives::{BigEndian, Reader, Writer};
