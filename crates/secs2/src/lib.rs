//! SECS-II: the binary item format of semiconductor-equipment communication.
//!
//! This crate provides encoding, decoding, and SML rendering for SECS-II
//! data as defined in SEMI E5.
//!
//! # Overview
//!
//! A SECS-II message body is a single self-describing node: either a leaf
//! item (a homogeneous sequence of bytes, booleans, characters or numbers) or
//! a list of nodes, nested to any depth. Each node starts with a format byte
//! carrying a 6-bit type code and the number (1-3) of big-endian length bytes
//! that follow.
//!
//! # Quick Start
//!
//! ```rust
//! use secs2::{ListBuilder, Message};
//!
//! let msg = Message::new(
//!     ListBuilder::new()
//!         .u4(vec![1001])
//!         .ascii("ready")
//!         .build(),
//! );
//!
//! // Encode to binary
//! let bytes = msg.to_bytes().unwrap();
//!
//! // Decode back
//! let (decoded, consumed) = Message::from_bytes(&bytes).unwrap();
//! assert_eq!(decoded, msg);
//! assert_eq!(consumed, bytes.len());
//!
//! // Render as SML
//! assert_eq!(decoded.to_sml(2), "<L [2]\n  <U4 [1] 1001>\n  <A [5] \"ready\">\n>");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (FormatType, Item, Value, Message)
//! - [`codec`]: Binary encoding/decoding
//! - [`sml`]: SML text rendering
//! - [`error`]: Error types
//! - [`limits`]: Wire constants and decoding limits
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Malformed input is rejected with descriptive errors, never a panic
//! - List nesting depth is bounded (see [`DecodeOptions`])
//! - Pre-allocation is bounded by the size of the input

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod sml;

// Re-export commonly used types at crate root
pub use codec::{
    DecodeOptions, decode_all, decode_value, decode_value_with_options, encode_value,
    encode_value_into,
};
pub use error::{DecodeError, EncodeError, ErrorCode};
pub use model::{FormatType, Item, List, ListBuilder, Message, Value, decode_message};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
