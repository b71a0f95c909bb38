//! Data model types for SECS-II.
//!
//! This module contains the in-memory representation of SECS-II data:
//! - Format types (wire codes)
//! - Items (leaf sequences)
//! - Values and lists (the recursive tree)
//! - Messages (a single root value)
//! - Builders (ergonomic construction)

pub mod builder;
pub mod format;
pub mod item;
pub mod message;
pub mod value;

pub use builder::ListBuilder;
pub use format::FormatType;
pub use item::Item;
pub use message::{Message, decode_message};
pub use value::{List, Value};
