//! The message facade.

use std::fmt;

use crate::codec::{decode_value, encode_value};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{DEFAULT_INDENT_WIDTH, MAX_LENGTH};
use crate::model::{FormatType, Item, Value};
use crate::sml;

/// A SECS-II message: exactly one value, either a single item or a list.
///
/// Equality is structural over the whole value tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    value: Value,
}

impl Message {
    /// Maximum wire length of any node: bytes for an item, direct elements
    /// for a list.
    pub const MAX_LENGTH: usize = MAX_LENGTH;

    /// Creates a message holding `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Decodes a message from the start of `bytes`.
    ///
    /// Returns the message and the number of bytes consumed; trailing bytes
    /// are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<(Message, usize), DecodeError> {
        decode_message(bytes)
    }

    /// Encodes the message.
    ///
    /// Fails if any node in the tree is longer than [`Message::MAX_LENGTH`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        encode_value(&self.value)
    }

    /// Returns the wire type of the stored value.
    pub fn format_type(&self) -> FormatType {
        self.value.format_type()
    }

    /// Returns the number of elements in the stored value.
    ///
    /// For a list this counts direct elements only.
    pub fn size(&self) -> usize {
        self.value.size()
    }

    /// Returns the stored value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the stored item, if the message is not a list.
    pub fn get_item(&self) -> Option<&Item> {
        self.value.as_item()
    }

    /// Returns the stored list, if the message is one.
    pub fn get_list(&self) -> Option<&[Value]> {
        self.value.as_list()
    }

    /// Consumes the message and returns its value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Replaces the stored value, returning the previous one.
    pub fn replace(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(&mut self.value, value.into())
    }

    /// Swaps the contents of two messages.
    pub fn swap(&mut self, other: &mut Message) {
        std::mem::swap(&mut self.value, &mut other.value);
    }

    /// Renders the message as SML with `indent_width` spaces per level.
    pub fn to_sml(&self, indent_width: usize) -> String {
        sml::to_sml(&self.value, indent_width)
    }
}

/// Decodes a message from the start of `bytes`. Same as [`Message::from_bytes`].
pub fn decode_message(bytes: &[u8]) -> Result<(Message, usize), DecodeError> {
    decode_value(bytes).map(|(value, consumed)| (Message { value }, consumed))
}

/// Formats as SML. The formatter width, if given, sets the indent width:
/// `format!("{msg:2}")` indents by two spaces per level.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent_width = f.width().unwrap_or(DEFAULT_INDENT_WIDTH);
        sml::write_sml(f, &self.value, 0, indent_width)
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message { value }
    }
}

impl From<Item> for Message {
    fn from(item: Item) -> Self {
        Message::new(item)
    }
}

impl From<Message> for Value {
    fn from(message: Message) -> Self {
        message.value
    }
}
