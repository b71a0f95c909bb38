//! The recursive value tree.

use crate::model::{FormatType, Item};

/// A SECS-II list. Owns its elements; nesting is expressed by elements that
/// are themselves lists.
pub type List = Vec<Value>;

/// An element of a list, and the root of every message: either a leaf item or
/// a nested list.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Item(Item),
    List(List),
}

macro_rules! item_accessors {
    ($($(#[$doc:meta])* $name:ident => $variant:ident: $elem:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> Option<&[$elem]> {
                match self {
                    Value::Item(Item::$variant(vals)) => Some(vals),
                    _ => None,
                }
            }
        )*
    };
}

impl Value {
    /// Returns the wire type of this value.
    pub fn format_type(&self) -> FormatType {
        match self {
            Value::Item(item) => item.format_type(),
            Value::List(_) => FormatType::List,
        }
    }

    /// Returns the number of elements.
    ///
    /// For a list this counts direct elements only, never the contents of
    /// nested lists. For an item it counts elements, not bytes.
    pub fn size(&self) -> usize {
        match self {
            Value::Item(item) => item.len(),
            Value::List(list) => list.len(),
        }
    }

    /// Returns true if this value is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns the item, if this value is one.
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Value::Item(item) => Some(item),
            Value::List(_) => None,
        }
    }

    /// Returns the list elements, if this value is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            Value::Item(_) => None,
        }
    }

    /// Returns the ASCII item as `&str` if it holds valid UTF-8.
    pub fn as_ascii_str(&self) -> Option<&str> {
        self.as_ascii().and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    item_accessors! {
        /// Returns the bytes of a Binary item.
        as_binary => Binary: u8;
        as_boolean => Boolean: bool;
        /// Returns the raw bytes of an ASCII item.
        as_ascii => Ascii: u8;
        as_i1 => I1: i8;
        as_i2 => I2: i16;
        as_i4 => I4: i32;
        as_i8 => I8: i64;
        as_u1 => U1: u8;
        as_u2 => U2: u16;
        as_u4 => U4: u32;
        as_u8 => U8: u64;
        as_f4 => F4: f32;
        as_f8 => F8: f64;
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        Value::Item(item)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_size_counts_direct_elements() {
        let value = Value::List(vec![
            Value::List(vec![]),
            Item::I1(vec![1, 2, 3]).into(),
        ]);
        assert_eq!(value.size(), 2);
        assert_eq!(value.format_type(), FormatType::List);
    }

    #[test]
    fn test_typed_accessors() {
        let value: Value = Item::Boolean(vec![true, false]).into();
        assert_eq!(value.as_boolean(), Some(&[true, false][..]));
        assert_eq!(value.as_list(), None);
        assert_eq!(value.as_u1(), None);
        assert!(value.as_item().is_some());
        assert!(!value.is_list());

        let list = Value::List(vec![value.clone()]);
        assert_eq!(list.as_list(), Some(&[value][..]));
        assert_eq!(list.as_boolean(), None);
        assert!(list.as_item().is_none());
        assert!(list.is_list());
    }

    #[test]
    fn test_binary_and_u1_are_distinct() {
        let binary: Value = Item::Binary(vec![1, 2]).into();
        let u1: Value = Item::U1(vec![1, 2]).into();
        assert_ne!(binary, u1);
        assert!(binary.as_u1().is_none());
        assert!(u1.as_binary().is_none());
    }

    #[test]
    fn test_ascii_str() {
        let value: Value = Item::ascii("hello").into();
        assert_eq!(value.as_ascii_str(), Some("hello"));
        assert_eq!(value.as_ascii(), Some(&b"hello"[..]));

        let invalid: Value = Item::Ascii(vec![0xFF]).into();
        assert_eq!(invalid.as_ascii_str(), None);
        assert_eq!(invalid.as_ascii(), Some(&[0xFF][..]));
    }
}
