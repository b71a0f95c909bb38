//! Leaf items: homogeneous sequences of one wire type.

use crate::model::FormatType;

/// A single SECS-II item (anything but a list).
///
/// Every variant is a homogeneous sequence whose elements share one wire
/// width. ASCII is kept as raw bytes so that any received string survives a
/// decode/encode round trip unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Binary(Vec<u8>),
    Boolean(Vec<bool>),
    Ascii(Vec<u8>),
    I1(Vec<i8>),
    I2(Vec<i16>),
    I4(Vec<i32>),
    I8(Vec<i64>),
    U1(Vec<u8>),
    U2(Vec<u16>),
    U4(Vec<u32>),
    U8(Vec<u64>),
    F4(Vec<f32>),
    F8(Vec<f64>),
}

/// Applies `$body` to the sequence held by any item variant.
macro_rules! with_elements {
    ($item:expr, $vals:ident => $body:expr) => {
        match $item {
            Item::Binary($vals) => $body,
            Item::Boolean($vals) => $body,
            Item::Ascii($vals) => $body,
            Item::I1($vals) => $body,
            Item::I2($vals) => $body,
            Item::I4($vals) => $body,
            Item::I8($vals) => $body,
            Item::U1($vals) => $body,
            Item::U2($vals) => $body,
            Item::U4($vals) => $body,
            Item::U8($vals) => $body,
            Item::F4($vals) => $body,
            Item::F8($vals) => $body,
        }
    };
}

impl Item {
    /// Creates an ASCII item from a string.
    pub fn ascii(text: impl Into<String>) -> Self {
        Item::Ascii(text.into().into_bytes())
    }

    /// Returns the wire type of this item.
    pub fn format_type(&self) -> FormatType {
        match self {
            Item::Binary(_) => FormatType::Binary,
            Item::Boolean(_) => FormatType::Boolean,
            Item::Ascii(_) => FormatType::Ascii,
            Item::I1(_) => FormatType::I1,
            Item::I2(_) => FormatType::I2,
            Item::I4(_) => FormatType::I4,
            Item::I8(_) => FormatType::I8,
            Item::U1(_) => FormatType::U1,
            Item::U2(_) => FormatType::U2,
            Item::U4(_) => FormatType::U4,
            Item::U8(_) => FormatType::U8,
            Item::F4(_) => FormatType::F4,
            Item::F8(_) => FormatType::F8,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        with_elements!(self, vals => vals.len())
    }

    /// Returns true if the item holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the wire width of one element in bytes.
    pub fn element_width(&self) -> usize {
        match self {
            Item::Binary(_) | Item::Boolean(_) | Item::Ascii(_) | Item::I1(_) | Item::U1(_) => 1,
            Item::I2(_) | Item::U2(_) => 2,
            Item::I4(_) | Item::U4(_) | Item::F4(_) => 4,
            Item::I8(_) | Item::U8(_) | Item::F8(_) => 8,
        }
    }

    /// Returns the body size in bytes, which is the item's wire length.
    pub fn byte_len(&self) -> usize {
        self.len().saturating_mul(self.element_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_type_matches_element_width() {
        let items = [
            Item::Binary(vec![]),
            Item::Boolean(vec![]),
            Item::ascii(""),
            Item::I1(vec![]),
            Item::I2(vec![]),
            Item::I4(vec![]),
            Item::I8(vec![]),
            Item::U1(vec![]),
            Item::U2(vec![]),
            Item::U4(vec![]),
            Item::U8(vec![]),
            Item::F4(vec![]),
            Item::F8(vec![]),
        ];
        for item in items {
            assert_eq!(
                item.format_type().element_width(),
                Some(item.element_width()),
                "width mismatch for {}",
                item.format_type()
            );
        }
    }

    #[test]
    fn test_len_and_byte_len() {
        let item = Item::U4(vec![1, 2, 3]);
        assert_eq!(item.len(), 3);
        assert_eq!(item.byte_len(), 12);

        let item = Item::Boolean(vec![true, false]);
        assert_eq!(item.len(), 2);
        assert_eq!(item.byte_len(), 2);

        let item = Item::ascii("hello");
        assert_eq!(item.len(), 5);
        assert!(!item.is_empty());

        assert!(Item::F8(vec![]).is_empty());
    }
}
