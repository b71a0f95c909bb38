//! Builder API for ergonomic list construction.
//!
//! # Example
//!
//! ```rust
//! use secs2::model::builder::ListBuilder;
//!
//! // S1F4-style status reply: L { U4 SVID, L { A name, F8 value } }
//! let value = ListBuilder::new()
//!     .u4(vec![1001])
//!     .list(|l| l.ascii("chamber-pressure").f8(vec![0.25]))
//!     .build();
//!
//! assert_eq!(value.size(), 2);
//! ```

use crate::model::{Item, List, Value};

/// Builder for a (possibly nested) list value.
#[derive(Debug, Clone, Default)]
pub struct ListBuilder {
    elements: List,
}

macro_rules! item_methods {
    ($($name:ident => $variant:ident: $elem:ty;)*) => {
        $(
            #[doc = concat!("Appends a ", stringify!($variant), " item.")]
            pub fn $name(self, vals: impl Into<Vec<$elem>>) -> Self {
                self.item(Item::$variant(vals.into()))
            }
        )*
    };
}

impl ListBuilder {
    /// Creates an empty list builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends any value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.elements.push(value.into());
        self
    }

    /// Appends an item.
    pub fn item(self, item: Item) -> Self {
        self.value(item)
    }

    /// Appends a nested list built by `f`.
    pub fn list<F>(self, f: F) -> Self
    where
        F: FnOnce(ListBuilder) -> ListBuilder,
    {
        let nested = f(ListBuilder::new()).build();
        self.value(nested)
    }

    /// Appends an ASCII item.
    pub fn ascii(self, text: impl Into<String>) -> Self {
        self.item(Item::ascii(text))
    }

    item_methods! {
        binary => Binary: u8;
        boolean => Boolean: bool;
        i1 => I1: i8;
        i2 => I2: i16;
        i4 => I4: i32;
        i8 => I8: i64;
        u1 => U1: u8;
        u2 => U2: u16;
        u4 => U4: u32;
        u8 => U8: u64;
        f4 => F4: f32;
        f8 => F8: f64;
    }

    /// Returns the number of elements added so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Builds the list value.
    pub fn build(self) -> Value {
        Value::List(self.elements)
    }
}
