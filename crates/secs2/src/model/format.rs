//! Format codes of SECS-II data.

use std::fmt;

/// Wire types and their 6-bit format codes (SEMI E5 Section 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FormatType {
    /// List of nested values.
    List = 0b000000,
    /// Binary bytes.
    Binary = 0b001000,
    /// Boolean values, one byte each.
    Boolean = 0b001001,
    /// ASCII character string.
    Ascii = 0b010000,
    /// 8-byte signed integers.
    I8 = 0b011000,
    /// 1-byte signed integers.
    I1 = 0b011001,
    /// 2-byte signed integers.
    I2 = 0b011010,
    /// 4-byte signed integers.
    I4 = 0b011100,
    /// 8-byte floating points.
    F8 = 0b100000,
    /// 4-byte floating points.
    F4 = 0b100100,
    /// 8-byte unsigned integers.
    U8 = 0b101000,
    /// 1-byte unsigned integers.
    U1 = 0b101001,
    /// 2-byte unsigned integers.
    U2 = 0b101010,
    /// 4-byte unsigned integers.
    U4 = 0b101100,
}

impl FormatType {
    /// All format types, in code order.
    pub const ALL: [FormatType; 14] = [
        FormatType::List,
        FormatType::Binary,
        FormatType::Boolean,
        FormatType::Ascii,
        FormatType::I8,
        FormatType::I1,
        FormatType::I2,
        FormatType::I4,
        FormatType::F8,
        FormatType::F4,
        FormatType::U8,
        FormatType::U1,
        FormatType::U2,
        FormatType::U4,
    ];

    /// Creates a FormatType from its 6-bit wire code.
    pub fn from_code(code: u8) -> Option<FormatType> {
        match code {
            0b000000 => Some(FormatType::List),
            0b001000 => Some(FormatType::Binary),
            0b001001 => Some(FormatType::Boolean),
            0b010000 => Some(FormatType::Ascii),
            0b011000 => Some(FormatType::I8),
            0b011001 => Some(FormatType::I1),
            0b011010 => Some(FormatType::I2),
            0b011100 => Some(FormatType::I4),
            0b100000 => Some(FormatType::F8),
            0b100100 => Some(FormatType::F4),
            0b101000 => Some(FormatType::U8),
            0b101001 => Some(FormatType::U1),
            0b101010 => Some(FormatType::U2),
            0b101100 => Some(FormatType::U4),
            _ => None,
        }
    }

    /// Returns the 6-bit wire code.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the wire width of one element in bytes, or `None` for lists.
    ///
    /// Booleans occupy one byte each on the wire.
    pub fn element_width(self) -> Option<usize> {
        match self {
            FormatType::List => None,
            FormatType::Binary
            | FormatType::Boolean
            | FormatType::Ascii
            | FormatType::I1
            | FormatType::U1 => Some(1),
            FormatType::I2 | FormatType::U2 => Some(2),
            FormatType::I4 | FormatType::U4 | FormatType::F4 => Some(4),
            FormatType::I8 | FormatType::U8 | FormatType::F8 => Some(8),
        }
    }

    /// Returns the human-readable type name.
    pub fn name(self) -> &'static str {
        match self {
            FormatType::List => "List",
            FormatType::Binary => "Binary",
            FormatType::Boolean => "Boolean",
            FormatType::Ascii => "ASCII",
            FormatType::I1 => "I1",
            FormatType::I2 => "I2",
            FormatType::I4 => "I4",
            FormatType::I8 => "I8",
            FormatType::U1 => "U1",
            FormatType::U2 => "U2",
            FormatType::U4 => "U4",
            FormatType::U8 => "U8",
            FormatType::F4 => "F4",
            FormatType::F8 => "F8",
        }
    }

    /// Returns the SML tag (`L`, `B`, `A`, `Boolean`, `U4`, ...).
    pub fn sml_tag(self) -> &'static str {
        match self {
            FormatType::List => "L",
            FormatType::Binary => "B",
            FormatType::Ascii => "A",
            other => other.name(),
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
