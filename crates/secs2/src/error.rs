//! Error types for SECS-II encoding and decoding.

use thiserror::Error;

use crate::model::FormatType;

/// Broad classification of decode errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The buffer is too short, or a length does not fit the element size.
    MessageSize,
    /// A header field holds a value outside its domain.
    OutOfDomain,
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("incomplete data while reading {context}: need {needed} bytes, {available} available")]
    IncompleteData {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("unknown format type: 0x{code:02X}")]
    UnknownType { code: u8 },

    #[error("invalid number of length bytes: {count}")]
    InvalidLengthByteCount { count: usize },

    #[error("length {len} is not aligned to {format} size {width}")]
    UnalignedLength {
        len: usize,
        format: FormatType,
        width: usize,
    },

    #[error("list nesting exceeds maximum depth {max}")]
    NestingTooDeep { max: usize },
}

impl DecodeError {
    /// Returns the classification of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::IncompleteData { .. } | DecodeError::UnalignedLength { .. } => {
                ErrorCode::MessageSize
            }
            DecodeError::UnknownType { .. }
            | DecodeError::InvalidLengthByteCount { .. }
            | DecodeError::NestingTooDeep { .. } => ErrorCode::OutOfDomain,
        }
    }
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{format} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        format: FormatType,
        len: usize,
        max: usize,
    },
}
