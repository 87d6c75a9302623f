use cborlite_buffers::BufferError;
use thiserror::Error;

/// Error type for CBOR encoding/decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CborError {
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),
    #[error("unknown tag 0x{byte:02x} at offset {offset}")]
    UnknownTag { byte: u8, offset: usize },
    #[error("unsupported length minor in 0x{byte:02x} at offset {offset}")]
    UnsupportedMinor { byte: u8, offset: usize },
    #[error("malformed structure at offset {offset}: {reason}")]
    MalformedStructure { offset: usize, reason: &'static str },
    #[error("invalid UTF-8 in text at offset {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("trailing bytes after item at offset {offset}")]
    TrailingBytes { offset: usize },
    #[error("truncated buffer: {needed} byte(s) needed at offset {offset}")]
    TruncatedBuffer { offset: usize, needed: usize },
}

/// Coarse error classes callers can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CborErrorKind {
    UnsupportedValue,
    UnknownTag,
    MalformedStructure,
    TruncatedBuffer,
}

impl CborError {
    pub fn kind(&self) -> CborErrorKind {
        match self {
            CborError::UnsupportedValue(_) => CborErrorKind::UnsupportedValue,
            CborError::UnknownTag { .. } | CborError::UnsupportedMinor { .. } => {
                CborErrorKind::UnknownTag
            }
            CborError::MalformedStructure { .. }
            | CborError::InvalidUtf8 { .. }
            | CborError::TrailingBytes { .. } => CborErrorKind::MalformedStructure,
            CborError::TruncatedBuffer { .. } => CborErrorKind::TruncatedBuffer,
        }
    }
}

impl From<BufferError> for CborError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer { offset, needed } => {
                CborError::TruncatedBuffer { offset, needed }
            }
        }
    }
}
