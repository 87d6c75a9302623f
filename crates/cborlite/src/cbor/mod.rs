//! CBOR subset codec.
//!
//! The tag table lives in [`constants`]; [`CborEncoder`] and [`CborDecoder`]
//! both derive every header byte from it.

pub mod constants;

mod convert;
mod decoder;
mod encoder;
mod error;
mod options;
mod shared;

pub use decoder::CborDecoder;
pub use encoder::CborEncoder;
pub use error::{CborError, CborErrorKind};
pub use options::{DecoderOptions, EncoderOptions, TextEncoding, DEFAULT_MAX_DEPTH};
pub use shared::{decode, decode_with_consumed, encode};
