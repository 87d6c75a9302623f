//! Compact binary codec modeled on CBOR.
//!
//! Supports the subset of CBOR needed for unsigned integers, text strings,
//! arrays and string-keyed maps, with lengths up to `0xffff`. Every item is a
//! one-byte prefix (major type in the top 3 bits, inline length or escape
//! code in the low 5 bits) optionally followed by a 1 or 2 byte big-endian
//! length, then the payload.
//!
//! ```
//! use cborlite::{decode, encode, CborValue};
//!
//! let value = CborValue::Map(vec![("a".to_owned(), CborValue::UInt(1))]);
//! let bytes = encode(&value).unwrap();
//! assert_eq!(bytes, vec![0xa1, 0x61, 0x61, 0x01]);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

mod value;

pub mod cbor;

pub use value::CborValue;

pub use cbor::{
    decode, decode_with_consumed, encode, CborDecoder, CborEncoder, CborError, CborErrorKind,
    DecoderOptions, EncoderOptions, TextEncoding,
};
