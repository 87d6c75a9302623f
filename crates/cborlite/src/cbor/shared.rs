//! Convenience wrappers using the default options.

use super::{CborDecoder, CborEncoder, CborError};
use crate::CborValue;

/// Encode a [`CborValue`] into CBOR bytes.
pub fn encode(value: &CborValue) -> Result<Vec<u8>, CborError> {
    let mut encoder = CborEncoder::new();
    encoder.encode(value)
}

/// Decode CBOR bytes holding exactly one item into a [`CborValue`].
pub fn decode(blob: &[u8]) -> Result<CborValue, CborError> {
    let decoder = CborDecoder::new();
    decoder.decode(blob)
}

/// Decode the first item of `blob`, returning it with the number of bytes
/// it occupied.
pub fn decode_with_consumed(blob: &[u8]) -> Result<(CborValue, usize), CborError> {
    let decoder = CborDecoder::new();
    decoder.decode_with_consumed(blob)
}
