//! `CborDecoder` — reads CBOR bytes back into a [`CborValue`] tree.

use cborlite_buffers::Reader;

use super::constants::{MajorType, MAX_INLINE, MINOR_MASK, MINOR_U16, MINOR_U8};
use super::error::CborError;
use super::options::{DecoderOptions, TextEncoding};
use crate::CborValue;

/// CBOR decoder for the integer/text/array/map subset.
///
/// Decoding is recursive descent over a shared [`Reader`] cursor: each item
/// reads its header, then composites decode their children in place.
#[derive(Debug, Clone, Default)]
pub struct CborDecoder {
    pub options: DecoderOptions,
}

impl CborDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        Self { options }
    }

    /// Decodes exactly one item spanning the whole buffer.
    pub fn decode(&self, data: &[u8]) -> Result<CborValue, CborError> {
        let (value, consumed) = self.decode_with_consumed(data)?;
        if consumed != data.len() {
            let err = CborError::TrailingBytes { offset: consumed };
            tracing::debug!(error = %err, size = data.len(), "cbor decode rejected input");
            return Err(err);
        }
        Ok(value)
    }

    /// Decodes one item from the front of `data` and reports how many bytes
    /// it occupied.
    pub fn decode_with_consumed(&self, data: &[u8]) -> Result<(CborValue, usize), CborError> {
        let mut reader = Reader::new(data);
        match self.read_any(&mut reader, 0) {
            Ok(value) => {
                tracing::trace!(kind = value.kind(), consumed = reader.x, "decoded cbor value");
                Ok((value, reader.x))
            }
            Err(err) => {
                tracing::debug!(error = %err, size = data.len(), "cbor decode rejected input");
                Err(err)
            }
        }
    }

    /// Reads one item at the reader's cursor. `depth` counts the enclosing
    /// arrays and maps.
    pub fn read_any(&self, reader: &mut Reader<'_>, depth: usize) -> Result<CborValue, CborError> {
        let offset = reader.x;
        let initial = reader.u8()?;
        let major = MajorType::from_initial(initial).ok_or(CborError::UnknownTag {
            byte: initial,
            offset,
        })?;
        let length = read_length(reader, initial, offset)?;
        match major {
            MajorType::UInt => Ok(CborValue::UInt(length)),
            MajorType::Text => Ok(CborValue::Text(self.read_str(reader, length)?)),
            MajorType::Array => self.read_arr(reader, length, depth, offset),
            MajorType::Map => self.read_map(reader, length, depth, offset),
        }
    }

    fn read_str(&self, reader: &mut Reader<'_>, length: u64) -> Result<String, CborError> {
        let offset = reader.x;
        let bytes = reader.buf(length as usize)?;
        match self.options.text {
            TextEncoding::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
            TextEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| CborError::InvalidUtf8 { offset }),
        }
    }

    fn read_arr(
        &self,
        reader: &mut Reader<'_>,
        length: u64,
        depth: usize,
        offset: usize,
    ) -> Result<CborValue, CborError> {
        self.enter(reader, length, depth, offset)?;
        let mut items = Vec::with_capacity(length as usize);
        for _ in 0..length {
            items.push(self.read_any(reader, depth + 1)?);
        }
        Ok(CborValue::Array(items))
    }

    fn read_map(
        &self,
        reader: &mut Reader<'_>,
        length: u64,
        depth: usize,
        offset: usize,
    ) -> Result<CborValue, CborError> {
        self.enter(reader, length, depth, offset)?;
        let mut entries = Vec::with_capacity(length as usize);
        for _ in 0..length {
            let key = self.read_key(reader)?;
            let value = self.read_any(reader, depth + 1)?;
            entries.push((key, value));
        }
        Ok(CborValue::Map(entries))
    }

    fn read_key(&self, reader: &mut Reader<'_>) -> Result<String, CborError> {
        let offset = reader.x;
        let initial = reader.peek()?;
        if MajorType::from_initial(initial) != Some(MajorType::Text) {
            return Err(CborError::MalformedStructure {
                offset,
                reason: "map key is not a text string",
            });
        }
        reader.x += 1;
        let length = read_length(reader, initial, offset)?;
        self.read_str(reader, length)
    }

    /// Checks the nesting limit, and that at least one byte per child is left
    /// before anything is allocated.
    fn enter(
        &self,
        reader: &Reader<'_>,
        children: u64,
        depth: usize,
        offset: usize,
    ) -> Result<(), CborError> {
        if depth >= self.options.max_depth {
            return Err(CborError::MalformedStructure {
                offset,
                reason: "nesting exceeds maximum depth",
            });
        }
        if children > reader.size() as u64 {
            return Err(CborError::TruncatedBuffer {
                offset: reader.x,
                needed: children as usize,
            });
        }
        Ok(())
    }
}

/// Reads the argument encoded by the minor bits of `initial`, consuming any
/// explicit length bytes.
fn read_length(reader: &mut Reader<'_>, initial: u8, offset: usize) -> Result<u64, CborError> {
    match initial & MINOR_MASK {
        minor @ 0..=MAX_INLINE => Ok(u64::from(minor)),
        MINOR_U8 => Ok(u64::from(reader.u8()?)),
        MINOR_U16 => Ok(u64::from(reader.u16()?)),
        _ => Err(CborError::UnsupportedMinor {
            byte: initial,
            offset,
        }),
    }
}
