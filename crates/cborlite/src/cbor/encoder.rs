//! `CborEncoder` — writes a [`CborValue`] tree as CBOR bytes.

use cborlite_buffers::Writer;

use super::constants::{LengthClass, MajorType, MAX_LENGTH};
use super::error::CborError;
use super::options::{EncoderOptions, TextEncoding};
use crate::CborValue;

/// CBOR encoder for [`CborValue`] trees.
///
/// Every header uses the shortest [`LengthClass`] for its argument. Values
/// outside the supported grammar (integers or lengths above `0xffff`,
/// non-Latin-1 text in [`TextEncoding::Latin1`] mode) fail with
/// [`CborError::UnsupportedValue`]; whatever was written before the failure
/// is discarded.
pub struct CborEncoder {
    pub writer: Writer,
    pub options: EncoderOptions,
}

impl Default for CborEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CborEncoder {
    pub fn new() -> Self {
        Self::with_options(EncoderOptions::default())
    }

    pub fn with_options(options: EncoderOptions) -> Self {
        Self {
            writer: Writer::new(),
            options,
        }
    }

    /// Encode a value and return the CBOR bytes.
    pub fn encode(&mut self, value: &CborValue) -> Result<Vec<u8>, CborError> {
        self.writer.reset();
        match self.write_any(value) {
            Ok(()) => {
                let out = self.writer.flush();
                tracing::trace!(kind = value.kind(), size = out.len(), "encoded cbor value");
                Ok(out)
            }
            Err(err) => {
                self.writer.reset();
                tracing::debug!(error = %err, "cbor encode rejected value");
                Err(err)
            }
        }
    }

    /// Convert a JSON document and encode it. See [`CborValue::try_from`]
    /// for which JSON values are accepted.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, CborError> {
        let value = CborValue::try_from(value)?;
        self.encode(&value)
    }

    pub fn write_any(&mut self, value: &CborValue) -> Result<(), CborError> {
        match value {
            CborValue::UInt(n) => self.write_u_integer(*n),
            CborValue::Text(s) => self.write_str(s),
            CborValue::Array(items) => self.write_arr(items),
            CborValue::Map(entries) => self.write_map(entries),
        }
    }

    /// Writes the initial byte plus any explicit length bytes.
    pub fn write_hdr(&mut self, major: MajorType, length: u64) -> Result<(), CborError> {
        let class = LengthClass::of(length).ok_or_else(|| {
            CborError::UnsupportedValue(format!(
                "{} argument {length} exceeds {MAX_LENGTH}",
                major.name()
            ))
        })?;
        let initial = class.initial(major);
        self.writer.ensure_capacity(class.header_len());
        match class {
            LengthClass::Inline(_) => self.writer.u8(initial),
            LengthClass::OneByte(n) => self.writer.u8u8(initial, n),
            LengthClass::TwoBytes(n) => self.writer.u8u16(initial, n),
        }
        Ok(())
    }

    pub fn write_u_integer(&mut self, uint: u64) -> Result<(), CborError> {
        self.write_hdr(MajorType::UInt, uint)
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), CborError> {
        match self.options.text {
            TextEncoding::Utf8 => {
                self.write_hdr(MajorType::Text, s.len() as u64)?;
                self.writer.buf(s.as_bytes());
            }
            TextEncoding::Latin1 => {
                let length = s.chars().count();
                self.write_hdr(MajorType::Text, length as u64)?;
                self.writer.ensure_capacity(length);
                for ch in s.chars() {
                    let byte = u8::try_from(ch).map_err(|_| {
                        CborError::UnsupportedValue(format!(
                            "character U+{:04X} is outside Latin-1",
                            u32::from(ch)
                        ))
                    })?;
                    self.writer.u8(byte);
                }
            }
        }
        Ok(())
    }

    pub fn write_arr(&mut self, items: &[CborValue]) -> Result<(), CborError> {
        self.write_arr_hdr(items.len())?;
        for item in items {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_arr_hdr(&mut self, length: usize) -> Result<(), CborError> {
        self.write_hdr(MajorType::Array, length as u64)
    }

    /// Writes entries in the given order; keys are neither sorted nor
    /// deduplicated.
    pub fn write_map(&mut self, entries: &[(String, CborValue)]) -> Result<(), CborError> {
        self.write_map_hdr(entries.len())?;
        for (key, value) in entries {
            self.write_str(key)?;
            self.write_any(value)?;
        }
        Ok(())
    }

    pub fn write_map_hdr(&mut self, length: usize) -> Result<(), CborError> {
        self.write_hdr(MajorType::Map, length as u64)
    }
}
