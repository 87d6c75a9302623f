//! Encoder and decoder settings.

/// How text payload bytes map to characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// One byte per character; only U+0000..=U+00FF are encodable.
    #[default]
    Latin1,
    /// Standard UTF-8 byte sequences.
    Utf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderOptions {
    pub text: TextEncoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    pub text: TextEncoding,
    /// Maximum nesting of arrays and maps.
    pub max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 256;

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            text: TextEncoding::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EncoderOptions {
    pub fn utf8() -> Self {
        Self {
            text: TextEncoding::Utf8,
        }
    }
}

impl DecoderOptions {
    pub fn utf8() -> Self {
        Self {
            text: TextEncoding::Utf8,
            ..Self::default()
        }
    }
}
