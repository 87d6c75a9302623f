//! CBOR tag table shared by the encoder and the decoder.
//!
//! The initial byte of every item is `major << 5 | minor`. A minor of
//! `0..=MAX_INLINE` carries the length (or integer value) itself; the escape
//! minors select a 1 or 2 byte big-endian length that follows.

/// Major types understood by this codec (bits 7-5 of the initial byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MajorType {
    UInt = 0b000,
    Text = 0b011,
    Array = 0b100,
    Map = 0b101,
}

/// All supported major types, in wire order.
pub const MAJOR_TYPES: [MajorType; 4] = [
    MajorType::UInt,
    MajorType::Text,
    MajorType::Array,
    MajorType::Map,
];

pub const MINOR_MASK: u8 = 0b11111;

/// Largest value stored directly in the minor bits.
pub const MAX_INLINE: u8 = 23;

/// Escape minor: one length byte follows.
pub const MINOR_U8: u8 = 24;

/// Escape minor: two length bytes follow, big-endian.
pub const MINOR_U16: u8 = 25;

/// Largest length or integer value representable.
pub const MAX_LENGTH: u64 = 0xffff;

impl MajorType {
    /// The major type shifted into bits 7-5.
    #[inline]
    pub const fn overlay(self) -> u8 {
        (self as u8) << 5
    }

    /// Classifies an initial byte by its top 3 bits.
    pub const fn from_initial(byte: u8) -> Option<Self> {
        match byte >> 5 {
            0b000 => Some(MajorType::UInt),
            0b011 => Some(MajorType::Text),
            0b100 => Some(MajorType::Array),
            0b101 => Some(MajorType::Map),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MajorType::UInt => "uint",
            MajorType::Text => "text",
            MajorType::Array => "array",
            MajorType::Map => "map",
        }
    }
}

/// Width class of a length or integer argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthClass {
    Inline(u8),
    OneByte(u8),
    TwoBytes(u16),
}

impl LengthClass {
    /// Picks the shortest class able to hold `n`. `None` above [`MAX_LENGTH`].
    pub fn of(n: u64) -> Option<Self> {
        if n <= u64::from(MAX_INLINE) {
            Some(LengthClass::Inline(n as u8))
        } else if let Ok(byte) = u8::try_from(n) {
            Some(LengthClass::OneByte(byte))
        } else if let Ok(word) = u16::try_from(n) {
            Some(LengthClass::TwoBytes(word))
        } else {
            None
        }
    }

    /// The low 5 bits of the initial byte.
    pub const fn minor(self) -> u8 {
        match self {
            LengthClass::Inline(n) => n,
            LengthClass::OneByte(_) => MINOR_U8,
            LengthClass::TwoBytes(_) => MINOR_U16,
        }
    }

    /// The complete initial byte for `major`.
    pub const fn initial(self, major: MajorType) -> u8 {
        major.overlay() | self.minor()
    }

    /// Total header size in bytes, initial byte included.
    pub const fn header_len(self) -> usize {
        match self {
            LengthClass::Inline(_) => 1,
            LengthClass::OneByte(_) => 2,
            LengthClass::TwoBytes(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_ranges_are_disjoint() {
        for (i, a) in MAJOR_TYPES.iter().enumerate() {
            for b in &MAJOR_TYPES[i + 1..] {
                let a_range = a.overlay()..=(a.overlay() | MINOR_MASK);
                assert!(!a_range.contains(&b.overlay()));
                assert!(!a_range.contains(&(b.overlay() | MINOR_U16)));
            }
        }
    }

    #[test]
    fn from_initial_inverts_overlay() {
        for major in MAJOR_TYPES {
            for minor in 0..=MINOR_MASK {
                assert_eq!(MajorType::from_initial(major.overlay() | minor), Some(major));
            }
        }
        assert_eq!(MajorType::from_initial(0x20), None);
        assert_eq!(MajorType::from_initial(0x40), None);
        assert_eq!(MajorType::from_initial(0xc0), None);
        assert_eq!(MajorType::from_initial(0xff), None);
    }

    #[test]
    fn length_class_boundaries() {
        assert_eq!(LengthClass::of(0), Some(LengthClass::Inline(0)));
        assert_eq!(LengthClass::of(23), Some(LengthClass::Inline(23)));
        assert_eq!(LengthClass::of(24), Some(LengthClass::OneByte(24)));
        assert_eq!(LengthClass::of(255), Some(LengthClass::OneByte(255)));
        assert_eq!(LengthClass::of(256), Some(LengthClass::TwoBytes(256)));
        assert_eq!(LengthClass::of(65535), Some(LengthClass::TwoBytes(65535)));
        assert_eq!(LengthClass::of(65536), None);
    }

    #[test]
    fn initial_bytes_match_wire_table() {
        let cases = [
            (MajorType::UInt, 0x00, 0x18, 0x19),
            (MajorType::Text, 0x60, 0x78, 0x79),
            (MajorType::Array, 0x80, 0x98, 0x99),
            (MajorType::Map, 0xa0, 0xb8, 0xb9),
        ];
        for (major, base, esc1, esc2) in cases {
            assert_eq!(LengthClass::Inline(0).initial(major), base);
            assert_eq!(LengthClass::Inline(23).initial(major), base + 0x17);
            assert_eq!(LengthClass::OneByte(200).initial(major), esc1);
            assert_eq!(LengthClass::TwoBytes(300).initial(major), esc2);
        }
    }

    #[test]
    fn header_len() {
        assert_eq!(LengthClass::Inline(5).header_len(), 1);
        assert_eq!(LengthClass::OneByte(200).header_len(), 2);
        assert_eq!(LengthClass::TwoBytes(1000).header_len(), 3);
    }
}
