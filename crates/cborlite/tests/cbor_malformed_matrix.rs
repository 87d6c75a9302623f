//! Rejection matrix for malformed and unsupported input.

use cborlite::{decode, decode_with_consumed, encode, CborError, CborErrorKind, CborValue};

#[test]
fn cbor_decode_error_kind_matrix() {
    let cases: &[(&[u8], CborErrorKind)] = &[
        (&[0xff], CborErrorKind::UnknownTag),
        (&[0x20], CborErrorKind::UnknownTag),
        (&[0x40], CborErrorKind::UnknownTag),
        (&[0xc0], CborErrorKind::UnknownTag),
        (&[0xf6], CborErrorKind::UnknownTag),
        (&[0x1b, 0, 0, 0, 0, 0, 0, 0, 1], CborErrorKind::UnknownTag),
        (&[0x83, 0x01], CborErrorKind::TruncatedBuffer),
        (&[0x82, 0x01], CborErrorKind::TruncatedBuffer),
        (&[0x18], CborErrorKind::TruncatedBuffer),
        (&[0x19, 0x01], CborErrorKind::TruncatedBuffer),
        (&[0x63, 0x61, 0x62], CborErrorKind::TruncatedBuffer),
        (&[0xa1, 0x61], CborErrorKind::TruncatedBuffer),
        (&[0xa1, 0x61, 0x61], CborErrorKind::TruncatedBuffer),
        (&[], CborErrorKind::TruncatedBuffer),
        (&[0xa1, 0x00, 0x01], CborErrorKind::MalformedStructure),
        (&[0xa1, 0x00], CborErrorKind::MalformedStructure),
        (&[0xa1, 0x81, 0x01, 0x01], CborErrorKind::MalformedStructure),
        (&[0x05, 0x05], CborErrorKind::MalformedStructure),
    ];
    for &(bytes, kind) in cases {
        let err = decode(bytes).unwrap_err();
        assert_eq!(err.kind(), kind, "{bytes:02x?} -> {err}");
    }
}

#[test]
fn cbor_decode_error_offsets() {
    assert_eq!(
        decode(&[0xff]),
        Err(CborError::UnknownTag {
            byte: 0xff,
            offset: 0
        })
    );
    assert_eq!(
        decode(&[0x82, 0x01, 0xff]),
        Err(CborError::UnknownTag {
            byte: 0xff,
            offset: 2
        })
    );
    assert_eq!(
        decode(&[0x83, 0x01]),
        Err(CborError::TruncatedBuffer {
            offset: 1,
            needed: 3
        })
    );
    assert_eq!(
        decode(&[0xa2, 0x61, 0x61, 0x01, 0x00, 0x02]),
        Err(CborError::MalformedStructure {
            offset: 4,
            reason: "map key is not a text string"
        })
    );
}

#[test]
fn cbor_decode_with_consumed_ignores_trailing_bytes() {
    let (value, consumed) = decode_with_consumed(&[0x61, 0x7a, 0xff, 0xff]).unwrap();
    assert_eq!(value, CborValue::Text("z".to_owned()));
    assert_eq!(consumed, 2);
}

#[test]
fn cbor_encode_unsupported_matrix() {
    let cases = vec![
        CborValue::UInt(65536),
        CborValue::UInt(u64::MAX),
        CborValue::Text("日本".to_owned()),
        CborValue::Text("x".repeat(65536)),
        CborValue::Array(vec![CborValue::UInt(0); 65536]),
        CborValue::Map(vec![("€".to_owned(), CborValue::UInt(0))]),
        CborValue::Array(vec![CborValue::Array(vec![CborValue::UInt(70000)])]),
    ];
    for value in cases {
        let err = encode(&value).unwrap_err();
        assert_eq!(err.kind(), CborErrorKind::UnsupportedValue);
    }
}

#[test]
fn cbor_deep_nesting_is_bounded() {
    let mut bytes = vec![0x81; 10_000];
    bytes.push(0x00);
    let err = decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), CborErrorKind::MalformedStructure);
}
