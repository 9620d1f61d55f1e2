//! Latin-1 codec vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use smsgate_core::latin1;

#[test]
fn encode_ascii() {
    assert_eq!(latin1::encode("content://mms"), b"content://mms".to_vec());
}

#[test]
fn encode_high_bytes() {
    // U+00E9 LATIN SMALL LETTER E WITH ACUTE is 0xE9 in Latin-1.
    assert_eq!(latin1::encode("caf\u{e9}"), vec![b'c', b'a', b'f', 0xE9]);
}

#[test]
fn encode_replaces_unmappable() {
    // U+20AC EURO SIGN has no Latin-1 mapping.
    assert_eq!(latin1::encode("a\u{20ac}b"), vec![b'a', b'?', b'b']);
}

#[test]
fn decode_every_byte_value() {
    let bytes: Vec<u8> = (0u8..=255).collect();
    let text = latin1::decode(&bytes);
    assert_eq!(text.chars().count(), 256);
    assert_eq!(latin1::encode(&text), bytes);
}

#[test]
fn round_trip_key_text() {
    let key = [b"content://mms".as_slice(), b"123".as_slice()].concat();
    let text = latin1::decode(&key);
    assert_eq!(latin1::encode(&text), key);
}
