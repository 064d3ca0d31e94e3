use b64_core::{decode, decode_bytes, encode, encode_bytes, CodecError};

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn encode_hello() {
    assert_eq!(encode("hello"), "aGVsbG8=");
}

#[test]
fn encode_empty() {
    assert_eq!(encode(""), "");
}

#[test]
fn encode_padding_lengths() {
    assert_eq!(encode("f"), "Zg==");
    assert_eq!(encode("fo"), "Zm8=");
    assert_eq!(encode("foo"), "Zm9v");
    assert_eq!(encode("foobar"), "Zm9vYmFy");
}

#[test]
fn encode_uses_standard_alphabet() {
    // 0xfb 0xff encodes to characters that differ between standard and URL-safe.
    assert_eq!(encode_bytes(&[0xfb, 0xff]), "+/8=");
}

#[test]
fn encode_multibyte_utf8() {
    assert_eq!(encode("caf\u{00e9}"), "Y2Fmw6k=");
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn decode_hello() {
    assert_eq!(decode("aGVsbG8=").unwrap(), "hello");
}

#[test]
fn decode_empty() {
    assert_eq!(decode("").unwrap(), "");
}

#[test]
fn decode_multibyte_utf8() {
    assert_eq!(decode("Y2Fmw6k=").unwrap(), "caf\u{00e9}");
}

#[test]
fn decode_bytes_standard_alphabet() {
    assert_eq!(decode_bytes("+/8=").unwrap(), vec![0xfb, 0xff]);
}

#[test]
fn decode_tolerates_non_zero_trailing_bits() {
    assert_eq!(decode("aGVsbG9=").unwrap(), "hello");
    assert_eq!(decode("Zh==").unwrap(), "f");
}

#[test]
fn decode_still_requires_canonical_padding() {
    // Trailing-bit tolerance does not extend to missing or extra padding.
    assert_malformed("Zh");
    assert_malformed("Zh=");
    assert_malformed("aGVsbG9==");
}

// ============================================================================
// Malformed input
// ============================================================================

fn assert_malformed(input: &str) {
    match decode(input) {
        Err(CodecError::Malformed(_)) => {}
        other => panic!("expected Malformed for {input:?}, got {other:?}"),
    }
}

#[test]
fn decode_rejects_invalid_symbol() {
    assert_malformed("abc%");
}

#[test]
fn decode_rejects_only_padding() {
    assert_malformed("====");
}

#[test]
fn decode_rejects_unpadded() {
    assert_malformed("abc");
    assert_malformed("aGVsbG8");
}

#[test]
fn decode_rejects_url_safe_alphabet() {
    assert_malformed("-_8=");
}

#[test]
fn decode_rejects_whitespace() {
    assert_malformed("aGVs bG8=");
    assert_malformed("aGVsbG8=\n");
    assert_malformed("aGVs\nbG8=");
    assert_malformed("aGVs\r\nbG8=");
}

#[test]
fn decode_rejects_not_base64_text() {
    assert_malformed("not-valid-base64!!");
}

#[test]
fn malformed_message_carries_reason() {
    let err = decode("abc%").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Error decoding Base64: "), "got {msg:?}");
    assert!(msg.len() > "Error decoding Base64: ".len());
}
