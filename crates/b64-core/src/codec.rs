//! Standard-alphabet Base64 with `=` padding.
//!
//! Encoding uses the `base64` crate's `STANDARD` engine. Decoding uses the same
//! alphabet and still requires canonical padding, but tolerates non-zero
//! trailing bits in the last symbol (`"Zh=="` decodes to `"f"`). Whitespace,
//! CR/LF and URL-safe characters are rejected.

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
        DecodePaddingMode,
    },
    Engine,
};

use crate::error::Result;

const DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Encode the UTF-8 bytes of `input` as standard Base64.
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Encode arbitrary bytes as standard Base64.
pub fn encode_bytes(input: &[u8]) -> String {
    STANDARD.encode(input)
}

/// Decode standard Base64 into the raw byte sequence.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    Ok(DECODER.decode(input)?)
}

/// Decode standard Base64 and reinterpret the bytes as a string.
///
/// Invalid UTF-8 sequences become U+FFFD, which is what a JavaScript host
/// would see for the same byte string.
pub fn decode(input: &str) -> Result<String> {
    let bytes = decode_bytes(input)?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(encode(""), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn non_utf8_bytes_are_replaced() {
        // 0xff 0xfe is never valid UTF-8.
        let b64 = encode_bytes(&[b'a', 0xff, 0xfe, b'z']);
        assert_eq!(decode(&b64).unwrap(), "a\u{fffd}\u{fffd}z");
        assert_eq!(decode_bytes(&b64).unwrap(), vec![b'a', 0xff, 0xfe, b'z']);
    }
}
