// [libs/core/codec/src/base64url.rs]
//! RFC 4648 §5 base64url, unpadded on encode, padding-tolerant on decode.

use base64::{
    alphabet,
    engine::general_purpose::NO_PAD,
    engine::GeneralPurpose,
    Engine,
};

use crate::error::CodecError;

const NO_PAD_ENGINE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, NO_PAD);

/// Encode raw bytes as base64url with no `=` padding.
pub fn encode(bytes: &[u8]) -> String {
    NO_PAD_ENGINE.encode(bytes)
}

/// Decode base64url, accepting input with or without trailing `=` padding.
pub fn decode(input: &str) -> Result<Vec<u8>, CodecError> {
    let trimmed = input.trim_end_matches('=');
    NO_PAD_ENGINE
        .decode(trimmed)
        .map_err(|_| CodecError::InvalidBase64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_bytes() {
        let bytes = [0u8, 1, 2, 250, 251, 252, 253, 254, 255];
        let encoded = encode(&bytes);
        assert!(!encoded.contains('='));
        assert_eq!(decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn decodes_padded_input_too() {
        let encoded = encode(b"hello world");
        let padded = format!("{encoded}==");
        assert_eq!(decode(&padded).unwrap(), b"hello world");
    }

    #[test]
    fn rejects_non_alphabet_bytes() {
        assert!(decode("not valid base64url!!").is_err());
    }
}
