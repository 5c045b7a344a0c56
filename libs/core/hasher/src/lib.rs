// [libs/core/hasher/src/lib.rs]
//! SHA-256 content hashing, base64url-encoded, over either raw bytes or
//! the JCS-canonical form of a structured payload.

use elydora_core_codec::{base64url_encode, to_jcs_bytes, CodecError};
use sha2::{Digest, Sha256};

/// `base64url(SHA-256(bytes))`.
pub fn sha256_b64u(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    base64url_encode(&digest)
}

/// `sha256_b64u(utf8(JCS(value)))`. Hashing `null` yields `SHA256("null")`,
/// the literal four-byte canonical form.
pub fn payload_hash<T: serde::Serialize>(value: &T) -> Result<String, CodecError> {
    let canonical = to_jcs_bytes(value)?;
    Ok(sha256_b64u(&canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_hash_is_sha256_of_32_zero_bytes() {
        assert_eq!(
            sha256_b64u(&[0u8; 32]),
            "Yp8SzGOtvnjEiJ0EGtZXSR7KTlpQnnIxMZuFbVBsUqo"
        );
    }

    #[test]
    fn payload_hash_of_null_is_sha256_of_the_four_byte_string() {
        assert_eq!(
            payload_hash(&serde_json::Value::Null).unwrap(),
            "tMQcFTrH0YSgOLVjEc2UBRY9-KBYJf5HwBvYvjmKzkM"
        );
    }

    #[test]
    fn payload_hash_is_stable_under_key_permutation() {
        let a = serde_json::json!({"b": 1, "a": 2});
        let b = serde_json::json!({"a": 2, "b": 1});
        assert_eq!(payload_hash(&a).unwrap(), payload_hash(&b).unwrap());
    }
}
