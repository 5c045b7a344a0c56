// [libs/core/signer/src/lib.rs]
//! Ed25519 signing and public-key derivation from a raw 32-byte seed
//! (the RFC 8032 secret scalar input, base64url-encoded at rest).
//! `ed25519-dalek` takes the raw seed directly, no PKCS8 wrapping needed.

mod error;

pub use error::SignerError;

use ed25519_dalek::{Signer as _, SigningKey, SECRET_KEY_LENGTH};
use elydora_core_codec::{base64url_decode, base64url_encode};

/// Sign `message` with the Ed25519 seed, returning a base64url-encoded
/// 64-byte signature (RFC 8032, pure Ed25519, no pre-hash).
pub fn sign(seed_b64u: &str, message: &[u8]) -> Result<String, SignerError> {
    let signing_key = signing_key_from_seed(seed_b64u)?;
    let signature = signing_key.sign(message);
    Ok(base64url_encode(&signature.to_bytes()))
}

/// Derive the base64url-encoded 32-byte Ed25519 public key for a seed.
/// Used by the installer to prove a seed is well-formed at install time.
pub fn derive_public(seed_b64u: &str) -> Result<String, SignerError> {
    let signing_key = signing_key_from_seed(seed_b64u)?;
    Ok(base64url_encode(signing_key.verifying_key().as_bytes()))
}

fn signing_key_from_seed(seed_b64u: &str) -> Result<SigningKey, SignerError> {
    let bytes = base64url_decode(seed_b64u)
        .map_err(|_| SignerError::Validation("seed is not valid base64url".to_string()))?;
    if bytes.len() != SECRET_KEY_LENGTH {
        return Err(SignerError::Validation(format!(
            "seed must decode to {SECRET_KEY_LENGTH} bytes, got {}",
            bytes.len()
        )));
    }
    let mut seed = [0u8; SECRET_KEY_LENGTH];
    seed.copy_from_slice(&bytes);
    Ok(SigningKey::from_bytes(&seed))
}
