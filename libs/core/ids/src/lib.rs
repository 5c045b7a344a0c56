// [libs/core/ids/src/lib.rs]
//! Time-ordered operation identifiers (UUIDv7, RFC 9562) and fresh
//! cryptographic nonces for the Elydora agent SDK.

use elydora_core_codec::base64url_encode;
use rand::RngCore;
use uuid::Uuid;

/// Generate a fresh UUIDv7: 48-bit Unix-millisecond timestamp, a `0111`
/// version nibble, 12 random bits, a `10` variant, and 62 random bits,
/// rendered as the canonical lowercase `8-4-4-4-12` form.
///
/// Monotonicity within a single process is not enforced: two identifiers
/// generated in the same millisecond rely on at least 74 bits of
/// randomness to differ, which `uuid::Uuid::now_v7` already provides via
/// the OS RNG.
pub fn new_operation_id() -> String {
    Uuid::now_v7().to_string()
}

/// 16 cryptographically random bytes, base64url-encoded (22 characters,
/// no padding). Freshly sampled per call; never cached or reused.
pub fn fresh_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64url_encode(&bytes)
}
