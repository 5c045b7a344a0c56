// [libs/core/codec/src/lib.rs]
//! Deterministic canonicalization (RFC 8785 JCS) and base64url (RFC 4648
//! §5, unpadded) for the Elydora agent SDK.
//!
//! Every other crate in this workspace that needs a stable byte
//! representation of a structured payload, for hashing, signing, or
//! chain linkage, goes through [`to_jcs_bytes`]/[`to_jcs_string`] rather
//! than `serde_json::to_string`, which does not sort object keys.

mod base64url;
mod error;
mod value;

pub use base64url::{decode as base64url_decode, encode as base64url_encode};
pub use error::CodecError;
pub use value::{to_jcs_bytes, to_jcs_string, write_canonical, Value};
