// [libs/domain/operation/src/error.rs]
use thiserror::Error;

use elydora_core_codec::CodecError;
use elydora_core_signer::SignerError;

/// Errors the Operation Builder can raise while constructing a record
/// locally (no I/O is involved). Both variants surface to callers as
/// `VALIDATION_ERROR` on the wire error taxonomy.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BuilderError {
    #[error("payload canonicalization failed: {0}")]
    Codec(#[from] CodecError),

    #[error("signing failed: {0}")]
    Signer(#[from] SignerError),
}
