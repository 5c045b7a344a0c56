// [libs/domain/operation/src/record.rs]
//! Wire types: the unsigned/signed Operation Record (EOR) and the
//! server-issued, read-only Audit Receipt (EAR).

use serde::{Deserialize, Serialize};

pub const OP_VERSION: &str = "1.0";

/// The unsigned view of an Operation Record. Field order here is
/// irrelevant to the wire format ([`elydora_core_codec::to_jcs_bytes`]
/// sorts keys independently of struct declaration order), kept here in
/// field-table order for readability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnsignedOperationRecord {
    pub op_version: String,
    pub operation_id: String,
    pub org_id: String,
    pub agent_id: String,
    pub issued_at: i64,
    pub ttl_ms: u64,
    pub nonce: String,
    pub operation_type: String,
    pub subject: serde_json::Value,
    pub action: serde_json::Value,
    pub payload: serde_json::Value,
    pub payload_hash: String,
    pub prev_chain_hash: String,
    pub agent_pubkey_kid: String,
}

/// The signed EOR submitted to the platform: the unsigned envelope plus
/// an Ed25519 signature over `JCS(unsigned)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignedOperationRecord {
    #[serde(flatten)]
    pub envelope: UnsignedOperationRecord,
    pub signature: String,
}

/// Server-issued Audit Receipt (EAR). Read-only from the core's
/// perspective: the core never constructs one, only deserializes it
/// from a `POST /v1/operations` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    pub receipt_id: String,
    pub operation_id: String,
    pub seq_no: u64,
    pub chain_hash: String,
    pub server_received_at: i64,
    pub queue_message_id: String,
    pub receipt_hash: String,
    pub elydora_kid: String,
    pub elydora_signature: String,
    pub receipt_version: String,
}
