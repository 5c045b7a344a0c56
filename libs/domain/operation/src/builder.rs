// [libs/domain/operation/src/builder.rs]
//! The Operation Builder, the heart of the core. Holds per-agent chain
//! state and composes, hashes, chain-links, and signs each Operation
//! Record. `build` performs no I/O and never suspends; it is the
//! caller's job to serialize access across threads. A single `Mutex`
//! guarding the chain head is the canonical design, and what this crate
//! does below.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value as JsonValue;
use tracing::instrument;

use elydora_core_hasher::{payload_hash, sha256_b64u};
use elydora_core_ids::{fresh_nonce, new_operation_id};
use elydora_core_signer::{derive_public, sign};

use crate::error::BuilderError;
use crate::record::{SignedOperationRecord, UnsignedOperationRecord, OP_VERSION};

/// `base64url(SHA-256(0x00 × 32))`, the starting `prev_chain_hash` for a
/// builder with no prior operations.
pub const ZERO_CHAIN_HASH: &str = "Yp8SzGOtvnjEiJ0EGtZXSR7KTlpQnnIxMZuFbVBsUqo";

/// Immutable per-builder configuration.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub org_id: String,
    pub agent_id: String,
    /// base64url-encoded 32-byte Ed25519 seed. Never logged, never
    /// exposed via `Debug` beyond this struct's own derive. Callers
    /// that need to serialize `BuilderConfig` for logging should redact
    /// this field themselves.
    pub private_seed: String,
    pub kid: String,
    pub ttl_ms: u64,
}

impl BuilderConfig {
    /// `ttl_ms` defaults to `30_000`; override with
    /// [`BuilderConfig::with_ttl_ms`].
    pub fn new(
        org_id: impl Into<String>,
        agent_id: impl Into<String>,
        private_seed: impl Into<String>,
        kid: impl Into<String>,
    ) -> Self {
        Self {
            org_id: org_id.into(),
            agent_id: agent_id.into(),
            private_seed: private_seed.into(),
            kid: kid.into(),
            ttl_ms: 30_000,
        }
    }

    pub fn with_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }
}

/// Parameters for a single `build` call. `payload` defaults to
/// `Value::Null` when omitted.
#[derive(Debug, Clone, Default)]
pub struct OperationParams {
    pub operation_type: String,
    pub subject: JsonValue,
    pub action: JsonValue,
    pub payload: Option<JsonValue>,
}

struct ChainState {
    prev_chain_hash: String,
}

/// Holds one agent's signing key and chain head. `build` is the only
/// writer of the chain head; the lock spans the full composition so
/// concurrent callers on the same builder can't interleave and corrupt
/// the chain.
pub struct OperationBuilder {
    config: BuilderConfig,
    chain: Mutex<ChainState>,
}

impl OperationBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            chain: Mutex::new(ChainState {
                prev_chain_hash: ZERO_CHAIN_HASH.to_string(),
            }),
        }
    }

    /// Build and sign one Operation Record, advancing the chain head.
    ///
    /// The chain head is committed *before* this function returns,
    /// regardless of whether the caller goes on to submit the record
    /// successfully. Rewinding on a failed submission would fork the
    /// chain, since the server derives the same next chain hash from the
    /// transmitted fields either way.
    #[instrument(skip(self, params), fields(agent_id = %self.config.agent_id))]
    pub fn build(&self, params: OperationParams) -> Result<SignedOperationRecord, BuilderError> {
        let operation_id = new_operation_id();
        let issued_at = now_ms();
        let nonce = fresh_nonce();
        let payload = params.payload.unwrap_or(JsonValue::Null);

        let payload_hash_value = payload_hash(&payload)?;

        let mut chain = self.chain.lock().expect("chain mutex poisoned");
        let prev_chain_hash = chain.prev_chain_hash.clone();
        let chain_hash = compute_chain_hash(&prev_chain_hash, &payload_hash_value, &operation_id, issued_at);

        let envelope = UnsignedOperationRecord {
            op_version: OP_VERSION.to_string(),
            operation_id,
            org_id: self.config.org_id.clone(),
            agent_id: self.config.agent_id.clone(),
            issued_at,
            ttl_ms: self.config.ttl_ms,
            nonce,
            operation_type: params.operation_type,
            subject: params.subject,
            action: params.action,
            payload,
            payload_hash: payload_hash_value,
            prev_chain_hash,
            agent_pubkey_kid: self.config.kid.clone(),
        };

        let unsigned_bytes = elydora_core_codec::to_jcs_bytes(&envelope)?;
        let signature = sign(&self.config.private_seed, &unsigned_bytes)?;

        // Commit before returning. See doc comment above.
        chain.prev_chain_hash = chain_hash;

        Ok(SignedOperationRecord { envelope, signature })
    }

    /// The Ed25519 public key for this builder's signing seed,
    /// base64url-encoded. Diagnostic-only; never used in the hot path.
    pub fn public_key(&self) -> Result<String, BuilderError> {
        Ok(derive_public(&self.config.private_seed)?)
    }

    /// Current chain head. Exposed for diagnostics and for callers that
    /// persist chain state across process restarts. The core itself
    /// never rewinds or reconciles this value.
    pub fn current_chain_hash(&self) -> String {
        self.chain.lock().expect("chain mutex poisoned").prev_chain_hash.clone()
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before the Unix epoch")
        .as_millis() as i64
}

/// `SHA256_b64u(prev_chain_hash || "|" || payload_hash || "|" || operation_id || "|" || decimal(issued_at))`.
pub fn compute_chain_hash(prev_chain_hash: &str, payload_hash: &str, operation_id: &str, issued_at: i64) -> String {
    let material = format!("{prev_chain_hash}|{payload_hash}|{operation_id}|{issued_at}");
    sha256_b64u(material.as_bytes())
}
