// [libs/domain/operation/src/lib.rs]
//! The Operation Builder and the Operation Record (EOR) / Audit Receipt
//! (EAR) wire types: the heart of the Elydora agent SDK core.

mod builder;
mod error;
mod record;

pub use builder::{compute_chain_hash, BuilderConfig, OperationBuilder, OperationParams, ZERO_CHAIN_HASH};
pub use error::BuilderError;
pub use record::{Receipt, SignedOperationRecord, UnsignedOperationRecord, OP_VERSION};

#[cfg(test)]
mod tests {
    use super::*;
    use elydora_core_codec::base64url_encode;
    use serde_json::json;

    fn fixture_builder() -> OperationBuilder {
        let seed = base64url_encode(&[1u8; 32]);
        OperationBuilder::new(BuilderConfig::new("o", "a", seed, "a-key-v1"))
    }

    #[test]
    fn first_build_chains_from_genesis() {
        let builder = fixture_builder();
        let record = builder
            .build(OperationParams {
                operation_type: "file.write".to_string(),
                subject: json!({"path": "/tmp/x"}),
                action: json!({"kind": "write"}),
                payload: Some(json!({"x": 1})),
            })
            .unwrap();

        assert_eq!(record.envelope.op_version, OP_VERSION);
        assert_eq!(record.envelope.prev_chain_hash, ZERO_CHAIN_HASH);
        assert_eq!(record.envelope.ttl_ms, 30_000);
        assert_eq!(
            record.envelope.payload_hash,
            elydora_core_hasher::payload_hash(&json!({"x": 1})).unwrap()
        );
    }

    #[test]
    fn chain_linkage_holds_across_successive_builds() {
        let builder = fixture_builder();
        let params = || OperationParams {
            operation_type: "t".to_string(),
            subject: json!({}),
            action: json!({}),
            payload: None,
        };

        let e1 = builder.build(params()).unwrap();
        let e2 = builder.build(params()).unwrap();

        let expected = compute_chain_hash(
            &e1.envelope.prev_chain_hash,
            &e1.envelope.payload_hash,
            &e1.envelope.operation_id,
            e1.envelope.issued_at,
        );
        assert_eq!(e2.envelope.prev_chain_hash, expected);
        assert_eq!(builder.current_chain_hash(), expected);
    }

    #[test]
    fn payload_defaults_to_null() {
        let builder = fixture_builder();
        let record = builder
            .build(OperationParams {
                operation_type: "t".to_string(),
                subject: json!({}),
                action: json!({}),
                payload: None,
            })
            .unwrap();
        assert_eq!(record.envelope.payload, serde_json::Value::Null);
        assert_eq!(
            record.envelope.payload_hash,
            "tMQcFTrH0YSgOLVjEc2UBRY9-KBYJf5HwBvYvjmKzkM"
        );
    }

    #[test]
    fn signature_verifies_over_unsigned_envelope_bytes() {
        let builder = fixture_builder();
        let record = builder
            .build(OperationParams {
                operation_type: "t".to_string(),
                subject: json!({}),
                action: json!({}),
                payload: None,
            })
            .unwrap();

        let public_key = builder.public_key().unwrap();
        let unsigned_bytes = elydora_core_codec::to_jcs_bytes(&record.envelope).unwrap();

        use ed25519_dalek::{Signature, Verifier, VerifyingKey};
        let pk_bytes = elydora_core_codec::base64url_decode(&public_key).unwrap();
        let sig_bytes = elydora_core_codec::base64url_decode(&record.signature).unwrap();
        let verifying_key = VerifyingKey::from_bytes(&pk_bytes.try_into().unwrap()).unwrap();
        let signature = Signature::from_bytes(&sig_bytes.try_into().unwrap());
        assert!(verifying_key.verify(&unsigned_bytes, &signature).is_ok());
    }

    #[test]
    fn operation_ids_are_unique_and_timestamp_nondecreasing_across_builds() {
        let builder = fixture_builder();
        let params = || OperationParams {
            operation_type: "t".to_string(),
            subject: json!({}),
            action: json!({}),
            payload: None,
        };
        let e1 = builder.build(params()).unwrap();
        let e2 = builder.build(params()).unwrap();
        assert_ne!(e1.envelope.operation_id, e2.envelope.operation_id);
        assert!(e2.envelope.issued_at >= e1.envelope.issued_at);
    }
}
