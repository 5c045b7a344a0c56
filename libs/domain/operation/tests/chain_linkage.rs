// [libs/domain/operation/tests/chain_linkage.rs]
//! Property test: chain linkage holds across an arbitrary run of builds
//! with arbitrary payloads.

use elydora_core_codec::base64url_encode;
use elydora_domain_operation::{compute_chain_hash, BuilderConfig, OperationBuilder, OperationParams};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn chain_stays_linked_across_n_builds(payloads in proptest::collection::vec(any::<i64>(), 1..12)) {
        let seed = base64url_encode(&[7u8; 32]);
        let builder = OperationBuilder::new(BuilderConfig::new("org", "agent", seed, "kid-1"));

        let mut previous = None;
        for p in payloads {
            let record = builder
                .build(OperationParams {
                    operation_type: "t".to_string(),
                    subject: json!({}),
                    action: json!({}),
                    payload: Some(json!({ "v": p })),
                })
                .unwrap();

            if let Some(prev) = previous {
                let (prev_chain_hash, payload_hash, operation_id, issued_at): (String, String, String, i64) = prev;
                let expected = compute_chain_hash(&prev_chain_hash, &payload_hash, &operation_id, issued_at);
                prop_assert_eq!(&record.envelope.prev_chain_hash, &expected);
            }

            previous = Some((
                record.envelope.prev_chain_hash.clone(),
                record.envelope.payload_hash.clone(),
                record.envelope.operation_id.clone(),
                record.envelope.issued_at,
            ));
        }
    }
}
