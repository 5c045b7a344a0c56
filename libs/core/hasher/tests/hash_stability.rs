// [libs/core/hasher/tests/hash_stability.rs]
//! Property test: payload_hash is invariant under JSON-equivalent
//! permutations of the input.

use elydora_core_hasher::payload_hash;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn shuffled(map: &Map<String, Value>) -> Value {
    let mut reversed = Map::new();
    for (k, v) in map.iter().rev() {
        reversed.insert(k.clone(), v.clone());
    }
    Value::Object(reversed)
}

proptest! {
    #[test]
    fn hash_stable_under_key_permutation(a in 0i64..1000, b in 0i64..1000, c in 0i64..1000) {
        let Value::Object(forward) = json!({"a": a, "b": b, "c": c}) else { unreachable!() };
        let backward = shuffled(&forward);
        prop_assert_eq!(
            payload_hash(&Value::Object(forward)).unwrap(),
            payload_hash(&backward).unwrap()
        );
    }
}
