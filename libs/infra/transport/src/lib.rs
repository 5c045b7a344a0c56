// [libs/infra/transport/src/lib.rs]
//! Authenticated HTTPS transport to the Elydora platform. Retries
//! transport failures and `429`/`5xx` responses with bounded exponential
//! backoff; every other failure, local or remote, surfaces as a typed
//! [`ElydoraError`].

mod client;
mod config;
mod error;
mod wire;

pub use client::ElydoraClient;
pub use config::ClientConfig;
pub use error::{ElydoraError, ErrorCode};
pub use wire::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use elydora_core_codec::base64url_encode;
    use elydora_domain_operation::{BuilderConfig, OperationBuilder, OperationParams};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fixture_record() -> elydora_domain_operation::SignedOperationRecord {
        let seed = base64url_encode(&[3u8; 32]);
        let builder = OperationBuilder::new(BuilderConfig::new("org", "agent", seed, "kid-1"));
        builder
            .build(OperationParams {
                operation_type: "file.write".to_string(),
                subject: json!({}),
                action: json!({}),
                payload: Some(json!({"x": 1})),
            })
            .unwrap()
    }

    /// A 503 with `Retry-After: 2` followed by a 200 issues exactly two
    /// HTTP requests and sleeps ~2000ms between them.
    #[tokio::test]
    async fn retry_after_header_sets_the_backoff_delay() {
        let server = MockServer::start().await;
        let receipt = json!({
            "receipt": {
                "receipt_id": "r1", "operation_id": "op1", "seq_no": 1,
                "chain_hash": "h", "server_received_at": 1, "queue_message_id": "q1",
                "receipt_hash": "rh", "elydora_kid": "k1", "elydora_signature": "s1",
                "receipt_version": "1.0"
            }
        });

        Mock::given(method("POST"))
            .and(path("/v1/operations"))
            .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "2"))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/operations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(receipt))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElydoraClient::new(ClientConfig::default().with_base_url(server.uri()).with_max_retries(3));
        let started = std::time::Instant::now();
        let result = client.submit_operation(&fixture_record()).await.unwrap();
        let elapsed = started.elapsed();

        assert_eq!(result.receipt.receipt_id, "r1");
        assert!(elapsed >= Duration::from_millis(1900), "expected ~2000ms backoff, got {elapsed:?}");
    }

    /// A 400 with a structured error body is returned immediately, with
    /// no retry.
    #[tokio::test]
    async fn structured_client_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/operations"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": "VALIDATION_ERROR", "message": "bad payload", "request_id": "r1"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElydoraClient::new(ClientConfig::default().with_base_url(server.uri()).with_max_retries(3));
        let err = client.submit_operation(&fixture_record()).await.unwrap_err();

        assert_eq!(err.status, 400);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.request_id, "r1");
    }

    /// A client configured with `max_retries = k` issues at most `k + 1`
    /// HTTP attempts against a server that always fails.
    #[tokio::test]
    async fn retry_bound_is_respected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/epochs"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let client = ElydoraClient::new(ClientConfig::default().with_base_url(server.uri()).with_max_retries(2));
        let err = client.list_epochs().await.unwrap_err();
        assert_eq!(err.status, 500);
    }

    #[tokio::test]
    async fn unauthenticated_request_carries_no_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/.well-known/elydora/jwks.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"keys": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElydoraClient::new(ClientConfig::default().with_base_url(server.uri()));
        let jwks = client.jwks().await.unwrap();
        assert!(jwks.keys.is_empty());
    }
}
