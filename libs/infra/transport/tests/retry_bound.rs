// [libs/infra/transport/tests/retry_bound.rs]
//! Property test: a client configured with `max_retries = k` issues at
//! most `k + 1` HTTP attempts against a server that always fails.

use elydora_infra_transport::{ClientConfig, ElydoraClient};
use proptest::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]
    #[test]
    fn attempts_never_exceed_one_plus_max_retries(max_retries in 0u32..5) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/v1/epochs"))
                .respond_with(ResponseTemplate::new(503))
                .expect(1 + max_retries as u64)
                .mount(&server)
                .await;

            let client = ElydoraClient::new(
                ClientConfig::default().with_base_url(server.uri()).with_max_retries(max_retries),
            );
            let err = client.list_epochs().await.unwrap_err();
            prop_assert_eq!(err.status, 503);
            Ok(())
        })?;
    }
}
