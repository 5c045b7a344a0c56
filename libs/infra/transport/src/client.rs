// [libs/infra/transport/src/client.rs]
//! Authenticated HTTPS client for the Elydora platform's v1 REST
//! surface. Retries transport failures and `429`/`5xx` responses with
//! bounded exponential backoff; never retries a well-formed `4xx` or an
//! already-typed `ElydoraError`.

use std::sync::RwLock;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{instrument, warn};

use elydora_core_codec::to_jcs_bytes;
use elydora_domain_operation::SignedOperationRecord;

use crate::config::ClientConfig;
use crate::error::{ElydoraError, ErrorCode, ErrorEnvelope};
use crate::wire::*;

/// Authenticated HTTPS client. Internally a pooled `reqwest::Client`,
/// safe to share across tasks/threads.
pub struct ElydoraClient {
    http: reqwest::Client,
    base_url: String,
    max_retries: u32,
    token: RwLock<Option<String>>,
}

impl ElydoraClient {
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("TLS backend initialization cannot fail with the default builder");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            token: RwLock::new(None),
        }
    }

    /// Set the bearer token used for subsequent requests. Pass `None` to
    /// clear it (e.g. on logout).
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().expect("token lock poisoned") = token;
    }

    // ---- auth ------------------------------------------------------

    pub async fn register(&self, body: &RegisterRequest) -> Result<RegisterResponse, ElydoraError> {
        self.send_json(Method::POST, "/v1/auth/register", Some(body)).await
    }

    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, ElydoraError> {
        self.send_json(Method::POST, "/v1/auth/login", Some(body)).await
    }

    // ---- agents ------------------------------------------------------

    pub async fn register_agent(
        &self,
        body: &RegisterAgentRequest,
    ) -> Result<RegisterAgentResponse, ElydoraError> {
        self.send_json(Method::POST, "/v1/agents/register", Some(body)).await
    }

    pub async fn get_agent(&self, agent_id: &str) -> Result<GetAgentResponse, ElydoraError> {
        let path = format!("/v1/agents/{}", encode_id(agent_id));
        self.send_json::<(), _>(Method::GET, &path, None).await
    }

    pub async fn freeze_agent(&self, agent_id: &str, reason: &str) -> Result<(), ElydoraError> {
        let path = format!("/v1/agents/{}/freeze", encode_id(agent_id));
        self.send_no_content(Method::POST, &path, Some(&FreezeAgentRequest { reason: reason.to_string() }))
            .await
    }

    pub async fn revoke_agent(&self, agent_id: &str, kid: &str, reason: &str) -> Result<(), ElydoraError> {
        let path = format!("/v1/agents/{}/revoke", encode_id(agent_id));
        let body = RevokeAgentRequest { kid: kid.to_string(), reason: reason.to_string() };
        self.send_no_content(Method::POST, &path, Some(&body)).await
    }

    // ---- operations ------------------------------------------------------

    /// Submit a signed Operation Record. The body is the JCS-canonical
    /// serialization of the envelope, not `serde_json`'s default
    /// (non-canonical-key-order) encoding.
    #[instrument(skip(self, record), fields(operation_id = %record.envelope.operation_id))]
    pub async fn submit_operation(
        &self,
        record: &SignedOperationRecord,
    ) -> Result<SubmitOperationResponse, ElydoraError> {
        let body = to_jcs_bytes(record)
            .map_err(|e| ElydoraError::validation(format!("cannot canonicalize operation record: {e}")))?;
        self.send_raw_json(Method::POST, "/v1/operations", Some(body)).await
    }

    pub async fn get_operation(&self, operation_id: &str) -> Result<GetOperationResponse, ElydoraError> {
        let path = format!("/v1/operations/{}", encode_id(operation_id));
        self.send_json::<(), _>(Method::GET, &path, None).await
    }

    pub async fn verify_operation(&self, operation_id: &str) -> Result<VerifyOperationResponse, ElydoraError> {
        let path = format!("/v1/operations/{}/verify", encode_id(operation_id));
        self.send_json::<(), _>(Method::POST, &path, None).await
    }

    // ---- audit / epochs / exports / jwks ------------------------------------------------------

    pub async fn audit_query(&self, filter: &AuditQueryFilter) -> Result<AuditQueryResponse, ElydoraError> {
        self.send_json(Method::POST, "/v1/audit/query", Some(filter)).await
    }

    pub async fn list_epochs(&self) -> Result<ListEpochsResponse, ElydoraError> {
        self.send_json::<(), _>(Method::GET, "/v1/epochs", None).await
    }

    pub async fn get_epoch(&self, epoch_id: &str) -> Result<GetEpochResponse, ElydoraError> {
        let path = format!("/v1/epochs/{}", encode_id(epoch_id));
        self.send_json::<(), _>(Method::GET, &path, None).await
    }

    pub async fn create_export(&self, filter: &CreateExportRequest) -> Result<CreateExportResponse, ElydoraError> {
        self.send_json(Method::POST, "/v1/exports", Some(filter)).await
    }

    pub async fn list_exports(&self) -> Result<ListExportsResponse, ElydoraError> {
        self.send_json::<(), _>(Method::GET, "/v1/exports", None).await
    }

    pub async fn get_export(&self, export_id: &str) -> Result<GetExportResponse, ElydoraError> {
        let path = format!("/v1/exports/{}", encode_id(export_id));
        self.send_json::<(), _>(Method::GET, &path, None).await
    }

    pub async fn jwks(&self) -> Result<JwksResponse, ElydoraError> {
        self.send_json::<(), _>(Method::GET, "/.well-known/elydora/jwks.json", None).await
    }

    // ---- request plumbing ------------------------------------------------------

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ElydoraError> {
        let bytes = match body {
            Some(b) => Some(
                serde_json::to_vec(b)
                    .map_err(|e| ElydoraError::validation(format!("request body is not serializable: {e}")))?,
            ),
            None => None,
        };
        self.send_raw_json(method, path, bytes).await
    }

    async fn send_no_content<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ElydoraError> {
        let bytes = match body {
            Some(b) => Some(
                serde_json::to_vec(b)
                    .map_err(|e| ElydoraError::validation(format!("request body is not serializable: {e}")))?,
            ),
            None => None,
        };
        self.execute_with_retry(method, path, bytes, |status, body| {
            if status == StatusCode::NO_CONTENT || body.is_empty() {
                Ok(())
            } else {
                serde_json::from_slice::<()>(&body)
                    .map_err(|e| ElydoraError::internal_local(format!("could not parse empty response: {e}")))
            }
        })
        .await
    }

    async fn send_raw_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, ElydoraError> {
        self.execute_with_retry(method, path, body, |_status, body| {
            serde_json::from_slice(&body)
                .map_err(|e| ElydoraError::internal_local(format!("could not parse response body: {e}")))
        })
        .await
    }

    #[instrument(skip(self, body, parse), fields(%method, %path))]
    async fn execute_with_retry<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        parse: impl Fn(StatusCode, Vec<u8>) -> Result<T, ElydoraError>,
    ) -> Result<T, ElydoraError> {
        let url = format!("{}{}", self.base_url, path);
        let attempts = 1 + self.max_retries;

        // `retry_after_secs` carries the previous attempt's `Retry-After`
        // header (if any) forward to the delay computed before the next
        // attempt.
        let mut retry_after_secs: Option<u64> = None;
        for attempt in 0..attempts {
            if attempt > 0 {
                tokio::time::sleep(backoff_delay(attempt, retry_after_secs)).await;
            }
            retry_after_secs = None;

            let mut request = self.http.request(method.clone(), url.as_str()).header("Accept", "application/json");
            if let Some(bytes) = &body {
                request = request.header("Content-Type", "application/json").body(bytes.clone());
            }
            if let Some(token) = self.token.read().expect("token lock poisoned").clone() {
                request = request.bearer_auth(token);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt + 1 == attempts {
                        return Err(ElydoraError::internal_local(format!("transport error: {err}")));
                    }
                    warn!(attempt, "transport error, retrying: {err}");
                    continue;
                }
            };

            let status = response.status();

            if status.is_success() || status == StatusCode::NO_CONTENT {
                let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
                return parse(status, body);
            }

            let is_retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
            if is_retryable && attempt + 1 < attempts {
                retry_after_secs = parse_retry_after(response.headers());
                warn!(attempt, %status, "retryable response, backing off");
                continue;
            }

            return Err(parse_error_response(status, response).await);
        }

        unreachable!("loop always returns on its last iteration")
    }
}

/// Delay before attempt `n` (1-indexed, `n >= 1`). Uses the previous
/// response's `Retry-After` in seconds when present, otherwise
/// `min(1000 * 2^(n-1), 10_000)` ms.
fn backoff_delay(n: u32, retry_after_secs: Option<u64>) -> Duration {
    match retry_after_secs {
        Some(secs) => Duration::from_secs(secs),
        None => {
            let exp = 1u64.checked_shl(n - 1).unwrap_or(u64::MAX);
            Duration::from_millis((1000u64.saturating_mul(exp)).min(10_000))
        }
    }
}

fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers.get("Retry-After")?.to_str().ok()?.trim().parse::<u64>().ok()
}

async fn parse_error_response(status: StatusCode, response: reqwest::Response) -> ElydoraError {
    let body = response.bytes().await.unwrap_or_default();
    match serde_json::from_slice::<ErrorEnvelope>(&body) {
        Ok(envelope) => ElydoraError {
            status: status.as_u16(),
            code: envelope.error.code,
            message: envelope.error.message,
            request_id: envelope.error.request_id,
            details: envelope.error.details,
        },
        Err(_) => ElydoraError {
            status: status.as_u16(),
            code: ErrorCode::InternalError,
            message: format!("HTTP {}: {}", status.as_u16(), status.canonical_reason().unwrap_or("unknown")),
            request_id: "unknown".to_string(),
            details: None,
        },
    }
}

fn encode_id(id: &str) -> String {
    utf8_percent_encode(id, NON_ALPHANUMERIC).to_string()
}
