// [libs/infra/transport/src/wire.rs]
//! Request/response bodies for the v1 REST surface.
//!
//! The core only consumes these endpoints; it never constructs the
//! server's internal representation of a user, agent, epoch, or export.
//! Fields not enumerated here are carried as opaque [`serde_json::Value`]
//! so this crate neither invents a schema nor drops fields a future
//! server revision adds.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use elydora_domain_operation::Receipt;

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: Json,
    pub organization: Json,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: Json,
    pub token: String,
}

/// `POST /v1/agents/register` body. Fields beyond the obvious
/// identifying triple are left to the caller as free-form metadata.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterAgentRequest {
    pub org_id: String,
    pub agent_name: String,
    pub agent_pubkey: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAgentResponse {
    pub agent: Json,
    pub keys: Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAgentResponse {
    pub agent: Json,
    pub keys: Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct FreezeAgentRequest {
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevokeAgentRequest {
    pub kid: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOperationResponse {
    pub receipt: Receipt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOperationResponse {
    pub operation: Json,
    #[serde(default)]
    pub receipt: Option<Receipt>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOperationResponse {
    pub operation_id: String,
    pub signature_valid: bool,
    pub chain_valid: bool,
    #[serde(default)]
    pub details: Option<Json>,
}

/// `POST /v1/audit/query` filter. Every field is optional; an empty
/// filter queries the full (authorized) operation set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditQueryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditQueryResponse {
    pub operations: Vec<Json>,
    #[serde(default)]
    pub cursor: Option<String>,
    pub total_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEpochsResponse {
    pub epochs: Vec<Json>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEpochResponse {
    pub epoch: Json,
    #[serde(default)]
    pub anchor: Option<Json>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateExportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_ms: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExportResponse {
    pub export: Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListExportsResponse {
    pub exports: Vec<Json>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetExportResponse {
    pub export: Json,
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwksResponse {
    pub keys: Vec<Json>,
}
