// [libs/sdk/src/client.rs]
//! The combined facade: an [`OperationBuilder`] paired with an
//! [`ElydoraClient`], wired from on-disk [`AgentConfig`]. A single entry
//! point a host process embeds, covering the build-then-submit hot path
//! end to end.

use elydora_domain_operation::{
    BuilderConfig, OperationBuilder, OperationParams, SignedOperationRecord,
};
use elydora_infra_transport::{ClientConfig, ElydoraClient, ElydoraError, SubmitOperationResponse};
use tracing::instrument;

use crate::config::{load_private_seed, AgentConfig};

/// A ready-to-use agent: signing state plus an authenticated transport,
/// both scoped to the agent identified by `config.agent_id`.
pub struct Agent {
    builder: OperationBuilder,
    transport: ElydoraClient,
}

impl Agent {
    /// Build an agent directly from in-memory configuration, bypassing
    /// the on-disk layout entirely. Useful for embedding contexts that
    /// manage their own secret storage.
    pub fn new(builder_config: BuilderConfig, client_config: ClientConfig) -> Self {
        let transport = ElydoraClient::new(client_config);
        Self { builder: OperationBuilder::new(builder_config), transport }
    }

    /// Load an [`AgentConfig`] and its private seed from
    /// `${HOME}/.elydora/<agent_id>/` and construct an [`Agent`] from
    /// them.
    pub fn load(agent_id: &str) -> Result<Self, ElydoraError> {
        let config = AgentConfig::load(agent_id)?;
        let seed = load_private_seed(agent_id)?;
        let builder_config = BuilderConfig::new(config.org_id.clone(), config.agent_id.clone(), seed, config.kid.clone());
        let client_config = ClientConfig::default().with_base_url(config.base_url.clone());
        let transport = ElydoraClient::new(client_config);
        transport.set_token(config.token.clone());
        Ok(Self { builder: OperationBuilder::new(builder_config), transport })
    }

    /// The hot path: build a signed Operation Record and submit it in
    /// one call, returning the server's Audit Receipt.
    #[instrument(skip(self, params))]
    pub async fn create_and_submit(&self, params: OperationParams) -> Result<SubmitOperationResponse, ElydoraError> {
        let record = self.build(params)?;
        self.transport.submit_operation(&record).await
    }

    /// Build and sign a record without submitting it, for callers that
    /// want to inspect, queue, or batch records before transport.
    pub fn build(&self, params: OperationParams) -> Result<SignedOperationRecord, ElydoraError> {
        self.builder
            .build(params)
            .map_err(|e| ElydoraError::validation(e.to_string()))
    }

    pub fn transport(&self) -> &ElydoraClient {
        &self.transport
    }

    pub fn builder(&self) -> &OperationBuilder {
        &self.builder
    }
}
