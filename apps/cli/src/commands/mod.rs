// [apps/cli/src/commands/mod.rs]
pub mod agent;
pub mod audit;
pub mod epochs;
pub mod export;
pub mod install;
pub mod jwks;
pub mod op;

use elydora_infra_transport::{ClientConfig, ElydoraClient};
use elydora_sdk::config::AgentConfig;

/// An authenticated client built from a saved [`AgentConfig`]. Every
/// read/write subcommand but `agent register`/`jwks` needs one.
pub fn client_for(config: &AgentConfig) -> ElydoraClient {
    let client = ElydoraClient::new(ClientConfig::default().with_base_url(config.base_url.clone()));
    client.set_token(config.token.clone());
    client
}

pub fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
