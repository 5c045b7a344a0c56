// [apps/cli/src/commands/agent.rs]
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use rand::RngCore;

use elydora_core_codec::base64url_encode;
use elydora_core_signer::derive_public;
use elydora_infra_transport::{ClientConfig, ElydoraClient, RegisterAgentRequest};
use elydora_sdk::config::{save_private_seed, AgentConfig};

use super::{client_for, print_json};

#[derive(Args, Debug)]
pub struct AgentArgs {
    #[command(subcommand)]
    command: AgentCommand,
}

#[derive(Subcommand, Debug)]
enum AgentCommand {
    /// Generate a signing key, register it with the platform, and save
    /// the resulting agent identity under `${HOME}/.elydora/<agent_id>/`.
    Register {
        #[arg(long)]
        org: String,
        #[arg(long)]
        name: String,
        #[arg(long, env = "ELYDORA_BASE_URL", default_value = "https://api.elydora.com")]
        base_url: String,
    },
    /// Print the platform's current record for this agent.
    Show {
        #[arg(long, env = "ELYDORA_AGENT_ID")]
        agent_id: String,
    },
    /// Freeze the agent: the platform stops accepting new operations from it.
    Freeze {
        #[arg(long, env = "ELYDORA_AGENT_ID")]
        agent_id: String,
        #[arg(long)]
        reason: String,
    },
    /// Revoke one of the agent's signing keys.
    Revoke {
        #[arg(long, env = "ELYDORA_AGENT_ID")]
        agent_id: String,
        #[arg(long)]
        kid: String,
        #[arg(long)]
        reason: String,
    },
}

pub async fn run(args: AgentArgs) -> Result<()> {
    match args.command {
        AgentCommand::Register { org, name, base_url } => register(org, name, base_url).await,
        AgentCommand::Show { agent_id } => show(agent_id).await,
        AgentCommand::Freeze { agent_id, reason } => freeze(agent_id, reason).await,
        AgentCommand::Revoke { agent_id, kid, reason } => revoke(agent_id, kid, reason).await,
    }
}

async fn register(org: String, name: String, base_url: String) -> Result<()> {
    let mut seed_bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut seed_bytes);
    let seed = base64url_encode(&seed_bytes);
    let pubkey = derive_public(&seed).context("deriving public key from freshly generated seed")?;

    let client = ElydoraClient::new(ClientConfig::default().with_base_url(base_url.clone()));
    let response = client
        .register_agent(&RegisterAgentRequest {
            org_id: org.clone(),
            agent_name: name.clone(),
            agent_pubkey: pubkey,
            metadata: None,
        })
        .await?;

    let agent_id = response
        .agent
        .get("id")
        .and_then(|v| v.as_str())
        .context("registration response missing agent.id")?
        .to_string();
    let kid = response
        .keys
        .get("kid")
        .and_then(|v| v.as_str())
        .context("registration response missing keys.kid")?
        .to_string();

    save_private_seed(&agent_id, &seed)?;
    AgentConfig {
        org_id: org,
        agent_id: agent_id.clone(),
        kid,
        base_url,
        agent_name: name,
        token: None,
    }
    .save()?;

    println!("registered agent {agent_id}");
    Ok(())
}

async fn show(agent_id: String) -> Result<()> {
    let config = AgentConfig::load(&agent_id)?;
    let response = client_for(&config).get_agent(&agent_id).await?;
    print_json(&response)
}

async fn freeze(agent_id: String, reason: String) -> Result<()> {
    let config = AgentConfig::load(&agent_id)?;
    client_for(&config).freeze_agent(&agent_id, &reason).await?;
    println!("agent {agent_id} frozen");
    Ok(())
}

async fn revoke(agent_id: String, kid: String, reason: String) -> Result<()> {
    let config = AgentConfig::load(&agent_id)?;
    client_for(&config).revoke_agent(&agent_id, &kid, &reason).await?;
    println!("key {kid} revoked for agent {agent_id}");
    Ok(())
}
