// [apps/cli/src/commands/op.rs]
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use elydora_domain_operation::OperationParams;
use elydora_sdk::{config::AgentConfig, Agent};

use super::{client_for, print_json};

#[derive(Args, Debug)]
pub struct OpArgs {
    #[command(subcommand)]
    command: OpCommand,
}

#[derive(Subcommand, Debug)]
enum OpCommand {
    /// Build a signed operation record and submit it, printing the receipt.
    Submit {
        #[arg(long, env = "ELYDORA_AGENT_ID")]
        agent_id: String,
        #[arg(long = "type")]
        operation_type: String,
        #[arg(long, default_value = "{}")]
        subject: String,
        #[arg(long, default_value = "{}")]
        action: String,
        /// Path to a JSON payload file, or `-` to read from stdin. Omit for a null payload.
        #[arg(long)]
        payload: Option<PathBuf>,
    },
    /// Look up a previously submitted operation by id.
    Get {
        #[arg(long, env = "ELYDORA_AGENT_ID")]
        agent_id: String,
        operation_id: String,
    },
    /// Ask the platform to re-verify an operation's signature and chain linkage.
    Verify {
        #[arg(long, env = "ELYDORA_AGENT_ID")]
        agent_id: String,
        operation_id: String,
    },
}

pub async fn run(args: OpArgs) -> Result<()> {
    match args.command {
        OpCommand::Submit { agent_id, operation_type, subject, action, payload } => {
            submit(agent_id, operation_type, subject, action, payload).await
        }
        OpCommand::Get { agent_id, operation_id } => get(agent_id, operation_id).await,
        OpCommand::Verify { agent_id, operation_id } => verify(agent_id, operation_id).await,
    }
}

async fn submit(
    agent_id: String,
    operation_type: String,
    subject: String,
    action: String,
    payload: Option<PathBuf>,
) -> Result<()> {
    let agent = Agent::load(&agent_id)?;

    let payload_value = match payload {
        Some(path) if path == PathBuf::from("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Some(serde_json::from_str(&buf).context("payload on stdin is not valid JSON")?)
        }
        Some(path) => {
            let text = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            Some(serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))?)
        }
        None => None,
    };

    let params = OperationParams {
        operation_type,
        subject: serde_json::from_str::<Value>(&subject).context("--subject is not valid JSON")?,
        action: serde_json::from_str::<Value>(&action).context("--action is not valid JSON")?,
        payload: payload_value,
    };

    let response = agent.create_and_submit(params).await?;
    print_json(&response.receipt)
}

async fn get(agent_id: String, operation_id: String) -> Result<()> {
    let config = AgentConfig::load(&agent_id)?;
    let response = client_for(&config).get_operation(&operation_id).await?;
    print_json(&response)
}

async fn verify(agent_id: String, operation_id: String) -> Result<()> {
    let config = AgentConfig::load(&agent_id)?;
    let response = client_for(&config).verify_operation(&operation_id).await?;
    print_json(&response)
}
