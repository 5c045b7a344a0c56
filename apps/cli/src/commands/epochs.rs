// [apps/cli/src/commands/epochs.rs]
use anyhow::Result;
use clap::{Args, Subcommand};

use elydora_sdk::config::AgentConfig;

use super::{client_for, print_json};

#[derive(Args, Debug)]
pub struct EpochsArgs {
    #[arg(long, env = "ELYDORA_AGENT_ID")]
    agent_id: String,
    #[command(subcommand)]
    command: EpochsCommand,
}

#[derive(Subcommand, Debug)]
enum EpochsCommand {
    List,
    Show { epoch_id: String },
}

pub async fn run(args: EpochsArgs) -> Result<()> {
    let config = AgentConfig::load(&args.agent_id)?;
    let client = client_for(&config);
    match args.command {
        EpochsCommand::List => print_json(&client.list_epochs().await?),
        EpochsCommand::Show { epoch_id } => print_json(&client.get_epoch(&epoch_id).await?),
    }
}
