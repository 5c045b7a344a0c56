// [apps/cli/src/commands/export.rs]
use anyhow::Result;
use clap::{Args, Subcommand};

use elydora_infra_transport::CreateExportRequest;
use elydora_sdk::config::AgentConfig;

use super::{client_for, print_json};

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(long, env = "ELYDORA_AGENT_ID")]
    agent_id: String,
    #[command(subcommand)]
    command: ExportCommand,
}

#[derive(Subcommand, Debug)]
enum ExportCommand {
    Create {
        #[arg(long)]
        filter_agent_id: Option<String>,
        #[arg(long)]
        from_ms: Option<i64>,
        #[arg(long)]
        to_ms: Option<i64>,
    },
    List,
    Show {
        export_id: String,
    },
}

pub async fn run(args: ExportArgs) -> Result<()> {
    let config = AgentConfig::load(&args.agent_id)?;
    let client = client_for(&config);
    match args.command {
        ExportCommand::Create { filter_agent_id, from_ms, to_ms } => {
            let request = CreateExportRequest { agent_id: filter_agent_id, from_ms, to_ms };
            print_json(&client.create_export(&request).await?)
        }
        ExportCommand::List => print_json(&client.list_exports().await?),
        ExportCommand::Show { export_id } => print_json(&client.get_export(&export_id).await?),
    }
}
