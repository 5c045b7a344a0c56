// [apps/cli/src/commands/audit.rs]
use anyhow::Result;
use clap::Args;

use elydora_infra_transport::AuditQueryFilter;
use elydora_sdk::config::AgentConfig;

use super::{client_for, print_json};

#[derive(Args, Debug)]
pub struct AuditArgs {
    #[arg(long, env = "ELYDORA_AGENT_ID")]
    agent_id: String,
    #[arg(long)]
    filter_agent_id: Option<String>,
    #[arg(long)]
    operation_type: Option<String>,
    #[arg(long)]
    from_ms: Option<i64>,
    #[arg(long)]
    to_ms: Option<i64>,
    #[arg(long)]
    cursor: Option<String>,
    #[arg(long)]
    limit: Option<u32>,
}

pub async fn run(args: AuditArgs) -> Result<()> {
    let config = AgentConfig::load(&args.agent_id)?;
    let filter = AuditQueryFilter {
        agent_id: args.filter_agent_id,
        operation_type: args.operation_type,
        from_ms: args.from_ms,
        to_ms: args.to_ms,
        cursor: args.cursor,
        limit: args.limit,
    };
    let response = client_for(&config).audit_query(&filter).await?;
    print_json(&response)
}
