// [apps/cli/src/main.rs]
//! `elydora`: the command-line front end for the agent SDK. Agent
//! registration, operation create+submit, audit/epoch/export lookups,
//! and the `install` subcommand that emits host-tool hook artifacts.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{agent, audit, epochs, export, install, jwks, op};

#[derive(Parser, Debug)]
#[command(name = "elydora", version, about = "Elydora audit platform agent CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register, inspect, freeze, or revoke an agent identity.
    Agent(agent::AgentArgs),
    /// Build and submit signed operations, or look one up.
    Op(op::OpArgs),
    /// Query the audit log.
    Audit(audit::AuditArgs),
    /// List or inspect hash-chain epochs.
    Epochs(epochs::EpochsArgs),
    /// Create, list, or inspect audit exports.
    Export(export::ExportArgs),
    /// Fetch the platform's current signing keys.
    Jwks,
    /// Write `hook.js`/`guard.js` to the given paths.
    Install(install::InstallArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    elydora_shared_telemetry::init_tracing("elydora");

    let cli = Cli::parse();
    match cli.command {
        Commands::Agent(args) => agent::run(args).await,
        Commands::Op(args) => op::run(args).await,
        Commands::Audit(args) => audit::run(args).await,
        Commands::Epochs(args) => epochs::run(args).await,
        Commands::Export(args) => export::run(args).await,
        Commands::Jwks => jwks::run().await,
        Commands::Install(args) => install::run(args),
    }
}
