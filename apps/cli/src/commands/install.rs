// [apps/cli/src/commands/install.rs]
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct InstallArgs {
    #[arg(long, default_value = "hook.js")]
    hook_path: PathBuf,
    #[arg(long, default_value = "guard.js")]
    guard_path: PathBuf,
}

/// Write the two installer artifacts. Wiring them into a specific host
/// tool's own hook configuration is left to that tool's installer
/// plugin.
pub fn run(args: InstallArgs) -> Result<()> {
    let (hook, guard) = elydora_sdk::write_install_artifacts(&args.hook_path, &args.guard_path)?;
    println!("wrote {}", hook.display());
    println!("wrote {}", guard.display());
    Ok(())
}
