// [libs/sdk/src/install.rs]
//! `hook.js`/`guard.js` artifact bodies.
//!
//! Wiring these into a specific host tool's own hook configuration is an
//! installer-plugin's job and explicitly out of scope here. This module
//! only emits the two script bodies themselves and writes them to the
//! paths the caller chooses.

use std::fs;
use std::path::{Path, PathBuf};

use elydora_infra_transport::ElydoraError;

/// Body of the pre/post-tool-use hook script a host agent invokes
/// around every file/shell/network operation. It shells out to the
/// `elydora` CLI's `op submit` subcommand so the hook itself carries no
/// signing logic.
pub fn hook_script_body() -> String {
    r#"#!/usr/bin/env node
// Elydora operation hook.
//
// Invoked by the host agent around each tool call. Reads an operation
// description as JSON on stdin:
//   { "agentId": "...", "type": "...", "subject": {...}, "action": {...}, "payload": {...} }
// translates it into `elydora op submit` flags, and forwards the CLI's
// exit code. The signing key never leaves the `elydora` process this
// script spawns.

const { spawnSync } = require("child_process");

let input = "";
process.stdin.on("data", (chunk) => (input += chunk));
process.stdin.on("end", () => {
  const op = JSON.parse(input);
  const args = [
    "op", "submit",
    "--agent-id", op.agentId,
    "--type", op.type,
    "--subject", JSON.stringify(op.subject ?? {}),
    "--action", JSON.stringify(op.action ?? {}),
  ];
  let payloadInput;
  if (op.payload !== undefined) {
    args.push("--payload", "-");
    payloadInput = JSON.stringify(op.payload);
  }
  const result = spawnSync("elydora", args, {
    input: payloadInput,
    stdio: [payloadInput === undefined ? "ignore" : "pipe", "inherit", "inherit"],
  });
  process.exit(result.status ?? 1);
});
"#
    .to_string()
}

/// Body of the guard script a host agent can invoke synchronously
/// before a privileged operation, to block on a `FORBIDDEN`/`TTL_EXPIRED`
/// style rejection rather than only recording it after the fact. Shares
/// the hook's stdin shape and submit path; a host wires it in before the
/// tool call it describes instead of after.
pub fn guard_script_body() -> String {
    r#"#!/usr/bin/env node
// Elydora pre-flight guard.
//
// Submits the proposed operation and blocks (non-zero exit) if the
// platform rejects it. Reads the same operation JSON shape as the hook
// script. Intended to run before the tool call it describes, not after.

const { spawnSync } = require("child_process");

let input = "";
process.stdin.on("data", (chunk) => (input += chunk));
process.stdin.on("end", () => {
  const op = JSON.parse(input);
  const args = [
    "op", "submit",
    "--agent-id", op.agentId,
    "--type", op.type,
    "--subject", JSON.stringify(op.subject ?? {}),
    "--action", JSON.stringify(op.action ?? {}),
  ];
  let payloadInput;
  if (op.payload !== undefined) {
    args.push("--payload", "-");
    payloadInput = JSON.stringify(op.payload);
  }
  const result = spawnSync("elydora", args, {
    input: payloadInput,
    stdio: [payloadInput === undefined ? "ignore" : "pipe", "inherit", "inherit"],
  });
  process.exit(result.status ?? 1);
});
"#
    .to_string()
}

/// Write both artifacts to the given paths, creating parent directories
/// as needed. Returns the paths written to, for the CLI to echo back.
pub fn write_install_artifacts(hook_path: &Path, guard_path: &Path) -> Result<(PathBuf, PathBuf), ElydoraError> {
    write_one(hook_path, &hook_script_body())?;
    write_one(guard_path, &guard_script_body())?;
    Ok((hook_path.to_path_buf(), guard_path.to_path_buf()))
}

fn write_one(path: &Path, body: &str) -> Result<(), ElydoraError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ElydoraError::internal_local(format!("could not create {}: {e}", parent.display())))?;
    }
    fs::write(path, body).map_err(|e| ElydoraError::internal_local(format!("could not write {}: {e}", path.display())))
}
