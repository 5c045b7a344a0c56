// [libs/sdk/src/config.rs]
//! On-disk agent configuration and private-seed handling.
//!
//! Everything under `${HOME}/.elydora/<agent_id>/` is produced and
//! consumed here; wiring `hook.js`/`guard.js` into a specific host
//! tool's own configuration remains an installer-plugin concern outside
//! this crate.

use std::fs;
use std::path::{Path, PathBuf};

use elydora_core_codec::base64url_decode;
use elydora_infra_transport::ElydoraError;
use serde::{Deserialize, Serialize};

/// On-disk agent configuration: `${HOME}/.elydora/<agent_id>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub org_id: String,
    pub agent_id: String,
    pub kid: String,
    pub base_url: String,
    pub agent_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub token: Option<String>,
}

/// `${HOME}/.elydora/<agent_id>/`, creating it if absent.
pub fn agent_dir(agent_id: &str) -> Result<PathBuf, ElydoraError> {
    let home = dirs::home_dir()
        .ok_or_else(|| ElydoraError::validation("could not determine the user's home directory"))?;
    let dir = home.join(".elydora").join(agent_id);
    fs::create_dir_all(&dir).map_err(|e| ElydoraError::internal_local(format!("could not create {}: {e}", dir.display())))?;
    Ok(dir)
}

impl AgentConfig {
    pub fn load(agent_id: &str) -> Result<Self, ElydoraError> {
        let path = agent_dir(agent_id)?.join("config.json");
        let bytes = fs::read(&path)
            .map_err(|e| ElydoraError::internal_local(format!("could not read {}: {e}", path.display())))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ElydoraError::validation(format!("malformed agent config at {}: {e}", path.display())))
    }

    pub fn save(&self) -> Result<(), ElydoraError> {
        let path = agent_dir(&self.agent_id)?.join("config.json");
        let bytes = serde_json::to_vec_pretty(self)
            .map_err(|e| ElydoraError::validation(format!("could not serialize agent config: {e}")))?;
        write_private_file(&path, &bytes)
    }
}

/// Write the raw base64url-encoded 32-byte Ed25519 seed to
/// `${HOME}/.elydora/<agent_id>/private.key`, mode `0600` on POSIX.
pub fn save_private_seed(agent_id: &str, seed_b64u: &str) -> Result<(), ElydoraError> {
    if base64url_decode(seed_b64u).map(|b| b.len()).unwrap_or(0) != 32 {
        return Err(ElydoraError::validation("seed must decode to exactly 32 bytes"));
    }
    let path = agent_dir(agent_id)?.join("private.key");
    write_private_file(&path, seed_b64u.as_bytes())
}

pub fn load_private_seed(agent_id: &str) -> Result<String, ElydoraError> {
    let path = agent_dir(agent_id)?.join("private.key");
    let bytes = fs::read_to_string(&path)
        .map_err(|e| ElydoraError::internal_local(format!("could not read {}: {e}", path.display())))?;
    Ok(bytes.trim().to_string())
}

/// Write `bytes` to `path`, then restrict permissions to owner
/// read/write (mode `0600`) on POSIX. Non-POSIX platforms have no
/// equivalent file-mode concept and are left at the OS default; nothing
/// further is promised for those platforms.
fn write_private_file(path: &Path, bytes: &[u8]) -> Result<(), ElydoraError> {
    fs::write(path, bytes).map_err(|e| ElydoraError::internal_local(format!("could not write {}: {e}", path.display())))?;
    set_owner_only_permissions(path)
}

#[cfg(unix)]
fn set_owner_only_permissions(path: &Path) -> Result<(), ElydoraError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| ElydoraError::internal_local(format!("could not chmod {}: {e}", path.display())))
}

#[cfg(not(unix))]
fn set_owner_only_permissions(_path: &Path) -> Result<(), ElydoraError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use elydora_core_codec::base64url_encode;

    fn with_temp_home<T>(f: impl FnOnce() -> T) -> T {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", dir.path());
        f()
    }

    #[test]
    fn round_trips_agent_config() {
        with_temp_home(|| {
            let config = AgentConfig {
                org_id: "org-1".to_string(),
                agent_id: "agent-1".to_string(),
                kid: "kid-1".to_string(),
                base_url: "https://api.elydora.com".to_string(),
                agent_name: "claude-code".to_string(),
                token: Some("tok".to_string()),
            };
            config.save().unwrap();
            let loaded = AgentConfig::load("agent-1").unwrap();
            assert_eq!(loaded.agent_id, "agent-1");
            assert_eq!(loaded.token.as_deref(), Some("tok"));
        });
    }

    #[cfg(unix)]
    #[test]
    fn config_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        with_temp_home(|| {
            let config = AgentConfig {
                org_id: "o".to_string(),
                agent_id: "agent-2".to_string(),
                kid: "k".to_string(),
                base_url: "https://api.elydora.com".to_string(),
                agent_name: "n".to_string(),
                token: None,
            };
            config.save().unwrap();
            let path = agent_dir("agent-2").unwrap().join("config.json");
            let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o600);
        });
    }

    #[test]
    fn rejects_seed_of_wrong_length() {
        with_temp_home(|| {
            let short = base64url_encode(&[1u8; 16]);
            assert!(save_private_seed("agent-3", &short).is_err());
        });
    }

    #[test]
    fn round_trips_private_seed() {
        with_temp_home(|| {
            let seed = base64url_encode(&[9u8; 32]);
            save_private_seed("agent-4", &seed).unwrap();
            assert_eq!(load_private_seed("agent-4").unwrap(), seed);
        });
    }
}
