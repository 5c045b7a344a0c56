// [apps/cli/src/commands/jwks.rs]
use anyhow::Result;

use elydora_infra_transport::{ClientConfig, ElydoraClient};

use super::print_json;

/// Unauthenticated: the platform's signing keys are public.
pub async fn run() -> Result<()> {
    let base_url = std::env::var("ELYDORA_BASE_URL").unwrap_or_else(|_| "https://api.elydora.com".to_string());
    let client = ElydoraClient::new(ClientConfig::default().with_base_url(base_url));
    print_json(&client.jwks().await?)
}
