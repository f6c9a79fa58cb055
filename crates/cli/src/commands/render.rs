//! Render command: print the configured client as `hazelcast-client` YAML.

use anyhow::{Context, Result};
use viridian_config::ClientConfig;

use super::Overrides;

pub fn run(overrides: &Overrides, reveal_secrets: bool) -> Result<()> {
    let creds = overrides
        .resolve()
        .context("Failed to resolve Viridian credentials")?;

    let mut client_config = ClientConfig::new();
    creds
        .apply_to(&mut client_config)
        .context("Failed to configure client")?;

    if reveal_secrets {
        tracing::warn!("Rendering client configuration with secrets revealed");
    }
    let yaml = client_config
        .to_yaml(reveal_secrets)
        .context("Failed to render client configuration")?;
    print!("{}", yaml);
    Ok(())
}
