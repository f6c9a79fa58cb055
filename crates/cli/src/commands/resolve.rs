//! Resolve command: show where credentials come from, without revealing them.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use viridian_config::{CredentialSource, Credentials};

use super::Overrides;
use crate::formatters::{OutputFormat, TableRows, format_output};

/// Redacted view of resolved credentials.
#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub cluster_id: String,
    pub secrets_dir: PathBuf,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

impl From<&Credentials> for ResolveOutput {
    fn from(creds: &Credentials) -> Self {
        let (source, config_file) = match &creds.source {
            CredentialSource::ConfigFile(path) => ("config_file", Some(path.clone())),
            CredentialSource::Environment => ("environment", None),
            CredentialSource::Explicit => ("explicit", None),
        };
        Self {
            cluster_id: creds.cluster_id.clone(),
            secrets_dir: creds.secrets_dir.clone(),
            source: source.to_string(),
            config_file,
        }
    }
}

impl TableRows for ResolveOutput {
    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![
            vec!["Cluster id:".to_string(), self.cluster_id.clone()],
            vec![
                "Secrets dir:".to_string(),
                self.secrets_dir.display().to_string(),
            ],
            vec!["Source:".to_string(), self.source.clone()],
        ];
        if let Some(ref path) = self.config_file {
            rows.push(vec!["Config file:".to_string(), path.display().to_string()]);
        }
        rows.push(vec!["Discovery token:".to_string(), "set".to_string()]);
        rows.push(vec!["Password:".to_string(), "set".to_string()]);
        rows
    }
}

pub fn run(overrides: &Overrides, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let creds = overrides
        .resolve()
        .context("Failed to resolve Viridian credentials")?;

    tracing::debug!(cluster = %creds.cluster_id, source = %creds.source, "Resolved credentials");
    print!("{}", format_output(&ResolveOutput::from(&creds), format)?);
    Ok(())
}
