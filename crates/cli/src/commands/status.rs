//! Status command: is a Viridian secrets directory configured?

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use viridian_config::constants::{CONFIG_FILE_NAME, SECRETS_DIR_ENV};
use viridian_config::{config_present, env_var_or_none};

use super::Overrides;
use crate::formatters::{OutputFormat, TableRows, format_output};

#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub configured: bool,
    pub secrets_dir: Option<PathBuf>,
    /// Whether `config.yaml` will supply the credentials.
    pub config_file: bool,
}

impl TableRows for StatusOutput {
    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![vec![
            "Status:".to_string(),
            if self.configured {
                "configured".to_string()
            } else {
                format!("not configured ({} is not set)", SECRETS_DIR_ENV)
            },
        ]];
        if let Some(ref dir) = self.secrets_dir {
            rows.push(vec!["Secrets dir:".to_string(), dir.display().to_string()]);
            rows.push(vec![
                "Credentials:".to_string(),
                if self.config_file {
                    CONFIG_FILE_NAME.to_string()
                } else {
                    "environment".to_string()
                },
            ]);
        }
        rows
    }
}

/// Print the configuration status. Returns whether a secrets directory is configured.
pub fn run(overrides: &Overrides, output_format: &str) -> Result<bool> {
    let format = OutputFormat::from_str(output_format)?;

    let secrets_dir = match &overrides.secrets_dir {
        Some(dir) => Some(dir.clone()),
        None if config_present() => env_var_or_none(SECRETS_DIR_ENV).map(PathBuf::from),
        None => None,
    };
    let status = StatusOutput {
        configured: secrets_dir.is_some(),
        config_file: secrets_dir
            .as_ref()
            .is_some_and(|dir| dir.join(CONFIG_FILE_NAME).is_file()),
        secrets_dir,
    };

    print!("{}", format_output(&status, format)?);
    Ok(status.configured)
}
