//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Collect explicit credential overrides.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read `VIRIDIAN_*` variables; the config crate does that so the
//!   `config.yaml`-wins rule stays in one place.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::Overrides;

#[derive(Parser)]
#[command(name = "viridian-cli")]
#[command(about = "Resolve and check Viridian connection credentials", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  viridian-cli status\n  viridian-cli --secrets-dir ./secrets doctor\n  viridian-cli resolve -o json\n  viridian-cli render > hazelcast-client.yaml\n"
)]
pub struct Cli {
    /// Directory holding client.keystore, client.truststore and optionally config.yaml.
    ///
    /// Overrides VIRIDIAN_SECRETS_DIR.
    #[arg(long, global = true, value_name = "DIR")]
    pub secrets_dir: Option<PathBuf>,

    /// Cluster id, overriding the resolved value
    #[arg(long, global = true)]
    pub cluster_id: Option<String>,

    /// Discovery token, overriding the resolved value
    #[arg(long, global = true)]
    pub discovery_token: Option<String>,

    /// Keystore/truststore password, overriding the resolved value
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Explicit overrides from the command line. Blank values are ignored.
    pub fn overrides(&self) -> Overrides {
        fn non_blank(value: &Option<String>) -> Option<String> {
            value
                .as_ref()
                .filter(|v| !v.trim().is_empty())
                .cloned()
        }

        Overrides {
            secrets_dir: self
                .secrets_dir
                .clone()
                .filter(|p| !p.to_string_lossy().trim().is_empty()),
            cluster_id: non_blank(&self.cluster_id),
            discovery_token: non_blank(&self.discovery_token),
            password: non_blank(&self.password),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report whether a Viridian secrets directory is configured
    Status,

    /// Resolve credentials and print a redacted summary
    Resolve,

    /// Check the environment, credentials and key material step by step
    Doctor,

    /// Print the resulting client configuration as hazelcast-client YAML
    Render {
        /// Print passwords and the discovery token instead of masking them
        #[arg(long)]
        reveal_secrets: bool,
    },
}
