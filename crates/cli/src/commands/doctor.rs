//! Doctor command for step-by-step diagnostics.
//!
//! Responsibilities:
//! - Check the secrets directory setting, credential resolution, key material
//!   and the final client configuration as separate named checks.
//! - Keep going after a failure so every independent problem is reported.
//!
//! Does NOT handle:
//! - Contacting the Viridian discovery service.
//!
//! Invariants:
//! - The report never contains secret values.
//! - The command fails with the first check's error so exit codes stay meaningful.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use viridian_config::constants::SECRETS_DIR_ENV;
use viridian_config::{
    ClientConfig, ConfigError, Credentials, check_key_material, env_var_or_none,
};

use super::Overrides;
use crate::formatters::{OutputFormat, TableRows, format_output};

/// Result of a single diagnostic check.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

/// Status of a diagnostic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

impl CheckStatus {
    fn label(self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Skipped => "SKIP",
        }
    }
}

/// Complete diagnostic report.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub cli_version: String,
    pub os_arch: String,
    pub secrets_dir: Option<PathBuf>,
    pub checks: Vec<DiagnosticCheck>,
}

impl TableRows for DiagnosticReport {
    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![vec![
            "CHECK".to_string(),
            "STATUS".to_string(),
            "MESSAGE".to_string(),
        ]];
        rows.extend(self.checks.iter().map(|check| {
            vec![
                check.name.clone(),
                check.status.label().to_string(),
                check.message.clone(),
            ]
        }));
        rows
    }
}

/// Collects checks and remembers the first failure.
#[derive(Default)]
struct Checks {
    checks: Vec<DiagnosticCheck>,
    first_error: Option<ConfigError>,
}

impl Checks {
    fn pass(&mut self, name: &str, message: String) {
        self.push(name, CheckStatus::Pass, message);
    }

    fn fail(&mut self, name: &str, err: ConfigError) {
        self.push(name, CheckStatus::Fail, err.to_string());
        self.first_error.get_or_insert(err);
    }

    fn skip(&mut self, name: &str, message: &str) {
        self.push(name, CheckStatus::Skipped, message.to_string());
    }

    fn push(&mut self, name: &str, status: CheckStatus, message: String) {
        self.checks.push(DiagnosticCheck {
            name: name.to_string(),
            status,
            message,
        });
    }
}

/// Run the doctor diagnostic command.
///
/// Returns an error carrying the first failed check's `ConfigError`.
pub fn run(overrides: &Overrides, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    info!("Running Viridian diagnostics...");

    let mut checks = Checks::default();

    let secrets_dir = overrides
        .secrets_dir
        .clone()
        .or_else(|| env_var_or_none(SECRETS_DIR_ENV).map(PathBuf::from));
    match &secrets_dir {
        Some(dir) => checks.pass("secrets_dir", format!("Using {}", dir.display())),
        None => checks.fail(
            "secrets_dir",
            ConfigError::MissingEnvVar(SECRETS_DIR_ENV.to_string()),
        ),
    }

    let credentials: Option<Credentials> = if secrets_dir.is_some() {
        match overrides.resolve() {
            Ok(creds) => {
                checks.pass(
                    "credentials",
                    format!(
                        "Resolved cluster '{}' from {}",
                        creds.cluster_id, creds.source
                    ),
                );
                Some(creds)
            }
            Err(e) => {
                checks.fail("credentials", e);
                None
            }
        }
    } else {
        checks.skip("credentials", "No secrets directory");
        None
    };

    let key_material_ok = match &secrets_dir {
        Some(dir) => match check_key_material(dir) {
            Ok(material) => {
                checks.pass(
                    "key_material",
                    format!(
                        "Found {} and {}",
                        material.keystore.display(),
                        material.truststore.display()
                    ),
                );
                true
            }
            Err(e) => {
                checks.fail("key_material", e);
                false
            }
        },
        None => {
            checks.skip("key_material", "No secrets directory");
            false
        }
    };

    match credentials {
        Some(creds) if key_material_ok => {
            let mut client_config = ClientConfig::new();
            match creds.apply_to(&mut client_config) {
                Ok(()) => checks.pass(
                    "client_config",
                    format!(
                        "TLS and cloud discovery configured for cluster '{}'",
                        client_config.cluster_name()
                    ),
                ),
                Err(e) => checks.fail("client_config", e),
            }
        }
        _ => checks.skip(
            "client_config",
            "Requires resolved credentials and key material",
        ),
    }

    let report = DiagnosticReport {
        cli_version: env!("CARGO_PKG_VERSION").to_string(),
        os_arch: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
        secrets_dir,
        checks: checks.checks,
    };
    print!("{}", format_output(&report, format)?);

    match checks.first_error {
        Some(err) => Err(anyhow::Error::new(err).context("Doctor found problems")),
        None => Ok(()),
    }
}
