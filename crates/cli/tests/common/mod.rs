//! Shared test utilities for viridian-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Build throwaway secrets directories with key stores and `config.yaml`.
//!
//! Invariants / Assumptions:
//! - No `VIRIDIAN_*` variable leaks in from the host environment.
//! - Key stores are opaque to the CLI, so any bytes will do.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a hermetic `viridian-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `VIRIDIAN_*` variables and `RUST_LOG` from the host are cleared.
pub fn viridian_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("viridian-cli");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("VIRIDIAN_SECRETS_DIR")
        .env_remove("VIRIDIAN_CLUSTER_ID")
        .env_remove("VIRIDIAN_PASSWORD")
        .env_remove("VIRIDIAN_DISCOVERY_TOKEN")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a command with a secrets directory and all three credential
/// variables set.
#[allow(dead_code)]
pub fn viridian_cmd_with_env(secrets_dir: &Path) -> Command {
    let mut cmd = viridian_cmd();
    cmd.env("VIRIDIAN_SECRETS_DIR", secrets_dir)
        .env("VIRIDIAN_CLUSTER_ID", "env-cluster")
        .env("VIRIDIAN_PASSWORD", "env-password")
        .env("VIRIDIAN_DISCOVERY_TOKEN", "env-token");
    cmd
}

/// A secrets directory holding both key stores.
#[allow(dead_code)]
pub fn secrets_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("client.keystore"), b"keystore").unwrap();
    fs::write(dir.path().join("client.truststore"), b"truststore").unwrap();
    dir
}

/// Write a well-formed `config.yaml` into `dir`.
#[allow(dead_code)]
pub fn write_config_file(dir: &Path, cluster: &str, token: &str, password: &str) {
    fs::write(
        dir.join("config.yaml"),
        format!(
            "cluster:\n  name: {cluster}\n  discovery-token: {token}\nssl:\n  key-password: {password}\n"
        ),
    )
    .unwrap();
}
