//! Tests for the credential loader.
//!
//! Responsibilities:
//! - Test resolution from environment variables.
//! - Test resolution from `config.yaml` and its precedence over the environment.
//! - Test builder overrides and `.env` loading.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Secrets directories are temporary and cleaned up via `tempfile`.

use std::path::Path;
use std::sync::Mutex;

use crate::constants::{CLUSTER_ID_ENV, DISCOVERY_TOKEN_ENV, PASSWORD_ENV, SECRETS_DIR_ENV};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every `VIRIDIAN_*` variable set to the given value or removed.
pub fn with_viridian_env<R>(
    secrets_dir: Option<&Path>,
    cluster_id: Option<&str>,
    discovery_token: Option<&str>,
    password: Option<&str>,
    f: impl FnOnce() -> R,
) -> R {
    let secrets_dir = secrets_dir.map(|p| p.to_string_lossy().into_owned());
    temp_env::with_vars(
        [
            (SECRETS_DIR_ENV, secrets_dir.as_deref()),
            (CLUSTER_ID_ENV, cluster_id),
            (DISCOVERY_TOKEN_ENV, discovery_token),
            (PASSWORD_ENV, password),
        ],
        f,
    )
}

/// Write a `config.yaml` with the given contents into `dir`.
pub fn write_config_file(dir: &Path, contents: &str) {
    std::fs::write(dir.join(crate::constants::CONFIG_FILE_NAME), contents)
        .expect("Failed to write config.yaml");
}
