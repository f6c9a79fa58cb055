//! Applying Viridian credentials to a client configuration.
//!
//! Responsibilities:
//! - Check that the secrets directory and both key stores are usable.
//! - Set TLS, cloud discovery, the discovery URL and the cluster name on a
//!   caller-owned `ClientConfig`.
//!
//! Does NOT handle:
//! - Resolving credentials (see `loader`).
//! - Inspecting the contents of the key stores; they are opaque here.
//!
//! Invariants:
//! - Every precondition is checked before the configuration is touched, so a
//!   failure leaves it exactly as it was.
//! - The keystore and truststore share one password.
//! - Store paths are written verbatim; a secrets directory whose path is not
//!   valid UTF-8 is rejected rather than rewritten.

use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::constants::{
    CLOUD_URL_PROPERTY, KEYSTORE_FILE_NAME, KEYSTORE_PASSWORD_PROPERTY, KEYSTORE_PROPERTY,
    TRUSTSTORE_FILE_NAME, TRUSTSTORE_PASSWORD_PROPERTY, TRUSTSTORE_PROPERTY, VIRIDIAN_CLOUD_URL,
};
use crate::loader::{ConfigError, PreconditionCheck, resolve_from_env};
use crate::types::{ClientConfig, Credentials, SslConfig};

/// Paths of the key stores inside a validated secrets directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    pub keystore: PathBuf,
    pub truststore: PathBuf,
}

/// Check that `secrets_dir` is a directory holding readable `client.keystore`
/// and `client.truststore` files.
///
/// Checks run in that order and stop at the first failure.
pub fn check_key_material(secrets_dir: &Path) -> Result<KeyMaterial, ConfigError> {
    if !secrets_dir.is_dir() {
        return Err(ConfigError::Precondition {
            path: secrets_dir.to_path_buf(),
            check: PreconditionCheck::NotADirectory,
        });
    }

    let keystore = secrets_dir.join(KEYSTORE_FILE_NAME);
    check_readable_file(&keystore)?;
    let truststore = secrets_dir.join(TRUSTSTORE_FILE_NAME);
    check_readable_file(&truststore)?;

    Ok(KeyMaterial {
        keystore,
        truststore,
    })
}

fn check_readable_file(path: &Path) -> Result<(), ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::Precondition {
            path: path.to_path_buf(),
            check: PreconditionCheck::NotAFile,
        });
    }
    File::open(path).map_err(|_| ConfigError::Precondition {
        path: path.to_path_buf(),
        check: PreconditionCheck::NotReadable,
    })?;
    Ok(())
}

fn utf8_path(path: &Path) -> Result<&str, ConfigError> {
    path.to_str().ok_or_else(|| ConfigError::Precondition {
        path: path.to_path_buf(),
        check: PreconditionCheck::NotUtf8,
    })
}

/// Configure `client_config` for a Viridian cluster.
///
/// `secrets_dir` must contain `client.keystore` and `client.truststore`, both
/// protected by `password`. On success the client has TLS enabled with both
/// stores, cloud discovery enabled with `discovery_token`, the discovery URL
/// property set and its cluster name set to `cluster_id`. On failure the
/// client is left untouched.
pub fn configure(
    cluster_id: &str,
    discovery_token: &SecretString,
    password: &SecretString,
    secrets_dir: &Path,
    client_config: &mut ClientConfig,
) -> Result<(), ConfigError> {
    let key_material = check_key_material(secrets_dir)?;
    let keystore = utf8_path(&key_material.keystore)?;
    let truststore = utf8_path(&key_material.truststore)?;

    let mut props = BTreeMap::new();
    props.insert(KEYSTORE_PROPERTY.to_string(), keystore.to_string());
    props.insert(
        KEYSTORE_PASSWORD_PROPERTY.to_string(),
        password.expose_secret().to_string(),
    );
    props.insert(TRUSTSTORE_PROPERTY.to_string(), truststore.to_string());
    props.insert(
        TRUSTSTORE_PASSWORD_PROPERTY.to_string(),
        password.expose_secret().to_string(),
    );

    let network = client_config.network_mut();
    network.set_ssl_config(SslConfig::new().with_enabled(true).with_properties(props));
    network
        .cloud_config_mut()
        .set_enabled(true)
        .set_discovery_token(discovery_token.clone());
    client_config
        .set_property(CLOUD_URL_PROPERTY, VIRIDIAN_CLOUD_URL)
        .set_cluster_name(cluster_id);

    tracing::info!(
        cluster = %cluster_id,
        secrets_dir = %secrets_dir.display(),
        "Configured client for Viridian"
    );
    Ok(())
}

impl Credentials {
    /// Apply these credentials to `client_config`. See [`configure`].
    pub fn apply_to(&self, client_config: &mut ClientConfig) -> Result<(), ConfigError> {
        configure(
            &self.cluster_id,
            &self.discovery_token,
            &self.password,
            &self.secrets_dir,
            client_config,
        )
    }
}

/// Resolve credentials from the environment and apply them to `client_config`.
pub fn configure_from_env(client_config: &mut ClientConfig) -> Result<(), ConfigError> {
    resolve_from_env()?.apply_to(client_config)
}
