//! Credential loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for resolving Viridian credentials.
//! - Resolve from `config.yaml` when present, otherwise from environment variables.
//! - Build the final `Credentials` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable reading (delegated to env.rs).
//! - Parsing `config.yaml` (delegated to file.rs).
//! - Applying credentials to a client (see connect.rs).
//!
//! Invariants / Assumptions:
//! - The secrets directory comes from the builder if set, otherwise from
//!   `VIRIDIAN_SECRETS_DIR`; nothing touches the filesystem before it is known.
//! - When `config.yaml` exists it is the only credential source; there is no
//!   fallback to environment variables, even if the file is malformed.
//! - Builder methods called after `from_env()` take precedence over resolved values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;

use super::env::{env_var_or_none, require_env};
use super::error::ConfigError;
use super::file::read_config_file;
use crate::constants::{
    CLUSTER_ID_ENV, CONFIG_FILE_NAME, DISCOVERY_TOKEN_ENV, DOTENV_DISABLED_ENV, PASSWORD_ENV,
    SECRETS_DIR_ENV,
};
use crate::types::{CredentialSource, Credentials};

/// Loader that resolves Viridian credentials from `config.yaml` or the environment.
pub struct ConfigLoader {
    secrets_dir: Option<PathBuf>,
    cluster_id: Option<String>,
    discovery_token: Option<SecretString>,
    password: Option<SecretString>,
    source: CredentialSource,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new, empty loader.
    pub fn new() -> Self {
        Self {
            secrets_dir: None,
            cluster_id: None,
            discovery_token: None,
            password: None,
            source: CredentialSource::Explicit,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_ENV).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use `dir` as the secrets directory instead of `VIRIDIAN_SECRETS_DIR`.
    pub fn with_secrets_dir(mut self, dir: PathBuf) -> Self {
        self.secrets_dir = Some(dir);
        self
    }

    pub fn with_cluster_id(mut self, cluster_id: String) -> Self {
        self.cluster_id = Some(cluster_id);
        self
    }

    pub fn with_discovery_token(mut self, token: String) -> Self {
        self.discovery_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the password shared by the keystore and the truststore.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Resolve credentials from `config.yaml` or the `VIRIDIAN_*` variables.
    ///
    /// # Errors
    ///
    /// - `MissingEnvVar` if no secrets directory is known, or if `config.yaml`
    ///   is absent and one of the credential variables is unset.
    /// - `ConfigFileRead` / `MalformedConfigFile` if `config.yaml` exists but
    ///   cannot be read or lacks a required value.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        let secrets_dir = match self.secrets_dir.take() {
            Some(dir) => dir,
            None => PathBuf::from(require_env(SECRETS_DIR_ENV)?),
        };

        let config_file = secrets_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            tracing::debug!(path = %config_file.display(), "Reading Viridian credentials from config file");
            let creds = read_config_file(&config_file)?;
            self.cluster_id = Some(creds.cluster_id);
            self.discovery_token = Some(creds.discovery_token);
            self.password = Some(creds.password);
            self.source = CredentialSource::ConfigFile(config_file);
        } else {
            tracing::debug!(
                secrets_dir = %secrets_dir.display(),
                "No config file in secrets directory, reading credentials from environment"
            );
            let password = require_env(PASSWORD_ENV)?;
            let cluster_id = require_env(CLUSTER_ID_ENV)?;
            let discovery_token = require_env(DISCOVERY_TOKEN_ENV)?;
            self.password = Some(SecretString::new(password.into()));
            self.cluster_id = Some(cluster_id);
            self.discovery_token = Some(SecretString::new(discovery_token.into()));
            self.source = CredentialSource::Environment;
        }

        self.secrets_dir = Some(secrets_dir);
        Ok(self)
    }

    /// Build the final credentials.
    ///
    /// A secrets directory left unset on the builder is read from
    /// `VIRIDIAN_SECRETS_DIR`, so explicit credentials can still rely on the
    /// environment for the key material location.
    pub fn build(self) -> Result<Credentials, ConfigError> {
        let secrets_dir = match self.secrets_dir {
            Some(dir) => dir,
            None => env_var_or_none(SECRETS_DIR_ENV)
                .map(PathBuf::from)
                .ok_or(ConfigError::MissingCredential {
                    field: "secrets directory",
                    env_var: SECRETS_DIR_ENV,
                })?,
        };
        let cluster_id = self
            .cluster_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::MissingCredential {
                field: "cluster id",
                env_var: CLUSTER_ID_ENV,
            })?;
        let discovery_token = self
            .discovery_token
            .filter(not_blank)
            .ok_or(ConfigError::MissingCredential {
                field: "discovery token",
                env_var: DISCOVERY_TOKEN_ENV,
            })?;
        let password = self
            .password
            .filter(not_blank)
            .ok_or(ConfigError::MissingCredential {
                field: "password",
                env_var: PASSWORD_ENV,
            })?;

        Ok(Credentials {
            cluster_id,
            discovery_token,
            password,
            secrets_dir,
            source: self.source,
        })
    }
}

fn not_blank(secret: &SecretString) -> bool {
    !secret.expose_secret().trim().is_empty()
}

/// Resolve credentials from `VIRIDIAN_SECRETS_DIR` and either `config.yaml`
/// or the credential environment variables.
pub fn resolve_from_env() -> Result<Credentials, ConfigError> {
    ConfigLoader::new().from_env()?.build()
}
