//! Resolved Viridian credentials.
//!
//! Responsibilities:
//! - Hold the normalized credential tuple produced by the loader.
//! - Record where the credentials came from for diagnostics.
//!
//! Invariants:
//! - All fields are non-empty once produced by `ConfigLoader::build()`.
//! - The discovery token and password are `SecretString`s and never appear in `Debug`.

use secrecy::SecretString;
use std::fmt;
use std::path::PathBuf;

/// Where a set of credentials was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Read from `config.yaml` inside the secrets directory.
    ConfigFile(PathBuf),
    /// Read from the `VIRIDIAN_*` environment variables.
    Environment,
    /// Supplied directly through the loader's builder methods.
    Explicit,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFile(path) => write!(f, "config file ({})", path.display()),
            Self::Environment => f.write_str("environment"),
            Self::Explicit => f.write_str("explicit"),
        }
    }
}

/// Credentials needed to connect a client to a Viridian cluster.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Name of the target cluster; becomes the client's cluster name.
    pub cluster_id: String,
    /// Token used by cloud discovery to locate the cluster.
    pub discovery_token: SecretString,
    /// Password for both `client.keystore` and `client.truststore`.
    pub password: SecretString,
    /// Directory holding the key material.
    pub secrets_dir: PathBuf,
    pub source: CredentialSource,
}
