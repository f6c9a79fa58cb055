//! CLI command implementations.

pub mod doctor;
pub mod render;
pub mod resolve;
pub mod status;

use std::path::PathBuf;
use viridian_config::{ConfigError, ConfigLoader, Credentials};

/// Explicit values from the command line, layered over resolved credentials.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub secrets_dir: Option<PathBuf>,
    pub cluster_id: Option<String>,
    pub discovery_token: Option<String>,
    pub password: Option<String>,
}

impl Overrides {
    /// A loader pointed at the overriding secrets directory, if any.
    pub fn loader(&self) -> ConfigLoader {
        match &self.secrets_dir {
            Some(dir) => ConfigLoader::new().with_secrets_dir(dir.clone()),
            None => ConfigLoader::new(),
        }
    }

    /// Resolve credentials, then apply the explicit credential overrides.
    pub fn resolve(&self) -> Result<Credentials, ConfigError> {
        let mut loader = self.loader().from_env()?;
        if let Some(ref cluster_id) = self.cluster_id {
            loader = loader.with_cluster_id(cluster_id.clone());
        }
        if let Some(ref token) = self.discovery_token {
            loader = loader.with_discovery_token(token.clone());
        }
        if let Some(ref password) = self.password {
            loader = loader.with_password(password.clone());
        }
        loader.build()
    }
}
