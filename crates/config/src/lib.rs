//! Viridian connection configuration.
//!
//! This crate resolves the credentials needed to reach a Viridian (hosted
//! Hazelcast) cluster from a secrets directory's `config.yaml` or from
//! `VIRIDIAN_*` environment variables, checks the key material, and applies
//! TLS and cloud-discovery settings to a caller-owned [`ClientConfig`].
//!
//! ```rust,ignore
//! let mut client_config = ClientConfig::new();
//! if viridian_config::config_present() {
//!     viridian_config::configure_from_env(&mut client_config)?;
//! }
//! ```

mod connect;
pub mod constants;
mod loader;
pub mod types;

pub use connect::{KeyMaterial, check_key_material, configure, configure_from_env};
pub use loader::{
    ConfigError, ConfigLoader, MalformedReason, PreconditionCheck, config_present,
    env_var_or_none, require_env, resolve_from_env,
};
pub use types::{
    ClientConfig, CloudConfig, CredentialSource, Credentials, NetworkConfig, SslConfig,
};
