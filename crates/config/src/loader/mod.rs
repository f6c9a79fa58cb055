//! Credential loader for environment variables and `config.yaml`.
//!
//! Responsibilities:
//! - Resolve Viridian credentials from the secrets directory's `config.yaml`
//!   or from the `VIRIDIAN_*` environment variables.
//! - Provide a builder-pattern `ConfigLoader` so front ends can layer explicit overrides.
//! - Enforce the `DOTENV_DISABLED` gate before loading `.env` files.
//!
//! Does NOT handle:
//! - Validating key material or mutating client configuration (see `connect.rs`).
//!
//! Invariants / Assumptions:
//! - `config.yaml`, when present, is the sole source of the three credentials.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, resolve_from_env};
pub use env::{config_present, env_var_or_none, require_env};
pub use error::{ConfigError, MalformedReason, PreconditionCheck};
