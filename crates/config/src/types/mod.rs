//! Configuration type definitions for Viridian connections.
//!
//! Responsibilities:
//! - Define the resolved credential tuple and where it came from.
//! - Define the client configuration model that credentials are applied to.
//!
//! Does NOT handle:
//! - Loading credentials from files or environment variables (see `loader` module).
//! - Validating key material (see `connect` module).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

mod client;
mod credentials;

pub use client::{ClientConfig, CloudConfig, DEFAULT_CLUSTER_NAME, NetworkConfig, SslConfig};
pub use credentials::{CredentialSource, Credentials};
