//! Centralized constants for the Viridian connection workspace.
//!
//! Environment variable names, file names inside the secrets directory, and
//! the property keys written onto a client configuration live here so the CLI
//! and the library agree on them.

// =============================================================================
// Environment Variables
// =============================================================================

/// Directory holding `client.keystore`, `client.truststore` and optionally `config.yaml`.
pub const SECRETS_DIR_ENV: &str = "VIRIDIAN_SECRETS_DIR";

/// Name of the target cluster within the Viridian account.
pub const CLUSTER_ID_ENV: &str = "VIRIDIAN_CLUSTER_ID";

/// Password protecting both the keystore and the truststore.
pub const PASSWORD_ENV: &str = "VIRIDIAN_PASSWORD";

/// Discovery token for the targeted cluster.
pub const DISCOVERY_TOKEN_ENV: &str = "VIRIDIAN_DISCOVERY_TOKEN";

/// Set to `1` or `true` to skip `.env` loading.
pub const DOTENV_DISABLED_ENV: &str = "DOTENV_DISABLED";

// =============================================================================
// Secrets Directory Layout
// =============================================================================

/// Optional credentials file; when present it replaces the three credential variables.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

pub const KEYSTORE_FILE_NAME: &str = "client.keystore";

pub const TRUSTSTORE_FILE_NAME: &str = "client.truststore";

// =============================================================================
// Client Configuration Keys
// =============================================================================

pub const KEYSTORE_PROPERTY: &str = "javax.net.ssl.keyStore";
pub const KEYSTORE_PASSWORD_PROPERTY: &str = "javax.net.ssl.keyStorePassword";
pub const TRUSTSTORE_PROPERTY: &str = "javax.net.ssl.trustStore";
pub const TRUSTSTORE_PASSWORD_PROPERTY: &str = "javax.net.ssl.trustStorePassword";

/// Client property naming the cloud discovery endpoint.
pub const CLOUD_URL_PROPERTY: &str = "hazelcast.client.cloud.url";

/// Well-known Viridian discovery endpoint.
pub const VIRIDIAN_CLOUD_URL: &str = "https://api.viridian.hazelcast.com";
