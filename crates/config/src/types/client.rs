//! Client configuration model mutated by the resolver.
//!
//! Responsibilities:
//! - Model the parts of a Hazelcast client configuration that Viridian
//!   connections touch: TLS properties, cloud discovery, cluster name and the
//!   free-form property map.
//! - Render the configuration as a `hazelcast-client` YAML document.
//!
//! Does NOT handle:
//! - Opening connections or performing TLS handshakes.
//! - Deciding what values to set (see connect.rs).
//!
//! Invariants:
//! - The caller owns a `ClientConfig`; the resolver only borrows it mutably.
//! - Password properties are redacted in `Debug` output and masked when
//!   rendering unless secrets are explicitly revealed.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Cluster name a fresh client configuration starts with.
pub const DEFAULT_CLUSTER_NAME: &str = "dev";

const MASK: &str = "********";

/// Top-level client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    cluster_name: String,
    network: NetworkConfig,
    properties: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cluster_name: DEFAULT_CLUSTER_NAME.to_string(),
            network: NetworkConfig::default(),
            properties: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn set_cluster_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.cluster_name = name.into();
        self
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut NetworkConfig {
        &mut self.network
    }

    /// Look up a client property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Render as a `hazelcast-client` YAML document.
    ///
    /// Passwords and the discovery token are masked unless `reveal_secrets` is set.
    pub fn to_yaml(&self, reveal_secrets: bool) -> Result<String, serde_yaml::Error> {
        let document = ClientDocument {
            client: ClientView {
                cluster_name: &self.cluster_name,
                network: NetworkView {
                    ssl: SslView {
                        enabled: self.network.ssl.enabled,
                        properties: self
                            .network
                            .ssl
                            .properties
                            .iter()
                            .map(|(key, value)| {
                                let value = if !reveal_secrets && is_password_key(key) {
                                    MASK
                                } else {
                                    value.as_str()
                                };
                                (key.as_str(), value)
                            })
                            .collect(),
                    },
                    cloud: CloudView {
                        enabled: self.network.cloud.enabled,
                        discovery_token: self.network.cloud.discovery_token.as_ref().map(|t| {
                            if reveal_secrets {
                                t.expose_secret()
                            } else {
                                MASK
                            }
                        }),
                    },
                },
                properties: &self.properties,
            },
        };
        serde_yaml::to_string(&document)
    }
}

/// Network section of the client configuration.
#[derive(Debug, Clone, Default)]
pub struct NetworkConfig {
    ssl: SslConfig,
    cloud: CloudConfig,
}

impl NetworkConfig {
    pub fn ssl_config(&self) -> &SslConfig {
        &self.ssl
    }

    /// Replace the TLS section wholesale.
    pub fn set_ssl_config(&mut self, ssl: SslConfig) -> &mut Self {
        self.ssl = ssl;
        self
    }

    pub fn cloud_config(&self) -> &CloudConfig {
        &self.cloud
    }

    pub fn cloud_config_mut(&mut self) -> &mut CloudConfig {
        &mut self.cloud
    }
}

/// TLS settings expressed as string properties.
#[derive(Clone, Default)]
pub struct SslConfig {
    enabled: bool,
    properties: BTreeMap<String, String>,
}

impl SslConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}

impl fmt::Debug for SslConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted: BTreeMap<&str, &str> = self
            .properties
            .iter()
            .map(|(key, value)| {
                if is_password_key(key) {
                    (key.as_str(), "[REDACTED]")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("SslConfig")
            .field("enabled", &self.enabled)
            .field("properties", &redacted)
            .finish()
    }
}

/// Cloud discovery settings.
#[derive(Debug, Clone, Default)]
pub struct CloudConfig {
    enabled: bool,
    discovery_token: Option<SecretString>,
}

impl CloudConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = enabled;
        self
    }

    pub fn discovery_token(&self) -> Option<&SecretString> {
        self.discovery_token.as_ref()
    }

    pub fn set_discovery_token(&mut self, token: SecretString) -> &mut Self {
        self.discovery_token = Some(token);
        self
    }
}

fn is_password_key(key: &str) -> bool {
    key.to_ascii_lowercase().contains("password")
}

#[derive(Serialize)]
struct ClientDocument<'a> {
    #[serde(rename = "hazelcast-client")]
    client: ClientView<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct ClientView<'a> {
    cluster_name: &'a str,
    network: NetworkView<'a>,
    #[serde(skip_serializing_if = "no_properties")]
    properties: &'a BTreeMap<String, String>,
}

fn no_properties(properties: &&BTreeMap<String, String>) -> bool {
    properties.is_empty()
}

#[derive(Serialize)]
struct NetworkView<'a> {
    ssl: SslView<'a>,
    #[serde(rename = "hazelcast-cloud")]
    cloud: CloudView<'a>,
}

#[derive(Serialize)]
struct SslView<'a> {
    enabled: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<&'a str, &'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct CloudView<'a> {
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    discovery_token: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> ClientConfig {
        let mut props = BTreeMap::new();
        props.insert("javax.net.ssl.keyStore".to_string(), "/s/client.keystore".to_string());
        props.insert("javax.net.ssl.keyStorePassword".to_string(), "pw-123".to_string());

        let mut config = ClientConfig::new();
        config
            .network_mut()
            .set_ssl_config(SslConfig::new().with_enabled(true).with_properties(props));
        config
            .network_mut()
            .cloud_config_mut()
            .set_enabled(true)
            .set_discovery_token(SecretString::new("tok-456".to_string().into()));
        config.set_cluster_name("pr-1").set_property("a.b", "c");
        config
    }

    #[test]
    fn test_default_cluster_name() {
        assert_eq!(ClientConfig::new().cluster_name(), DEFAULT_CLUSTER_NAME);
        assert!(!ClientConfig::new().network().ssl_config().is_enabled());
        assert!(!ClientConfig::new().network().cloud_config().is_enabled());
    }

    #[test]
    fn test_debug_redacts_passwords_and_token() {
        let debug_output = format!("{:?}", configured());
        assert!(debug_output.contains("/s/client.keystore"));
        assert!(!debug_output.contains("pw-123"));
        assert!(!debug_output.contains("tok-456"));
    }

    #[test]
    fn test_to_yaml_masks_secrets_by_default() {
        let yaml = configured().to_yaml(false).unwrap();
        assert!(yaml.starts_with("hazelcast-client:"));
        assert!(yaml.contains("cluster-name: pr-1"));
        assert!(yaml.contains("hazelcast-cloud:"));
        assert!(!yaml.contains("pw-123"));
        assert!(!yaml.contains("tok-456"));
        assert!(yaml.contains(MASK));
    }

    #[test]
    fn test_to_yaml_reveals_secrets_on_request() {
        let yaml = configured().to_yaml(true).unwrap();
        assert!(yaml.contains("pw-123"));
        assert!(yaml.contains("discovery-token: tok-456"));
    }
}
