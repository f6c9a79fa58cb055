//! `config.yaml` loading for credential resolution.
//!
//! Responsibilities:
//! - Read and parse the optional `config.yaml` from the secrets directory.
//! - Validate that the `cluster` and `ssl` sections carry the three credentials.
//!
//! Does NOT handle:
//! - Deciding whether the file applies (see builder.rs).
//! - Validating key material files (see connect.rs).
//!
//! Invariants:
//! - Sections and fields are checked in a fixed order so the first missing
//!   item is the one reported.
//! - Null, empty and whitespace-only values are treated as missing; any other
//!   value is kept exactly as written.
//! - Numbers and booleans are accepted in their YAML spelling, so an
//!   all-digit password needs no quoting. Quote values with leading zeros.
//! - Unknown keys are ignored.

use secrecy::SecretString;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, MalformedReason};

/// Credentials read from a well-formed `config.yaml`.
#[derive(Debug, Clone)]
pub(crate) struct FileCredentials {
    pub cluster_id: String,
    pub discovery_token: SecretString,
    pub password: SecretString,
}

/// On-disk shape of `config.yaml`. Every level is optional so missing items
/// can be reported by name rather than as a generic serde error.
#[derive(Debug, Default, Deserialize)]
struct RawConfigFile {
    #[serde(default)]
    cluster: Option<RawClusterSection>,
    #[serde(default)]
    ssl: Option<RawSslSection>,
}

#[derive(Debug, Default, Deserialize)]
struct RawClusterSection {
    #[serde(default)]
    name: Option<serde_yaml::Value>,
    #[serde(default, rename = "discovery-token")]
    discovery_token: Option<serde_yaml::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSslSection {
    #[serde(default, rename = "key-password")]
    key_password: Option<serde_yaml::Value>,
}

/// Reads and validates `config.yaml` at `path`.
///
/// I/O failures map to [`ConfigError::ConfigFileRead`]; everything else that
/// is wrong with the document maps to [`ConfigError::MalformedConfigFile`].
pub(crate) fn read_config_file(path: &Path) -> Result<FileCredentials, ConfigError> {
    let path = absolute_path(path);

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ConfigFileRead {
        path: path.clone(),
        source: e,
    })?;

    parse_config_file(&content).map_err(|reason| ConfigError::MalformedConfigFile { path, reason })
}

fn parse_config_file(content: &str) -> Result<FileCredentials, MalformedReason> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| MalformedReason::Unparsable(e.to_string()))?;

    // An empty document parses as null; report it as a missing section.
    let raw = if value.is_null() {
        RawConfigFile::default()
    } else {
        serde_yaml::from_value::<RawConfigFile>(value)
            .map_err(|e| MalformedReason::Unparsable(e.to_string()))?
    };

    let cluster = raw
        .cluster
        .ok_or(MalformedReason::MissingSection("cluster"))?;
    let cluster_id = required_scalar(cluster.name, "cluster.name")?;
    let discovery_token = required_scalar(cluster.discovery_token, "cluster.discovery-token")?;

    let ssl = raw.ssl.ok_or(MalformedReason::MissingSection("ssl"))?;
    let password = required_scalar(ssl.key_password, "ssl.key-password")?;

    Ok(FileCredentials {
        cluster_id,
        discovery_token: SecretString::new(discovery_token.into()),
        password: SecretString::new(password.into()),
    })
}

/// The string form of a scalar field. Blank and null count as missing;
/// sequences and mappings are unparsable.
fn required_scalar(
    value: Option<serde_yaml::Value>,
    field: &'static str,
) -> Result<String, MalformedReason> {
    use serde_yaml::Value;

    let text = match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Tagged(_)) | Some(Value::Sequence(_)) | Some(Value::Mapping(_)) => {
            return Err(MalformedReason::Unparsable(format!(
                "`{field}` must be a plain value"
            )));
        }
    };
    text.filter(|s| !s.trim().is_empty())
        .ok_or(MalformedReason::MissingField(field))
}

fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = "\
cluster:
  name: pr-abc123
  discovery-token: token-xyz
ssl:
  key-password: s3cret
";

    #[test]
    fn test_parse_valid_file() {
        let creds = parse_config_file(VALID).unwrap();
        assert_eq!(creds.cluster_id, "pr-abc123");
        assert_eq!(creds.discovery_token.expose_secret(), "token-xyz");
        assert_eq!(creds.password.expose_secret(), "s3cret");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let content = format!("{VALID}  truststore-password: other\nextra: 1\n");
        assert!(parse_config_file(&content).is_ok());
    }

    #[test]
    fn test_missing_cluster_section() {
        let err = parse_config_file("ssl:\n  key-password: pw\n").unwrap_err();
        assert_eq!(err, MalformedReason::MissingSection("cluster"));
    }

    #[test]
    fn test_missing_ssl_section() {
        let err = parse_config_file("cluster:\n  name: c\n  discovery-token: t\n").unwrap_err();
        assert_eq!(err, MalformedReason::MissingSection("ssl"));
    }

    #[test]
    fn test_null_field_is_missing() {
        let content = "cluster:\n  name: ~\n  discovery-token: t\nssl:\n  key-password: pw\n";
        assert_eq!(
            parse_config_file(content).unwrap_err(),
            MalformedReason::MissingField("cluster.name")
        );
    }

    #[test]
    fn test_blank_field_is_missing() {
        let content = "cluster:\n  name: c\n  discovery-token: '  '\nssl:\n  key-password: pw\n";
        assert_eq!(
            parse_config_file(content).unwrap_err(),
            MalformedReason::MissingField("cluster.discovery-token")
        );
    }

    #[test]
    fn test_values_keep_surrounding_whitespace() {
        let content =
            "cluster:\n  name: c2\n  discovery-token: ' tok2'\nssl:\n  key-password: ' pw2 '\n";
        let creds = parse_config_file(content).unwrap();
        assert_eq!(creds.cluster_id, "c2");
        assert_eq!(creds.discovery_token.expose_secret(), " tok2");
        assert_eq!(creds.password.expose_secret(), " pw2 ");
    }

    #[test]
    fn test_numeric_and_boolean_values_are_accepted() {
        let content = "cluster:\n  name: 42\n  discovery-token: true\nssl:\n  key-password: 123456\n";
        let creds = parse_config_file(content).unwrap();
        assert_eq!(creds.cluster_id, "42");
        assert_eq!(creds.discovery_token.expose_secret(), "true");
        assert_eq!(creds.password.expose_secret(), "123456");
    }

    #[test]
    fn test_sequence_value_is_unparsable() {
        let content = "cluster:\n  name: [a, b]\n  discovery-token: t\nssl:\n  key-password: pw\n";
        assert_eq!(
            parse_config_file(content).unwrap_err(),
            MalformedReason::Unparsable("`cluster.name` must be a plain value".to_string())
        );
    }

    #[test]
    fn test_missing_key_password() {
        let content = "cluster:\n  name: c\n  discovery-token: t\nssl: {}\n";
        assert_eq!(
            parse_config_file(content).unwrap_err(),
            MalformedReason::MissingField("ssl.key-password")
        );
    }

    #[test]
    fn test_empty_document_reports_missing_cluster() {
        assert_eq!(
            parse_config_file("").unwrap_err(),
            MalformedReason::MissingSection("cluster")
        );
    }

    #[test]
    fn test_invalid_yaml_is_unparsable() {
        let err = parse_config_file("cluster: [unclosed").unwrap_err();
        assert!(matches!(err, MalformedReason::Unparsable(_)));
    }

    #[test]
    fn test_non_mapping_document_is_unparsable() {
        let err = parse_config_file("- just\n- a list\n").unwrap_err();
        assert!(matches!(err, MalformedReason::Unparsable(_)));
    }

    #[test]
    fn test_read_config_file_reports_absolute_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "cluster: {}\n").unwrap();

        match read_config_file(&path).unwrap_err() {
            ConfigError::MalformedConfigFile { path: reported, reason } => {
                assert!(reported.is_absolute());
                assert!(reported.ends_with("config.yaml"));
                assert_eq!(reason, MalformedReason::MissingField("cluster.name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_config_file_io_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be read as a string.
        let err = read_config_file(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileRead { .. }));
    }
}
