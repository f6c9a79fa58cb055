//! Environment variable helpers for credential resolution.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Fail fast on required variables with an error naming the variable.
//! - Report whether the Viridian secrets directory is configured at all.
//!
//! Does NOT handle:
//! - Reading `config.yaml` (see file.rs).
//! - Deciding between the file and the variables (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are exactly what the environment holds; passwords and
//!   tokens may legitimately carry surrounding whitespace.

use super::error::ConfigError;
use crate::constants::SECRETS_DIR_ENV;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// A present value is returned unchanged.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// Read a required environment variable, failing with [`ConfigError::MissingEnvVar`].
pub fn require_env(key: &str) -> Result<String, ConfigError> {
    env_var_or_none(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Returns true if `VIRIDIAN_SECRETS_DIR` is set.
///
/// Callers use this to decide whether Viridian resolution applies before
/// attempting it.
pub fn config_present() -> bool {
    env_var_or_none(SECRETS_DIR_ENV).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_VIRIDIAN_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none());
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(
                env_var_or_none(key1).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        let key2 = "_VIRIDIAN_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key2), Some(" test-value ".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_require_env_names_missing_variable() {
        temp_env::with_vars([("_VIRIDIAN_TEST_REQUIRED", None::<&str>)], || {
            let err = require_env("_VIRIDIAN_TEST_REQUIRED").unwrap_err();
            assert!(
                matches!(err, ConfigError::MissingEnvVar(ref name) if name == "_VIRIDIAN_TEST_REQUIRED")
            );
        });
    }

    #[test]
    #[serial]
    fn test_require_env_returns_value() {
        temp_env::with_vars([("_VIRIDIAN_TEST_REQUIRED", Some("value"))], || {
            assert_eq!(require_env("_VIRIDIAN_TEST_REQUIRED").unwrap(), "value");
        });
    }

    #[test]
    #[serial]
    fn test_config_present_tracks_secrets_dir() {
        temp_env::with_vars([(SECRETS_DIR_ENV, None::<&str>)], || {
            assert!(!config_present());
        });
        temp_env::with_vars([(SECRETS_DIR_ENV, Some("  "))], || {
            assert!(!config_present(), "Blank secrets dir should not count");
        });
        temp_env::with_vars([(SECRETS_DIR_ENV, Some("/secrets"))], || {
            assert!(config_present());
        });
    }
}
