//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use viridian_config::ConfigError;

/// Structured exit codes for viridian-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// No secrets directory or a required credential variable is unset.
    ///
    /// Scripts should export the missing variable.
    NotConfigured = 2,

    /// `config.yaml` exists but cannot be read or is malformed.
    InvalidConfigFile = 3,

    /// The secrets directory or a key store is missing or unreadable.
    KeyMaterialUnavailable = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingEnvVar(_) | ConfigError::MissingCredential { .. } => {
                ExitCode::NotConfigured
            }
            ConfigError::ConfigFileRead { .. } | ConfigError::MalformedConfigFile { .. } => {
                ExitCode::InvalidConfigFile
            }
            ConfigError::Precondition { .. } => ExitCode::KeyMaterialUnavailable,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for extracting exit codes from anyhow errors.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
