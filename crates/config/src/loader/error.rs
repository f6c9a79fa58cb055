//! Error types for credential resolution and client configuration.
//!
//! Responsibilities:
//! - Define error variants for every resolution and precondition failure.
//! - Carry the offending variable name or path so messages are actionable.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - Config file errors always carry the absolute path of the file.
//! - No variant ever includes a secret value or raw `.env` content.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving credentials or applying them.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required environment variable ({0}) was not provided")]
    MissingEnvVar(String),

    #[error("No {field} configured. Set {env_var} or provide it explicitly.")]
    MissingCredential {
        field: &'static str,
        env_var: &'static str,
    },

    #[error("Failed to read config file at \"{path}\": {source}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config file at \"{path}\" does not have the expected format: {reason}")]
    MalformedConfigFile {
        path: PathBuf,
        reason: MalformedReason,
    },

    #[error("Could not initialize Viridian connection: {path} {check}")]
    Precondition {
        path: PathBuf,
        check: PreconditionCheck,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is reported, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

/// Why a present `config.yaml` was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The document is not valid YAML or has the wrong shape.
    Unparsable(String),
    /// A top-level section (`cluster` or `ssl`) is absent.
    MissingSection(&'static str),
    /// A required field is absent, null or blank. Holds the dotted key.
    MissingField(&'static str),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparsable(message) => write!(f, "could not be parsed ({message})"),
            Self::MissingSection(section) => write!(f, "missing `{section}` section"),
            Self::MissingField(field) => write!(f, "missing `{field}`"),
        }
    }
}

/// The filesystem check that failed before a client configuration was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionCheck {
    NotADirectory,
    NotAFile,
    NotReadable,
    /// The path cannot be written into a client property unchanged.
    NotUtf8,
}

impl fmt::Display for PreconditionCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotADirectory => "does not exist or is not a directory",
            Self::NotAFile => "was not found or is not a regular file",
            Self::NotReadable => "could not be read",
            Self::NotUtf8 => "is not a valid UTF-8 path",
        })
    }
}
