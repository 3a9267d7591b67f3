//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required value that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid base URL provided.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid duration value (zero or too large).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A timestamp that is not RFC 3339.
    #[error("Invalid timestamp '{value}' for {field}: {source}")]
    InvalidTimestamp {
        /// Name of the field
        field: &'static str,
        /// The rejected value
        value: String,
        /// Underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// Payload data that is not JSON.
    #[error("Invalid payload data: {0}")]
    InvalidData(#[source] serde_json::Error),

    /// Failed to read the payload data file.
    #[error("Failed to read data file '{}': {source}", path.display())]
    DataFileRead {
        /// Path to the data file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The integration id for the selected event kind.
    pub const INTEGRATION: &str = "integration";
    /// The event subcommand.
    pub const COMMAND: &str = "command";
    /// The request timeout.
    pub const TIMEOUT: &str = "timeout";
    /// The deploy timestamp.
    pub const DEPLOYED_AT: &str = "deployed_at";
    /// The commit timestamp.
    pub const COMMIT_DATE: &str = "commit_date";
    /// The commit authoring timestamp.
    pub const COMMIT_AUTHORING_DATE: &str = "commit_authoring_date";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
