//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use crate::integration::IntegrationKind;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// HTTP client configuration section
    #[serde(default)]
    pub client: ClientSection,

    /// Integration ids per event kind
    #[serde(default)]
    pub integrations: IntegrationsSection,
}

/// HTTP client configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// OpsLevel API base URL
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

/// Integration ids, one per event kind.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationsSection {
    pub check: Option<String>,
    pub deploy: Option<String>,
    pub payload: Option<String>,
}

impl IntegrationsSection {
    /// Returns the configured id for `kind`.
    #[must_use]
    pub fn for_kind(&self, kind: IntegrationKind) -> Option<&str> {
        match kind {
            IntegrationKind::Check => self.check.as_deref(),
            IntegrationKind::Deploy => self.deploy.as_deref(),
            IntegrationKind::Payload => self.payload.as_deref(),
        }
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# opslevel-notify configuration file

[client]
# OpsLevel API base URL (default: https://app.opslevel.com)
# base_url = "https://app.opslevel.com"

# Request timeout in seconds (default: no timeout)
# timeout = 30

[integrations]
# Integration ids used when --integration is not given.
# Find them on the integration's page in OpsLevel.
# check = "00000000-0000-0000-0000-000000000000"
# deploy = "00000000-0000-0000-0000-000000000000"
# payload = "00000000-0000-0000-0000-000000000000"
"#
    .to_string()
}
