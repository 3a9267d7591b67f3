//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use url::Url;

use crate::integration::{
    CheckRequest, Commit, DeployRequest, Deployer, IntegrationKind, PayloadRequest,
};
use crate::time::{Clock, SystemClock};

use super::cli::{CheckArgs, Cli, Command, DeployArgs, PayloadArgs};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// The event an invocation sends.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Check(CheckRequest),
    Deploy(DeployRequest),
    Payload(PayloadRequest<serde_json::Value>),
}

impl Event {
    /// The integration endpoint this event goes to.
    #[must_use]
    pub const fn kind(&self) -> IntegrationKind {
        match self {
            Self::Check(_) => IntegrationKind::Check,
            Self::Deploy(_) => IntegrationKind::Deploy,
            Self::Payload(_) => IntegrationKind::Payload,
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// OpsLevel API base URL
    pub base_url: Url,

    /// Request timeout; `None` leaves the transport without one
    pub timeout: Option<Duration>,

    /// Integration id the event is sent to
    pub integration_id: String,

    /// The event to send
    pub event: Event,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeout = self
            .timeout
            .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()));

        // The integration id acts as a credential and is left out.
        write!(
            f,
            "Config {{ base_url: {}, event: {}, timeout: {} }}",
            self.base_url,
            self.event.kind(),
            timeout,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values. A deploy
    /// without `--deployed-at` is stamped with the system time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The subcommand is not an event (`init`)
    /// - No integration id is available for the event kind
    /// - The base URL is invalid
    /// - The timeout is zero or too large
    /// - `--deployed-at` is not RFC 3339
    /// - Payload data is unreadable or not JSON
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        Self::from_raw_with_clock(cli, toml, &SystemClock)
    }

    /// Same as [`ValidatedConfig::from_raw`], reading the current time from `clock`.
    ///
    /// # Errors
    ///
    /// See [`ValidatedConfig::from_raw`].
    pub fn from_raw_with_clock(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        clock: &dyn Clock,
    ) -> Result<Self, ConfigError> {
        let (event, cli_integration) = Self::resolve_event(&cli.command, clock)?;

        let integration_id = Self::resolve_integration(event.kind(), cli_integration, toml)?;

        let base_url = Self::resolve_base_url(cli, toml)?;

        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            base_url,
            timeout,
            integration_id,
            event,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_event<'a>(
        command: &'a Command,
        clock: &dyn Clock,
    ) -> Result<(Event, Option<&'a str>), ConfigError> {
        match command {
            Command::Check(args) => Ok((
                Event::Check(build_check(args)),
                args.integration.as_deref(),
            )),
            Command::Deploy(args) => Ok((
                Event::Deploy(build_deploy(args, clock)?),
                args.integration.as_deref(),
            )),
            Command::Payload(args) => Ok((
                Event::Payload(build_payload(args)?),
                args.integration.as_deref(),
            )),
            Command::Init { .. } => Err(ConfigError::missing(
                field::COMMAND,
                "Use one of the check, deploy or payload subcommands",
            )),
        }
    }

    fn resolve_integration(
        kind: IntegrationKind,
        cli: Option<&str>,
        toml: Option<&TomlConfig>,
    ) -> Result<String, ConfigError> {
        // CLI takes precedence
        cli.or_else(|| toml.and_then(|t| t.integrations.for_kind(kind)))
            .filter(|id| !id.trim().is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| {
                ConfigError::missing(
                    field::INTEGRATION,
                    "Use --integration or set the id under [integrations] in config file",
                )
            })
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.base_url.as_deref()))
            .unwrap_or(defaults::BASE_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "cannot be used as a base URL".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_timeout(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Duration>, ConfigError> {
        // Priority: CLI explicit > TOML > none
        let Some(seconds) = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.client.timeout))
        else {
            return Ok(None);
        };

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: "must be greater than 0".to_string(),
            });
        }

        if seconds > defaults::MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: format!("must be at most {}s", defaults::MAX_TIMEOUT_SECS),
            });
        }

        Ok(Some(Duration::from_secs(seconds)))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Event builders

fn build_check(args: &CheckArgs) -> CheckRequest {
    CheckRequest {
        service: args.service.clone(),
        check: args.check.clone(),
        status: args.status.clone(),
        message: args.message.clone(),
    }
}

fn build_deploy(args: &DeployArgs, clock: &dyn Clock) -> Result<DeployRequest, ConfigError> {
    let deployed_at = match args.deployed_at.as_deref() {
        Some(value) => parse_timestamp(field::DEPLOYED_AT, value)?,
        None => clock.now(),
    };

    let commit = Commit {
        sha: args.commit_sha.clone(),
        message: args.commit_message.clone(),
        branch: args.commit_branch.clone(),
        date: parse_optional_timestamp(field::COMMIT_DATE, args.commit_date.as_deref())?,
        committer_name: args.commit_committer_name.clone(),
        committer_email: args.commit_committer_email.clone(),
        author_name: args.commit_author_name.clone(),
        author_email: args.commit_author_email.clone(),
        authoring_date: parse_optional_timestamp(
            field::COMMIT_AUTHORING_DATE,
            args.commit_authoring_date.as_deref(),
        )?,
    };

    Ok(DeployRequest {
        service: args.service.clone(),
        deployer: Deployer {
            email: args.deployer_email.clone(),
            name: args.deployer_name.clone(),
        },
        deployed_at: Some(deployed_at),
        description: args.description.clone(),
        environment: args.environment.clone(),
        deploy_url: args.deploy_url.clone(),
        deploy_number: args.deploy_number.clone(),
        commit: (!commit.is_empty()).then_some(commit),
        dedup_id: args.dedup_id.clone(),
    })
}

fn build_payload(args: &PayloadArgs) -> Result<PayloadRequest<serde_json::Value>, ConfigError> {
    let raw = match (&args.data, &args.data_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => read_data_file(path)?,
        (None, None) => String::new(),
    };

    let data = if raw.trim().is_empty() {
        None
    } else {
        Some(serde_json::from_str(&raw).map_err(ConfigError::InvalidData)?)
    };

    Ok(PayloadRequest {
        service: args.service.clone(),
        check: args.check.clone(),
        data,
    })
}

// Helper functions

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, ConfigError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ConfigError::InvalidTimestamp {
            field,
            value: value.to_string(),
            source: e,
        })
}

fn parse_optional_timestamp(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ConfigError> {
    value.map(|v| parse_timestamp(field, v)).transpose()
}

fn read_data_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::DataFileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
