//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::defaults;

/// opslevel-notify: report events to OpsLevel integrations
///
/// Sends one check, deploy or payload event to an OpsLevel integration
/// webhook and exits. Nothing is retried.
#[derive(Debug, Parser)]
#[command(name = "opslevel-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Event to send
    #[command(subcommand)]
    pub command: Command,

    /// OpsLevel API base URL
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (no timeout unless set)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for opslevel-notify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report a check result
    Check(CheckArgs),

    /// Report a deploy
    Deploy(DeployArgs),

    /// Send arbitrary JSON to a payload check
    Payload(PayloadArgs),

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Arguments of the `check` subcommand.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Integration id (falls back to integrations.check in the config file)
    #[arg(long)]
    pub integration: Option<String>,

    /// Service alias
    #[arg(long)]
    pub service: String,

    /// Check name
    #[arg(long)]
    pub check: String,

    /// Check result: passed or failed
    #[arg(long)]
    pub status: String,

    /// Free-text message shown with the result
    #[arg(long)]
    pub message: Option<String>,
}

/// Arguments of the `deploy` subcommand.
#[derive(Debug, Args)]
pub struct DeployArgs {
    /// Integration id (falls back to integrations.deploy in the config file)
    #[arg(long)]
    pub integration: Option<String>,

    /// Service alias
    #[arg(long)]
    pub service: String,

    /// Email of the person or bot deploying
    #[arg(long = "deployer-email")]
    pub deployer_email: String,

    /// Name of the person or bot deploying
    #[arg(long = "deployer-name")]
    pub deployer_name: Option<String>,

    /// Deploy description
    #[arg(long)]
    pub description: String,

    /// Deploy time in RFC 3339 (defaults to now)
    #[arg(long = "deployed-at", value_name = "RFC3339")]
    pub deployed_at: Option<String>,

    /// Environment deployed to
    #[arg(long)]
    pub environment: Option<String>,

    /// Link to the deploy
    #[arg(long = "deploy-url")]
    pub deploy_url: Option<String>,

    /// Deploy number
    #[arg(long = "deploy-number")]
    pub deploy_number: Option<String>,

    /// Id used by OpsLevel to drop duplicate deliveries
    #[arg(long = "dedup-id")]
    pub dedup_id: Option<String>,

    /// Commit SHA
    #[arg(long = "commit-sha")]
    pub commit_sha: Option<String>,

    /// Commit message
    #[arg(long = "commit-message")]
    pub commit_message: Option<String>,

    /// Commit branch
    #[arg(long = "commit-branch")]
    pub commit_branch: Option<String>,

    /// Commit author name
    #[arg(long = "commit-author-name")]
    pub commit_author_name: Option<String>,

    /// Commit author email
    #[arg(long = "commit-author-email")]
    pub commit_author_email: Option<String>,

    /// Commit time in RFC 3339
    #[arg(long = "commit-date", value_name = "RFC3339")]
    pub commit_date: Option<String>,

    /// Commit authoring time in RFC 3339
    #[arg(long = "commit-authoring-date", value_name = "RFC3339")]
    pub commit_authoring_date: Option<String>,

    /// Commit committer name
    #[arg(long = "commit-committer-name")]
    pub commit_committer_name: Option<String>,

    /// Commit committer email
    #[arg(long = "commit-committer-email")]
    pub commit_committer_email: Option<String>,
}

/// Arguments of the `payload` subcommand.
#[derive(Debug, Args)]
pub struct PayloadArgs {
    /// Integration id (falls back to integrations.payload in the config file)
    #[arg(long)]
    pub integration: Option<String>,

    /// Service alias
    #[arg(long)]
    pub service: String,

    /// Check name
    #[arg(long)]
    pub check: String,

    /// Payload as inline JSON
    #[arg(long, value_name = "JSON", conflicts_with = "data_file", required_unless_present = "data_file")]
    pub data: Option<String>,

    /// Payload read from a JSON file
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error on failure.
    ///
    /// # Errors
    ///
    /// Returns the clap error for missing or conflicting arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
