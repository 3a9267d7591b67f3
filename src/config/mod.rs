//! Configuration layer for the `opslevel-notify` command.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`Event`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! The integration id has no default: it comes from `--integration` or from
//! the `[integrations]` entry matching the event kind.
//!
//! # What is not checked here
//!
//! Event fields (`--service`, `--status`, ...) are passed through as given.
//! Their contracts belong to the request types and are enforced by the
//! client before anything is sent, so a bad `--status` surfaces as a
//! validation error rather than a configuration error.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{CheckArgs, Cli, Command, DeployArgs, PayloadArgs};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{Event, ValidatedConfig, write_default_config};
