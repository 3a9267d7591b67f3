//! opslevel-notify: report check, deploy and payload events to OpsLevel.
//!
//! A client library for the OpsLevel integration webhooks. Requests are
//! validated locally, sent as a single JSON POST, and the response status
//! is mapped onto a small closed set of errors.
//!
//! See [`integration::IntegrationClient`] for the entry point.

pub mod config;
pub mod integration;
pub mod time;
pub mod transport;
pub mod validate;
