//! OpsLevel integration webhooks.
//!
//! This module provides:
//! - The client ([`IntegrationClient`]) and its three operations:
//!   [`IntegrationClient::check`], [`IntegrationClient::deploy`] and
//!   [`IntegrationClient::payload`]
//! - The request bodies ([`CheckRequest`], [`DeployRequest`],
//!   [`PayloadRequest`]) with their field contracts
//! - Response classification ([`classify`]) and the success body
//!   ([`Acknowledgment`])
//! - The error taxonomy ([`IntegrationError`])
//!
//! # Pipeline
//!
//! Every operation runs the same steps and stops at the first failure:
//!
//! 1. validate the request (no I/O)
//! 2. serialize it to JSON
//! 3. POST it to `<base>/integrations/<kind>/<integration_id>`
//! 4. classify the status: 202 succeeds, 422, 400 and everything else fail
//!    with distinct errors
//! 5. decode the acknowledgment body
//!
//! There are no retries. Retrying, if wanted, belongs to the caller.

mod ack;
mod check;
mod classify;
mod client;
mod deploy;
mod error;
mod payload;

#[cfg(test)]
mod test_fixtures;


pub use ack::Acknowledgment;
pub use check::{CHECK_STATUSES, CheckRequest};
pub use classify::classify;
pub use client::{DEFAULT_BASE_URL, IntegrationClient, IntegrationKind};
pub use deploy::{Commit, DeployRequest, Deployer};
pub use error::IntegrationError;
pub use payload::PayloadRequest;
