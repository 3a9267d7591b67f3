//! Application execution logic.
//!
//! This module builds the integration client from the validated
//! configuration and sends the one event an invocation carries.

use thiserror::Error;

use opslevel_notify::config::{Event, ValidatedConfig};
use opslevel_notify::integration::{IntegrationClient, IntegrationError};
use opslevel_notify::transport::{HttpClient, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The integration call failed.
    #[error("{kind} event failed: {source}")]
    Integration {
        /// Event kind that was being sent
        kind: &'static str,
        /// Underlying integration error
        #[source]
        source: IntegrationError,
    },
}

impl RunError {
    /// Returns true if the event was rejected before anything was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        match self {
            Self::ClientBuild(_) => true,
            Self::Integration { source, .. } => source.is_local(),
        }
    }
}

/// Sends the configured event once.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the integration
/// call fails for any reason. Nothing is retried.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = create_client(&config)?;

    send_event(&client, &config.event, &config.integration_id).await
}

/// Creates the integration client from configuration.
fn create_client(
    config: &ValidatedConfig,
) -> Result<IntegrationClient<ReqwestClient>, RunError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder.build().map_err(RunError::ClientBuild)?;

    Ok(
        IntegrationClient::with_transport(ReqwestClient::from_client(http))
            .with_base_url(config.base_url.clone()),
    )
}

/// Dispatches `event` to the matching integration endpoint.
async fn send_event<H: HttpClient>(
    client: &IntegrationClient<H>,
    event: &Event,
    integration_id: &str,
) -> Result<(), RunError> {
    let kind = event.kind();

    let result = match event {
        Event::Check(request) => client.check(request, integration_id).await,
        Event::Deploy(request) => client.deploy(request, integration_id).await,
        Event::Payload(request) => client.payload(request, integration_id).await,
    };

    match result {
        Ok(()) => {
            tracing::info!("{kind} event accepted");
            Ok(())
        }
        Err(source) => Err(RunError::Integration {
            kind: kind.as_str(),
            source,
        }),
    }
}
