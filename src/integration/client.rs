//! The integration client and its request envelope.

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::transport::{HttpClient, HttpError, HttpRequest, ReqwestClient};
use crate::validate::{Validate, validate};

use super::{Acknowledgment, IntegrationError, classify};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://app.opslevel.com";

/// The integration endpoint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrationKind {
    Check,
    Deploy,
    Payload,
}

impl IntegrationKind {
    /// Path segment under `/integrations/`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Deploy => "deploy",
            Self::Payload => "payload",
        }
    }
}

impl fmt::Display for IntegrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for the OpsLevel integration webhooks.
///
/// Holds the base URL and the transport, both fixed at construction. Each
/// operation makes at most one request and keeps no state between calls, so
/// a client can be shared freely across tasks.
///
/// # Type Parameters
///
/// - `H`: the transport (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use opslevel_notify::integration::{CheckRequest, IntegrationClient};
///
/// # async fn example() -> Result<(), opslevel_notify::integration::IntegrationError> {
/// let client = IntegrationClient::new();
/// let request = CheckRequest::new("my_service", "my_check", "passed");
/// client.check(&request, "integration-id").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntegrationClient<H = ReqwestClient> {
    base_url: Url,
    transport: H,
}

impl IntegrationClient<ReqwestClient> {
    /// Creates a client for [`DEFAULT_BASE_URL`] over a default reqwest transport.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(ReqwestClient::new())
    }
}

impl Default for IntegrationClient<ReqwestClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> IntegrationClient<H> {
    /// Creates a client for [`DEFAULT_BASE_URL`] over the given transport.
    #[must_use]
    pub fn with_transport(transport: H) -> Self {
        Self {
            base_url: default_base_url(),
            transport,
        }
    }

    /// Replaces the base URL.
    ///
    /// A path prefix on the base URL is kept; endpoint segments are appended
    /// after it.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.transport
    }

    /// Builds `<base>/integrations/<kind>/<integration_id>`.
    ///
    /// The integration id is percent-encoded as a single path segment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the base URL cannot carry a path
    /// (for example a `mailto:` URL), or if the id is empty, `.` or `..`,
    /// which would not survive as a segment of their own.
    pub fn endpoint_url(
        &self,
        kind: IntegrationKind,
        integration_id: &str,
    ) -> Result<Url, HttpError> {
        if matches!(integration_id, "" | "." | "..") {
            return Err(HttpError::InvalidUrl(format!(
                "integration id {integration_id:?} is not a usable path segment"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| HttpError::InvalidUrl(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["integrations", kind.as_str(), integration_id]);
        Ok(url)
    }
}

fn default_base_url() -> Url {
    // Parsing a fixed literal; `new_uses_default_base_url` pins it.
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

impl<H: HttpClient> IntegrationClient<H> {
    /// Runs the full pipeline for one request.
    ///
    /// Validate, encode, POST, classify, decode. Any failure short-circuits;
    /// a validation or encode failure means no request was made.
    pub(super) async fn submit<R>(
        &self,
        kind: IntegrationKind,
        request: &R,
        integration_id: &str,
    ) -> Result<(), IntegrationError>
    where
        R: Validate + Serialize + Sync,
    {
        validate(request)?;

        let body = serde_json::to_vec(request).map_err(IntegrationError::Encode)?;
        let url = self.endpoint_url(kind, integration_id)?;

        tracing::debug!(%kind, %url, "Sending request to OpsLevel integration");

        let response = self
            .transport
            .request(HttpRequest::post(url).with_json_body(body))
            .await
            .inspect_err(|e| tracing::debug!(%kind, "Failed to send request to OpsLevel: {e}"))?;

        tracing::debug!(%kind, status = response.status.as_u16(), "Received response");

        classify(&response)?;

        let ack = Acknowledgment::decode(&response.body)
            .inspect_err(|e| tracing::debug!(%kind, "Failed to decode response from OpsLevel: {e}"))?;

        tracing::debug!(%kind, result = ?ack.result, "Event accepted");
        Ok(())
    }
}
