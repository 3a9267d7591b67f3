//! Error taxonomy for integration calls.

use thiserror::Error;

use crate::transport::HttpError;
use crate::validate::ValidationErrors;

/// Every way a single integration call can fail.
///
/// Status-derived variants are mutually exclusive: a response is classified
/// exactly once. Transport and decode failures are kept apart from them so
/// callers can tell "the server said no" from "we never got a usable answer".
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// The request broke its contract; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The request could not be serialized; nothing was sent.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// No HTTP response was obtained.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// HTTP 422: the integration exists but rejected the event, typically
    /// because the service is unknown.
    #[error("Service Not Found")]
    ServiceNotFound,

    /// HTTP 400: the server found the request malformed.
    #[error("Bad Request: status {}: {body}", .status.as_u16())]
    BadRequest {
        /// Response status (always 400)
        status: http::StatusCode,
        /// Raw response body
        body: String,
    },

    /// Any other status that is not 202.
    #[error("Something Went Wrong: status {}: {body}", .status.as_u16())]
    Unexpected {
        /// Response status
        status: http::StatusCode,
        /// Raw response body
        body: String,
    },

    /// A 202 arrived but its body is not an acknowledgment.
    #[error("Failed to decode acknowledgment: {0}")]
    Decode(#[source] serde_json::Error),
}

impl IntegrationError {
    /// Returns the HTTP status for status-derived failures.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::ServiceNotFound => Some(http::StatusCode::UNPROCESSABLE_ENTITY),
            Self::BadRequest { status, .. } | Self::Unexpected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request never left the process.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Encode(_))
    }
}
