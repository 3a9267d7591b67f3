//! Maps a completed response onto success or one failure category.

use http::StatusCode;

use crate::transport::HttpResponse;

use super::IntegrationError;

/// Classifies a response by status code.
///
/// | status | outcome |
/// |--------|---------|
/// | 202    | `Ok(())` |
/// | 422    | [`IntegrationError::ServiceNotFound`] |
/// | 400    | [`IntegrationError::BadRequest`] |
/// | other  | [`IntegrationError::Unexpected`] |
///
/// Failed responses are logged at debug level with headers and body; the
/// log never changes the result.
///
/// # Errors
///
/// Returns the classified failure for any status other than 202.
pub fn classify(response: &HttpResponse) -> Result<(), IntegrationError> {
    if response.status == StatusCode::ACCEPTED {
        return Ok(());
    }

    tracing::debug!(
        status = response.status.as_u16(),
        headers = ?response.headers,
        body = %response.body_lossy(),
        "Integration request failed"
    );

    match response.status {
        StatusCode::UNPROCESSABLE_ENTITY => Err(IntegrationError::ServiceNotFound),
        StatusCode::BAD_REQUEST => Err(IntegrationError::BadRequest {
            status: response.status,
            body: response.body_lossy().into_owned(),
        }),
        status => Err(IntegrationError::Unexpected {
            status,
            body: response.body_lossy().into_owned(),
        }),
    }
}
