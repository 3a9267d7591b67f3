//! Check events: pass/fail results for a named check on a service.

use serde::{Deserialize, Serialize};

use crate::transport::HttpClient;
use crate::validate::{Field, FieldValue, Rule, Validate};

use super::{IntegrationClient, IntegrationError, IntegrationKind};

/// Accepted values for [`CheckRequest::status`].
pub const CHECK_STATUSES: &[&str] = &["passed", "failed"];

const REQUIRED: &[Rule] = &[Rule::Required];
const STATUS: &[Rule] = &[Rule::Required, Rule::OneOf(CHECK_STATUSES)];

/// Body of a check integration event.
///
/// `status` is free text on purpose: it is checked against
/// [`CHECK_STATUSES`] before sending, so a bad value comes back as a
/// validation error instead of a server rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub service: String,
    pub check: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckRequest {
    #[must_use]
    pub fn new(
        service: impl Into<String>,
        check: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            check: check.into(),
            status: status.into(),
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validate for CheckRequest {
    fn struct_name(&self) -> &'static str {
        "CheckRequest"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Service", FieldValue::Text(&self.service), REQUIRED),
            Field::new("Check", FieldValue::Text(&self.check), REQUIRED),
            Field::new("Status", FieldValue::Text(&self.status), STATUS),
        ]
    }
}

impl<H: HttpClient> IntegrationClient<H> {
    /// Reports a check result to the check integration `integration_id`.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::Validation`] without sending anything if
    /// the request breaks its contract, otherwise whatever the transport,
    /// classifier or acknowledgment decoding reports.
    pub async fn check(
        &self,
        request: &CheckRequest,
        integration_id: &str,
    ) -> Result<(), IntegrationError> {
        self.submit(IntegrationKind::Check, request, integration_id)
            .await
    }
}
