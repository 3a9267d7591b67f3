//! Payload events: arbitrary structured data evaluated by a payload check.

use serde::{Deserialize, Serialize};

use crate::transport::HttpClient;
use crate::validate::{Field, FieldValue, Rule, Validate};

use super::{IntegrationClient, IntegrationError, IntegrationKind};

const REQUIRED: &[Rule] = &[Rule::Required];
const REQUIRED_DIVE: &[Rule] = &[Rule::Required, Rule::Dive];

/// Body of a payload integration event.
///
/// `D` carries its own contract through [`Validate`], which is checked as
/// part of the request (`PayloadRequest.Data.<Field>`). Use
/// [`serde_json::Value`] for data with no contract beyond "not null".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadRequest<D = serde_json::Value> {
    pub service: String,
    pub check: String,
    pub data: Option<D>,
}

impl<D> PayloadRequest<D> {
    #[must_use]
    pub fn new(service: impl Into<String>, check: impl Into<String>, data: D) -> Self {
        Self {
            service: service.into(),
            check: check.into(),
            data: Some(data),
        }
    }
}

impl<D> Default for PayloadRequest<D> {
    fn default() -> Self {
        Self {
            service: String::new(),
            check: String::new(),
            data: None,
        }
    }
}

impl<D: Validate> Validate for PayloadRequest<D> {
    fn struct_name(&self) -> &'static str {
        "PayloadRequest"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Service", FieldValue::Text(&self.service), REQUIRED),
            Field::new("Check", FieldValue::Text(&self.check), REQUIRED),
            Field::new(
                "Data",
                FieldValue::Nested(self.data.as_ref().map(|d| d as &dyn Validate)),
                REQUIRED_DIVE,
            ),
        ]
    }
}

impl<H: HttpClient> IntegrationClient<H> {
    /// Sends a payload to the payload integration `integration_id`.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::Validation`] without sending anything if
    /// the request or its data breaks its contract, otherwise whatever the
    /// transport, classifier or acknowledgment decoding reports.
    pub async fn payload<D>(
        &self,
        request: &PayloadRequest<D>,
        integration_id: &str,
    ) -> Result<(), IntegrationError>
    where
        D: Validate + Serialize + Sync,
    {
        self.submit(IntegrationKind::Payload, request, integration_id)
            .await
    }
}
