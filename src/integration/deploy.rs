//! Deploy events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::transport::HttpClient;
use crate::validate::{Field, FieldValue, Rule, Validate};

use super::{IntegrationClient, IntegrationError, IntegrationKind};

const REQUIRED: &[Rule] = &[Rule::Required];
const REQUIRED_DIVE: &[Rule] = &[Rule::Required, Rule::Dive];
const DIVE: &[Rule] = &[Rule::Dive];

/// Who performed the deploy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployer {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Deployer {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Validate for Deployer {
    fn struct_name(&self) -> &'static str {
        "Deployer"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("Email", FieldValue::Text(&self.email), REQUIRED)]
    }
}

/// The commit being deployed. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authoring_date: Option<DateTime<Utc>>,
}

impl Commit {
    /// Returns true if no commit detail is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Validate for Commit {
    fn struct_name(&self) -> &'static str {
        "Commit"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Body of a deploy integration event.
///
/// `deployed_at` is optional in the type only so that an unset value can
/// be reported as a validation error; it is required on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub service: String,
    pub deployer: Deployer,
    pub deployed_at: Option<DateTime<Utc>>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<Commit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedup_id: Option<String>,
}

impl DeployRequest {
    /// Creates a request with every required field set.
    #[must_use]
    pub fn new(
        service: impl Into<String>,
        deployer: Deployer,
        deployed_at: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            deployer,
            deployed_at: Some(deployed_at),
            description: description.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    #[must_use]
    pub fn with_deploy_url(mut self, deploy_url: impl Into<String>) -> Self {
        self.deploy_url = Some(deploy_url.into());
        self
    }

    #[must_use]
    pub fn with_deploy_number(mut self, deploy_number: impl Into<String>) -> Self {
        self.deploy_number = Some(deploy_number.into());
        self
    }

    #[must_use]
    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commit = Some(commit);
        self
    }

    /// Sets the id the server uses to drop duplicate deliveries.
    #[must_use]
    pub fn with_dedup_id(mut self, dedup_id: impl Into<String>) -> Self {
        self.dedup_id = Some(dedup_id.into());
        self
    }
}

impl Validate for DeployRequest {
    fn struct_name(&self) -> &'static str {
        "DeployRequest"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Service", FieldValue::Text(&self.service), REQUIRED),
            Field::new("Deployer", FieldValue::Nested(Some(&self.deployer)), REQUIRED_DIVE),
            Field::new(
                "DeployedAt",
                FieldValue::Timestamp(self.deployed_at.as_ref()),
                REQUIRED,
            ),
            Field::new("Description", FieldValue::Text(&self.description), REQUIRED),
            Field::new(
                "Commit",
                FieldValue::Nested(self.commit.as_ref().map(|c| c as &dyn Validate)),
                DIVE,
            ),
        ]
    }
}

impl<H: HttpClient> IntegrationClient<H> {
    /// Reports a deploy to the deploy integration `integration_id`.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::Validation`] without sending anything if
    /// the request breaks its contract, otherwise whatever the transport,
    /// classifier or acknowledgment decoding reports.
    pub async fn deploy(
        &self,
        request: &DeployRequest,
        integration_id: &str,
    ) -> Result<(), IntegrationError> {
        self.submit(IntegrationKind::Deploy, request, integration_id)
            .await
    }
}
