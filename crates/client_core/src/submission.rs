//! Transport seam between the controller and the hosted form backend.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use shared::{
    error::SubmissionErrors,
    protocol::{BackendResponse, SubmissionPayload},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::{config::FormBackendSettings, error::ConfigError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected(SubmissionErrors),
}

#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome;
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("could not reach the form service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Rejected(SubmissionErrors),
    #[error("form service answered with status {status}")]
    UnexpectedResponse { status: StatusCode },
}

impl From<SubmissionError> for SubmissionErrors {
    fn from(value: SubmissionError) -> Self {
        match value {
            SubmissionError::Rejected(errors) => errors,
            other => SubmissionErrors::form_error(other.to_string()),
        }
    }
}

/// Posts orders to a Formspree form as JSON.
#[derive(Debug, Clone)]
pub struct FormspreeClient {
    http: Client,
    submission_url: Url,
}

impl FormspreeClient {
    pub fn new(submission_url: Url) -> Self {
        Self {
            http: Client::new(),
            submission_url,
        }
    }

    pub fn from_settings(settings: &FormBackendSettings) -> Result<Self, ConfigError> {
        Ok(Self::new(settings.submission_url()?))
    }

    pub fn submission_url(&self) -> &Url {
        &self.submission_url
    }

    pub async fn try_submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        debug!(url = %self.submission_url, "posting order to form service");
        let response = self
            .http
            .post(self.submission_url.clone())
            .header(header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        match serde_json::from_str::<BackendResponse>(&body).ok() {
            Some(parsed) => Err(SubmissionError::Rejected(SubmissionErrors::from_backend(
                parsed.error,
                parsed.errors,
            ))),
            None => Err(SubmissionError::UnexpectedResponse { status }),
        }
    }
}

#[async_trait]
impl SubmissionService for FormspreeClient {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        match self.try_submit(payload).await {
            Ok(()) => SubmissionOutcome::Accepted,
            Err(err) => {
                warn!("order submission failed: {err}");
                SubmissionOutcome::Rejected(err.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
