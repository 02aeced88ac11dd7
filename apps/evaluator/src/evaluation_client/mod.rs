/// Evaluation client: the single point of entry for calls to the remote
/// resume evaluation service.
///
/// No other module talks to the service directly. Callers depend on the
/// `EvaluationService` trait so tests can swap in an in-memory fake.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::SubmissionError;
use crate::models::result::{ResultRecord, ServiceErrorBody};
use crate::submission::request::EvaluationRequest;

/// The original service's only route, on its default port.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8001/evaluate-resumes";

/// One round trip to the evaluation service. Implementations map every failure
/// onto `SubmissionError` and never retry.
#[async_trait]
pub trait EvaluationService: Send + Sync {
    async fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<Vec<ResultRecord>, SubmissionError>;
}

/// HTTP implementation: one multipart POST to a fixed endpoint.
#[derive(Clone)]
pub struct HttpEvaluationClient {
    client: Client,
    endpoint: String,
}

impl HttpEvaluationClient {
    /// `timeout: None` waits for the service indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build().context("Failed to build HTTP client")?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EvaluationService for HttpEvaluationClient {
    async fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<Vec<ResultRecord>, SubmissionError> {
        let form = request
            .into_form()
            .map_err(|e| SubmissionError::transport(format!("failed to encode form: {e}")))?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() { "timed out" } else { "failed" };
                SubmissionError::transport(format!("request to {} {kind}: {e}", self.endpoint))
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Only a string `error` field counts as a structured message
            let message = serde_json::from_str::<ServiceErrorBody>(&body)
                .ok()
                .and_then(|b| b.message().map(str::to_string));
            return Err(match message {
                Some(message) => SubmissionError::Service {
                    status: status.as_u16(),
                    message,
                },
                None => {
                    warn!("Evaluation service returned {status} without an error message");
                    SubmissionError::ServiceUnlabeled {
                        status: status.as_u16(),
                    }
                }
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SubmissionError::transport(format!("failed to read response: {e}")))?;

        let records: Vec<ResultRecord> = serde_json::from_slice(&body)
            .map_err(|e| SubmissionError::transport(format!("malformed response body: {e}")))?;

        debug!("Evaluation service returned {} records", records.len());
        Ok(records)
    }
}
