// src/core/service_client.rs
//! HTTP client for the external resume analysis service

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

use crate::core::config_manager::ServiceConfig;
use crate::error::SubmissionError;
use crate::types::AnalysisReport;
use crate::upload::UploadCandidate;

const ANALYSE_ENDPOINT: &str = "/api/analyse-resume";
const HEALTH_ENDPOINT: &str = "/health";
const FILE_FIELD: &str = "file";
const ERROR_BODY_PREVIEW: usize = 512;

/// Anything able to turn an accepted upload into a report.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyse(&self, candidate: UploadCandidate) -> Result<AnalysisReport, SubmissionError>;
}

pub struct AnalysisClient {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl AnalysisClient {
    /// Create a client bound to the configured timeout
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Service liveness document from `/health`
    pub async fn health(&self) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.config.base_url, HEALTH_ENDPOINT);
        debug!("Checking analysis service health: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Analysis service unreachable at {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Analysis service health check returned {}", status);
        }

        response
            .json()
            .await
            .context("Health response from analysis service was not JSON")
    }

    async fn submit(&self, candidate: UploadCandidate) -> Result<AnalysisReport, SubmissionError> {
        let url = format!("{}{}", self.config.base_url, ANALYSE_ENDPOINT);
        let file_name = candidate.file_name().to_string();
        let mime = candidate.mime_hint().to_string();
        let content = candidate.into_bytes().await?;

        let part = Part::bytes(content)
            .file_name(file_name)
            .mime_str(&mime)
            .map_err(|e| SubmissionError::Transport(format!("invalid multipart part: {}", e)))?;
        let form = Form::new().part(FILE_FIELD, part);

        info!("Calling resume analysis service: {}", url);

        let mut response = self
            .client
            .post(&url)
            .query(&[("translate_to", self.config.translate_to.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = self
                .read_limited(&mut response)
                .await
                .map(|bytes| preview(&bytes))
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Analysis service error response {}: {}", status, body);
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = self.read_limited(&mut response).await?;
        AnalysisReport::from_slice(&body).map_err(|e| {
            warn!("Failed to parse analysis report: {}", e);
            SubmissionError::MalformedBody(e.to_string())
        })
    }

    /// Read the body without ever buffering more than the configured ceiling
    async fn read_limited(
        &self,
        response: &mut reqwest::Response,
    ) -> Result<Vec<u8>, SubmissionError> {
        let limit = self.config.max_body_bytes;

        if let Some(declared) = response.content_length() {
            if declared > limit {
                warn!("Declared response length {} exceeds {}", declared, limit);
                return Err(SubmissionError::ResponseTooLarge { limit_bytes: limit });
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| self.classify(e))? {
            if (body.len() + chunk.len()) as u64 > limit {
                warn!("Response body exceeded {} bytes while streaming", limit);
                return Err(SubmissionError::ResponseTooLarge { limit_bytes: limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }

    fn classify(&self, err: reqwest::Error) -> SubmissionError {
        if err.is_timeout() {
            SubmissionError::Timeout {
                seconds: self.config.timeout.as_secs(),
            }
        } else {
            SubmissionError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl AnalysisService for AnalysisClient {
    async fn analyse(&self, candidate: UploadCandidate) -> Result<AnalysisReport, SubmissionError> {
        let attempt = Uuid::new_v4();
        let span = tracing::info_span!("submission", %attempt, file = %candidate.file_name());

        async move {
            let outcome = self.submit(candidate).await;
            match &outcome {
                Ok(report) => info!(
                    "Analysis received: {} job matches, score {}",
                    report.job_matches.len(),
                    report.compatibility_score
                ),
                Err(e) => error!("Analysis submission failed: {}", e),
            }
            outcome
        }
        .instrument(span)
        .await
    }
}

fn preview(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.chars().take(ERROR_BODY_PREVIEW).collect()
}
