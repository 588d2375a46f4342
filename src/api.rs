// src/api.rs
//! Remote portal API - trait seam plus the reqwest-backed production client

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::{error, info, trace};

use crate::types::models::{Job, Recommendation};
use crate::types::response::ResumeUploadResponse;

const JOBS_ENDPOINT: &str = "/jobs";
const SEED_ENDPOINT: &str = "/jobs/seed";
const UPLOAD_RESUME_ENDPOINT: &str = "/upload-resume";
const RECOMMENDATIONS_ENDPOINT: &str = "/recommendations";

const RESUME_FIELD: &str = "resume";
const RESUME_CONTENT_TYPE: &str = "application/pdf";

/// Remote surface of the job portal backend. Carried as
/// `Arc<dyn PortalApi>` so the pipelines can be exercised against an
/// in-memory double.
#[async_trait]
pub trait PortalApi: Send + Sync {
    async fn fetch_jobs(&self, search: Option<&str>, location: Option<&str>)
        -> Result<Vec<Job>>;

    async fn seed_jobs(&self) -> Result<()>;

    async fn upload_resume(
        &self,
        file_path: &Path,
        file_name: &str,
    ) -> Result<ResumeUploadResponse>;

    async fn recommendations_for(&self, candidate_id: &str) -> Result<Vec<Recommendation>>;
}

pub struct HttpPortalClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPortalClient {
    /// Create a new portal client against the given base URL.
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }
}

/// Query pairs for the jobs listing. A parameter is present iff its value
/// is non-empty.
fn job_query(search: Option<&str>, location: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if let Some(term) = search {
        if !term.is_empty() {
            params.push(("search", term.to_string()));
        }
    }
    if let Some(term) = location {
        if !term.is_empty() {
            params.push(("location", term.to_string()));
        }
    }

    params
}

#[async_trait]
impl PortalApi for HttpPortalClient {
    async fn fetch_jobs(
        &self,
        search: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<Job>> {
        let url = format!("{}{}", self.base_url, JOBS_ENDPOINT);

        trace!("Calling jobs listing: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&job_query(search, location))
            .send()
            .await
            .context("Failed to call jobs listing")?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<Vec<Job>>()
                .await
                .context("Failed to parse jobs response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Jobs listing returned status {}: {}", status, error_text)
        }
    }

    async fn seed_jobs(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url, SEED_ENDPOINT);

        trace!("Calling job seed: {}", url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to call job seed")?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            anyhow::bail!("Job seed returned status {}", status)
        }
    }

    async fn upload_resume(
        &self,
        file_path: &Path,
        file_name: &str,
    ) -> Result<ResumeUploadResponse> {
        let url = format!("{}{}", self.base_url, UPLOAD_RESUME_ENDPOINT);

        let file_content = tokio::fs::read(file_path)
            .await
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let form = Form::new().part(
            RESUME_FIELD,
            Part::bytes(file_content)
                .file_name(file_name.to_string())
                .mime_str(RESUME_CONTENT_TYPE)
                .context("Failed to create multipart")?,
        );

        info!("Calling resume upload service: {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<ResumeUploadResponse>()
                .await
                .context("Failed to parse upload response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Resume service error response: {}", error_text);
            anyhow::bail!("Upload returned status {}: {}", status, error_text)
        }
    }

    async fn recommendations_for(&self, candidate_id: &str) -> Result<Vec<Recommendation>> {
        let url = format!(
            "{}{}/{}",
            self.base_url, RECOMMENDATIONS_ENDPOINT, candidate_id
        );

        trace!("Calling recommendations: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to call recommendations")?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<Vec<Recommendation>>()
                .await
                .context("Failed to parse recommendations response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Recommendations returned status {}: {}", status, error_text)
        }
    }
}
