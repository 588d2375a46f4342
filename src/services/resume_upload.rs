// src/services/resume_upload.rs
//! Resume submission - multipart upload mapped into a Candidate

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::api::PortalApi;
use crate::types::models::Candidate;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

pub struct ResumeUploadService {
    api: Arc<dyn PortalApi>,
}

impl ResumeUploadService {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self { api }
    }

    /// Submit a resume document and map the response into a Candidate.
    /// The extension check runs before any remote call is issued.
    pub async fn upload(&self, file_path: &Path) -> Result<Candidate> {
        let file_name = file_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid resume path: {}", file_path.display()))?;

        validate_file_extension(file_name, ALLOWED_EXTENSIONS)?;

        let response = self
            .api
            .upload_resume(file_path, file_name)
            .await
            .context("Resume upload failed")?;

        info!(
            "Resume processed: candidate {} with {} extracted skills",
            response.candidate_id,
            response.skills.len()
        );

        Ok(Candidate {
            id: response.candidate_id,
            skills: response.skills,
            resume_excerpt: response.resume_text,
        })
    }
}

/// Get file extension in lowercase
fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}
