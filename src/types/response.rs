// src/types/response.rs
//! Wire types for portal service responses

use serde::{Deserialize, Serialize};

/// Body returned by the resume upload endpoint. The server echoes back a
/// truncated excerpt of the parsed resume text alongside the extracted
/// skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeUploadResponse {
    pub candidate_id: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub resume_text: String,
}
