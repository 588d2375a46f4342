// src/types/models.rs
//! Core data model as served by the portal API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A job posting. Immutable once fetched; the whole list is replaced on
/// each successful search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub posted_date: NaiveDate,
}

/// The entity derived from a parsed resume, keyed by a server-issued id.
/// Held until a new upload replaces it.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: String,
    pub skills: Vec<String>,
    pub resume_excerpt: String,
}

/// One scored job match for a candidate. The sequence is replaced wholesale
/// per fetch, in the server's relevance order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub job_id: i64,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub match_score: u8,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub explanation: String,
}

impl Recommendation {
    /// Matching and missing skills must never overlap.
    pub fn skills_are_disjoint(&self) -> bool {
        self.matching_skills
            .iter()
            .all(|skill| !self.missing_skills.contains(skill))
    }
}
