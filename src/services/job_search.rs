// src/services/job_search.rs
//! Job listing pipeline - filtered search plus the one-time startup seed

use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::api::PortalApi;
use crate::types::models::Job;

pub struct JobSearchService {
    api: Arc<dyn PortalApi>,
}

impl JobSearchService {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self { api }
    }

    /// Fetch listings filtered by the supplied terms. Empty or
    /// whitespace-only values are omitted from the query entirely.
    pub async fn search(&self, term: &str, location: &str) -> Result<Vec<Job>> {
        self.api
            .fetch_jobs(non_empty(term), non_empty(location))
            .await
    }

    /// Fire-and-forget seed of the remote job store. Idempotent on the
    /// server side; the outcome never reaches view state.
    pub fn seed(&self) {
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            if let Err(e) = api.seed_jobs().await {
                debug!("Seed request failed (ignored): {e:#}");
            }
        });
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
