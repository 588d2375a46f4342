// src/services/recommendation.rs
//! Recommendation store - the latest match set for the current candidate

use anyhow::{Context, Result};
use tracing::info;

use crate::api::PortalApi;
use crate::types::models::Recommendation;

/// Holds the most recent recommendation set. No caching beyond the last
/// successful result; every refresh is a full replacement.
#[derive(Default)]
pub struct RecommendationStore {
    items: Vec<Recommendation>,
}

impl RecommendationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the recommendation set for a candidate and replace the stored
    /// one wholesale. On failure the previous contents are kept and the
    /// error propagates to the caller.
    pub async fn refresh(&mut self, api: &dyn PortalApi, candidate_id: &str) -> Result<()> {
        let items = api
            .recommendations_for(candidate_id)
            .await
            .with_context(|| {
                format!("Failed to fetch recommendations for candidate {candidate_id}")
            })?;

        info!(
            "Fetched {} recommendations for candidate {}",
            items.len(),
            candidate_id
        );

        self.items = items;
        Ok(())
    }

    pub fn items(&self) -> &[Recommendation] {
        &self.items
    }
}
