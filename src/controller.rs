// src/controller.rs
//! View-state controller - owns all mutable client state and coordinates
//! the three service pipelines with the rendering surface.

use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::PortalApi;
use crate::services::{JobSearchService, RecommendationStore, ResumeUploadService};
use crate::types::models::{Candidate, Job, Recommendation};

const UPLOAD_FAILURE_NOTICE: &str = "Error processing resume. Please try again.";

/// The three mutually exclusive presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Listings,
    Upload,
    Recommendations,
}

/// All mutable client state. Initialized empty at startup, mutated only by
/// the controller's own methods, gone when the process ends.
pub struct ViewState {
    pub active_view: ActiveView,
    pub search_term: String,
    pub location_filter: String,
    pub jobs: Vec<Job>,
    pub candidate: Option<Candidate>,
    pub notice: Option<String>,
}

impl ViewState {
    fn new() -> Self {
        Self {
            active_view: ActiveView::Listings,
            search_term: String::new(),
            location_filter: String::new(),
            jobs: Vec::new(),
            candidate: None,
            notice: None,
        }
    }
}

pub struct ViewStateController {
    api: Arc<dyn PortalApi>,
    job_search: JobSearchService,
    resume_upload: ResumeUploadService,
    recommendations: RecommendationStore,
    state: ViewState,
    seeded: bool,
}

impl ViewStateController {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self {
            job_search: JobSearchService::new(Arc::clone(&api)),
            resume_upload: ResumeUploadService::new(Arc::clone(&api)),
            recommendations: RecommendationStore::new(),
            state: ViewState::new(),
            api,
            seeded: false,
        }
    }

    /// Startup sequence: one idempotent seed (fire-and-forget) and the
    /// initial unfiltered listing fetch. The two are not ordered relative
    /// to each other.
    pub async fn start(&mut self) {
        if !self.seeded {
            self.job_search.seed();
            self.seeded = true;
        }
        self.run_search().await;
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        self.recommendations.items()
    }

    /// User tab selection: unconditional, any view to any view.
    pub fn select_view(&mut self, view: ActiveView) {
        self.state.active_view = view;
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.state.search_term = term.to_string();
    }

    pub fn set_location_filter(&mut self, location: &str) {
        self.state.location_filter = location.to_string();
    }

    /// Run a listing search with the current filters. A failed search keeps
    /// the previous list visible; no retry, no partial merge. Overlapping
    /// searches are last-writer-wins, there is no request token guarding.
    pub async fn run_search(&mut self) {
        match self
            .job_search
            .search(&self.state.search_term, &self.state.location_filter)
            .await
        {
            Ok(jobs) => {
                info!("Job search returned {} listings", jobs.len());
                self.state.jobs = jobs;
            }
            Err(e) => error!("Error fetching jobs: {e:#}"),
        }
    }

    /// Upload pipeline: resume submission, then the dependent recommendation
    /// fetch for the returned candidate id, then the forced switch to the
    /// Recommendations view. Each step runs only after the previous one
    /// succeeded. An upload failure records a user-visible notice and
    /// mutates nothing else.
    pub async fn upload_resume(&mut self, path: &Path) {
        let candidate = match self.resume_upload.upload(path).await {
            Ok(candidate) => candidate,
            Err(e) => {
                error!("Error uploading resume: {e:#}");
                self.state.notice = Some(UPLOAD_FAILURE_NOTICE.to_string());
                return;
            }
        };

        let candidate_id = candidate.id.clone();
        self.state.candidate = Some(candidate);

        if let Err(e) = self
            .recommendations
            .refresh(self.api.as_ref(), &candidate_id)
            .await
        {
            error!("Error fetching recommendations: {e:#}");
            self.state.notice = Some(UPLOAD_FAILURE_NOTICE.to_string());
            return;
        }

        self.state.notice = None;
        self.state.active_view = ActiveView::Recommendations;
    }
}
