pub mod job_search;
pub mod recommendation;
pub mod resume_upload;

pub use job_search::JobSearchService;
pub use recommendation::RecommendationStore;
pub use resume_upload::ResumeUploadService;
