use std::sync::Arc;

use crate::applications::store::{ApplicationStore, InMemoryApplicationStore};
use crate::config::Config;
use crate::errors::AppError;
use crate::jobs::repository::{InMemoryJobRepository, JobRepository};
use crate::profile::store::{InMemoryProfileStore, ProfileStore};
use crate::resumes::store::{InMemoryResumeStore, ResumeStore};
use crate::saved_jobs::store::{InMemorySavedJobStore, SavedJobStore};
use crate::seed::SeedData;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only catalog; queries never mutate it.
    pub jobs: Arc<dyn JobRepository>,
    pub resumes: Arc<dyn ResumeStore>,
    pub saved_jobs: Arc<dyn SavedJobStore>,
    pub applications: Arc<dyn ApplicationStore>,
    pub profile: Arc<dyn ProfileStore>,
}

impl AppState {
    /// Builds isolated in-memory stores from `seed`.
    pub fn in_memory(config: Config, seed: SeedData) -> Result<Self, AppError> {
        Ok(AppState {
            config,
            jobs: Arc::new(InMemoryJobRepository::new(seed.jobs)?),
            resumes: Arc::new(InMemoryResumeStore::new(seed.resumes)),
            saved_jobs: Arc::new(InMemorySavedJobStore::new(seed.saved_jobs)),
            applications: Arc::new(InMemoryApplicationStore::new(seed.applications)),
            profile: Arc::new(InMemoryProfileStore::new(seed.profile)),
        })
    }
}
