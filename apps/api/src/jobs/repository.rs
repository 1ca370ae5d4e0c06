use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::jobs::query::{query_jobs, JobFilters, JobPage};
use crate::models::job::Job;

/// Read-only job catalog. Carried in `AppState` as `Arc<dyn JobRepository>`.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn list(&self, filters: &JobFilters) -> Result<JobPage, AppError>;

    async fn get_by_id(&self, id: &str) -> Result<Job, AppError>;
}

/// Catalog held in memory and shared immutably between requests.
pub struct InMemoryJobRepository {
    jobs: Arc<Vec<Job>>,
}

impl InMemoryJobRepository {
    /// Rejects catalogs with duplicate ids.
    pub fn new(jobs: Vec<Job>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !seen.insert(job.id.as_str()) {
                return Err(AppError::Validation(format!(
                    "Duplicate job id '{}' in catalog",
                    job.id
                )));
            }
        }
        Ok(Self {
            jobs: Arc::new(jobs),
        })
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(&self, filters: &JobFilters) -> Result<JobPage, AppError> {
        let snapshot = Arc::clone(&self.jobs);
        Ok(query_jobs(&snapshot, filters))
    }

    async fn get_by_id(&self, id: &str) -> Result<Job, AppError> {
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    }
}
