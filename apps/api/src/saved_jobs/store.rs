use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::saved_job::SavedJob;

/// Bookmarked jobs. A job can be saved at most once.
#[async_trait]
pub trait SavedJobStore: Send + Sync {
    async fn list(&self) -> Result<Vec<SavedJob>, AppError>;

    async fn get(&self, id: &str) -> Result<SavedJob, AppError>;

    async fn create(&self, job_id: &str) -> Result<SavedJob, AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;

    async fn delete_by_job_id(&self, job_id: &str) -> Result<(), AppError>;

    async fn exists_for_job(&self, job_id: &str) -> Result<bool, AppError>;
}

pub struct InMemorySavedJobStore {
    saved: RwLock<Vec<SavedJob>>,
}

impl InMemorySavedJobStore {
    pub fn new(seed: Vec<SavedJob>) -> Self {
        Self {
            saved: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl SavedJobStore for InMemorySavedJobStore {
    async fn list(&self) -> Result<Vec<SavedJob>, AppError> {
        Ok(self.saved.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<SavedJob, AppError> {
        self.saved
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Saved job {id} not found")))
    }

    async fn create(&self, job_id: &str) -> Result<SavedJob, AppError> {
        if job_id.trim().is_empty() {
            return Err(AppError::Validation("job_id cannot be empty".to_string()));
        }

        let mut saved = self.saved.write().await;
        if saved.iter().any(|s| s.job_id == job_id) {
            return Err(AppError::Conflict(format!("Job {job_id} already saved")));
        }

        let entry = SavedJob {
            id: Uuid::new_v4().to_string(),
            job_id: job_id.to_string(),
            saved_date: Utc::now(),
        };
        saved.insert(0, entry.clone());

        info!("Saved job {job_id}");
        Ok(entry)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut saved = self.saved.write().await;
        let index = saved
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Saved job {id} not found")))?;
        saved.remove(index);
        Ok(())
    }

    async fn delete_by_job_id(&self, job_id: &str) -> Result<(), AppError> {
        let mut saved = self.saved.write().await;
        let index = saved
            .iter()
            .position(|s| s.job_id == job_id)
            .ok_or_else(|| AppError::NotFound(format!("Job {job_id} is not saved")))?;
        saved.remove(index);
        Ok(())
    }

    async fn exists_for_job(&self, job_id: &str) -> Result<bool, AppError> {
        Ok(self.saved.read().await.iter().any(|s| s.job_id == job_id))
    }
}
