use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{
    Application, ApplicationStatus, NewApplication, MAX_COVER_LETTER_CHARS,
};

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Application>, AppError>;

    async fn get(&self, id: &str) -> Result<Application, AppError>;

    async fn create(&self, new: NewApplication) -> Result<Application, AppError>;

    async fn update_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Application, AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// The application submitted for `job_id`, if any.
    async fn get_by_job_id(&self, job_id: &str) -> Result<Option<Application>, AppError>;
}

pub struct InMemoryApplicationStore {
    applications: RwLock<Vec<Application>>,
}

impl InMemoryApplicationStore {
    pub fn new(seed: Vec<Application>) -> Self {
        Self {
            applications: RwLock::new(seed),
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Application {id} not found"))
}

/// Checks required fields and the cover letter length.
pub fn validate_new_application(new: &NewApplication) -> Result<(), AppError> {
    if new.job_id.trim().is_empty() {
        return Err(AppError::Validation("job_id is required".to_string()));
    }
    if new.resume_id.trim().is_empty() {
        return Err(AppError::Validation("resume_id is required".to_string()));
    }
    if let Some(letter) = &new.cover_letter {
        let chars = letter.chars().count();
        if chars > MAX_COVER_LETTER_CHARS {
            return Err(AppError::Validation(format!(
                "cover_letter is {chars} characters; the limit is {MAX_COVER_LETTER_CHARS}"
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn list(&self) -> Result<Vec<Application>, AppError> {
        Ok(self.applications.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Application, AppError> {
        self.applications
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, new: NewApplication) -> Result<Application, AppError> {
        validate_new_application(&new)?;

        let application = Application {
            id: Uuid::new_v4().to_string(),
            job_id: new.job_id,
            resume_id: new.resume_id,
            cover_letter: new.cover_letter.filter(|c| !c.trim().is_empty()),
            status: ApplicationStatus::Applied,
            applied_date: Utc::now(),
        };
        self.applications
            .write()
            .await
            .insert(0, application.clone());

        info!(
            "Application {} submitted for job {}",
            application.id, application.job_id
        );
        Ok(application)
    }

    async fn update_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Application, AppError> {
        let mut applications = self.applications.write().await;
        let application = applications
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;
        application.status = status;
        Ok(application.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut applications = self.applications.write().await;
        let index = applications
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;
        applications.remove(index);
        Ok(())
    }

    async fn get_by_job_id(&self, job_id: &str) -> Result<Option<Application>, AppError> {
        Ok(self
            .applications
            .read()
            .await
            .iter()
            .find(|a| a.job_id == job_id)
            .cloned())
    }
}
