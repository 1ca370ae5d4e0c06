//! Resume metadata store. Keeps at most one primary resume.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, Resume, MAX_RESUME_BYTES};

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Resume>, AppError>;

    async fn get(&self, id: &str) -> Result<Resume, AppError>;

    /// Accepts PDFs up to 5MB. The first resume uploaded into an empty
    /// store becomes primary.
    async fn upload(&self, new: NewResume) -> Result<Resume, AppError>;

    async fn set_primary(&self, id: &str) -> Result<Resume, AppError>;

    async fn rename(&self, id: &str, filename: &str) -> Result<Resume, AppError>;

    /// Deleting the primary promotes the first remaining resume.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

/// Newest-first resume list behind a lock.
pub struct InMemoryResumeStore {
    resumes: RwLock<Vec<Resume>>,
}

impl InMemoryResumeStore {
    pub fn new(seed: Vec<Resume>) -> Self {
        Self {
            resumes: RwLock::new(seed),
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}

fn validate_filename(filename: &str) -> Result<String, AppError> {
    let trimmed = filename.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("filename cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Uploads must be PDF files no larger than `MAX_RESUME_BYTES`.
pub fn validate_upload(new: &NewResume) -> Result<String, AppError> {
    let filename = validate_filename(&new.filename)?;
    if !filename.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(
            "Please upload PDF files only".to_string(),
        ));
    }
    if new.size > MAX_RESUME_BYTES {
        return Err(AppError::Validation(
            "File size must be less than 5MB".to_string(),
        ));
    }
    Ok(filename)
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn list(&self) -> Result<Vec<Resume>, AppError> {
        Ok(self.resumes.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Resume, AppError> {
        self.resumes
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn upload(&self, new: NewResume) -> Result<Resume, AppError> {
        let filename = validate_upload(&new)?;
        let mut resumes = self.resumes.write().await;

        let resume = Resume {
            id: Uuid::new_v4().to_string(),
            file_url: format!("/{filename}"),
            filename,
            upload_date: Utc::now(),
            is_primary: resumes.is_empty(),
            size: new.size,
        };
        resumes.insert(0, resume.clone());

        info!("Uploaded resume {} ({} bytes)", resume.id, resume.size);
        Ok(resume)
    }

    async fn set_primary(&self, id: &str) -> Result<Resume, AppError> {
        let mut resumes = self.resumes.write().await;
        if !resumes.iter().any(|r| r.id == id) {
            return Err(not_found(id));
        }

        let mut primary = None;
        for resume in resumes.iter_mut() {
            resume.is_primary = resume.id == id;
            if resume.is_primary {
                primary = Some(resume.clone());
            }
        }
        primary.ok_or_else(|| not_found(id))
    }

    async fn rename(&self, id: &str, filename: &str) -> Result<Resume, AppError> {
        let filename = validate_filename(filename)?;
        let mut resumes = self.resumes.write().await;
        let resume = resumes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        resume.filename = filename;
        Ok(resume.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut resumes = self.resumes.write().await;
        let index = resumes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;

        let removed = resumes.remove(index);
        if removed.is_primary {
            if let Some(first) = resumes.first_mut() {
                first.is_primary = true;
            }
        }

        info!("Deleted resume {id}");
        Ok(())
    }
}
