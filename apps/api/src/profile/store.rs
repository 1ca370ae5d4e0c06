//! Single-user profile with experience and education sub-collections.
//! Adds prepend, updates shallow-merge, and unknown ids are `NotFound`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{
    EducationPatch, ExperiencePatch, NewEducation, NewExperience, ProfilePatch, UserProfile,
};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self) -> Result<UserProfile, AppError>;

    async fn update(&self, patch: ProfilePatch) -> Result<UserProfile, AppError>;

    async fn add_experience(&self, new: NewExperience) -> Result<UserProfile, AppError>;

    async fn update_experience(
        &self,
        id: &str,
        patch: ExperiencePatch,
    ) -> Result<UserProfile, AppError>;

    async fn delete_experience(&self, id: &str) -> Result<UserProfile, AppError>;

    async fn add_education(&self, new: NewEducation) -> Result<UserProfile, AppError>;

    async fn update_education(
        &self,
        id: &str,
        patch: EducationPatch,
    ) -> Result<UserProfile, AppError>;

    async fn delete_education(&self, id: &str) -> Result<UserProfile, AppError>;
}

pub struct InMemoryProfileStore {
    profile: RwLock<UserProfile>,
}

impl InMemoryProfileStore {
    pub fn new(seed: UserProfile) -> Self {
        Self {
            profile: RwLock::new(seed),
        }
    }
}

fn require(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self) -> Result<UserProfile, AppError> {
        Ok(self.profile.read().await.clone())
    }

    async fn update(&self, patch: ProfilePatch) -> Result<UserProfile, AppError> {
        if let Some(email) = &patch.email {
            require(email, "email")?;
        }
        let mut profile = self.profile.write().await;
        profile.apply(patch);
        info!("Profile updated");
        Ok(profile.clone())
    }

    async fn add_experience(&self, new: NewExperience) -> Result<UserProfile, AppError> {
        require(&new.title, "title")?;
        require(&new.company, "company")?;
        let mut profile = self.profile.write().await;
        profile
            .experience
            .insert(0, new.into_experience(Uuid::new_v4().to_string()));
        Ok(profile.clone())
    }

    async fn update_experience(
        &self,
        id: &str,
        patch: ExperiencePatch,
    ) -> Result<UserProfile, AppError> {
        let mut profile = self.profile.write().await;
        profile
            .experience
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Experience {id} not found")))?
            .apply(patch);
        Ok(profile.clone())
    }

    async fn delete_experience(&self, id: &str) -> Result<UserProfile, AppError> {
        let mut profile = self.profile.write().await;
        let index = profile
            .experience
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Experience {id} not found")))?;
        profile.experience.remove(index);
        Ok(profile.clone())
    }

    async fn add_education(&self, new: NewEducation) -> Result<UserProfile, AppError> {
        require(&new.institution, "institution")?;
        require(&new.degree, "degree")?;
        let mut profile = self.profile.write().await;
        profile
            .education
            .insert(0, new.into_education(Uuid::new_v4().to_string()));
        Ok(profile.clone())
    }

    async fn update_education(
        &self,
        id: &str,
        patch: EducationPatch,
    ) -> Result<UserProfile, AppError> {
        let mut profile = self.profile.write().await;
        profile
            .education
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Education {id} not found")))?
            .apply(patch);
        Ok(profile.clone())
    }

    async fn delete_education(&self, id: &str) -> Result<UserProfile, AppError> {
        let mut profile = self.profile.write().await;
        let index = profile
            .education
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Education {id} not found")))?;
        profile.education.remove(index);
        Ok(profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryProfileStore {
        InMemoryProfileStore::new(UserProfile {
            name: "Alex Morgan".to_string(),
            email: "alex@example.com".to_string(),
            ..Default::default()
        })
    }

    fn experience(title: &str) -> NewExperience {
        NewExperience {
            title: title.to_string(),
            company: "WebCraft".to_string(),
            location: None,
            start_date: "2021-01".to_string(),
            end_date: None,
            current: true,
            description: None,
        }
    }

    fn education(degree: &str) -> NewEducation {
        NewEducation {
            institution: "UC Davis".to_string(),
            degree: degree.to_string(),
            field: Some("Computer Science".to_string()),
            start_date: None,
            end_date: None,
            gpa: None,
        }
    }

    #[tokio::test]
    async fn test_update_is_shallow_merge() {
        let store = store();
        let profile = store
            .update(ProfilePatch {
                location: Some(Some("Denver, CO".to_string())),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(profile.name, "Alex Morgan");
        assert_eq!(profile.location.as_deref(), Some("Denver, CO"));
    }

    #[tokio::test]
    async fn test_update_rejects_blank_email() {
        let store = store();
        let err = store
            .update(ProfilePatch {
                email: Some(String::new()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.get().await.unwrap().email, "alex@example.com");
    }

    #[tokio::test]
    async fn test_add_experience_prepends_with_id() {
        let store = store();
        store.add_experience(experience("Intern")).await.unwrap();
        let profile = store.add_experience(experience("Engineer")).await.unwrap();
        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].title, "Engineer");
        assert_ne!(profile.experience[0].id, profile.experience[1].id);
    }

    #[tokio::test]
    async fn test_add_experience_requires_title() {
        let store = store();
        assert!(matches!(
            store.add_experience(experience("")).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete_experience() {
        let store = store();
        let profile = store.add_experience(experience("Engineer")).await.unwrap();
        let id = profile.experience[0].id.clone();

        let profile = store
            .update_experience(
                &id,
                ExperiencePatch {
                    title: Some("Senior Engineer".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(profile.experience[0].title, "Senior Engineer");
        assert_eq!(profile.experience[0].company, "WebCraft");

        let profile = store.delete_experience(&id).await.unwrap();
        assert!(profile.experience.is_empty());
        assert!(matches!(
            store.delete_experience(&id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_education_is_not_found() {
        let store = store();
        assert!(matches!(
            store
                .update_education("missing", EducationPatch::default())
                .await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_education_lifecycle() {
        let store = store();
        let profile = store.add_education(education("B.S.")).await.unwrap();
        let id = profile.education[0].id.clone();
        let profile = store
            .update_education(
                &id,
                EducationPatch {
                    gpa: Some(Some(3.8)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(profile.education[0].gpa, Some(3.8));
        let profile = store.delete_education(&id).await.unwrap();
        assert!(profile.education.is_empty());
    }
}
