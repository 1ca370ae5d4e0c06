use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_COVER_LETTER_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Viewed,
    Interview,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub resume_id: String,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewApplication {
    pub job_id: String,
    pub resume_id: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_is_applied() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Applied);
    }

    #[test]
    fn test_status_serde_interview() {
        let status: ApplicationStatus = serde_json::from_str(r#""interview""#).unwrap();
        assert_eq!(status, ApplicationStatus::Interview);
    }

    #[test]
    fn test_new_application_cover_letter_optional() {
        let req: NewApplication =
            serde_json::from_str(r#"{"job_id": "1", "resume_id": "r1"}"#).unwrap();
        assert!(req.cover_letter.is_none());
    }
}
