//! Startup seed data. The embedded dataset ships with the binary; the job
//! catalog can be swapped for a JSON file via `CATALOG_PATH`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::models::application::Application;
use crate::models::job::Job;
use crate::models::profile::UserProfile;
use crate::models::resume::Resume;
use crate::models::saved_job::SavedJob;

const JOBS_JSON: &str = include_str!("../data/jobs.json");
const RESUMES_JSON: &str = include_str!("../data/resumes.json");
const SAVED_JOBS_JSON: &str = include_str!("../data/saved_jobs.json");
const APPLICATIONS_JSON: &str = include_str!("../data/applications.json");
const PROFILE_JSON: &str = include_str!("../data/profile.json");

pub struct SeedData {
    pub jobs: Vec<Job>,
    pub resumes: Vec<Resume>,
    pub saved_jobs: Vec<SavedJob>,
    pub applications: Vec<Application>,
    pub profile: UserProfile,
}

impl SeedData {
    /// Embedded dataset, optionally with the job catalog read from `catalog_path`.
    pub fn load(catalog_path: Option<&Path>) -> Result<Self> {
        let jobs = match catalog_path {
            Some(path) => load_catalog(path)?,
            None => parse(JOBS_JSON, "embedded jobs")?,
        };

        Ok(SeedData {
            jobs,
            resumes: parse(RESUMES_JSON, "embedded resumes")?,
            saved_jobs: parse(SAVED_JOBS_JSON, "embedded saved jobs")?,
            applications: parse(APPLICATIONS_JSON, "embedded applications")?,
            profile: parse(PROFILE_JSON, "embedded profile")?,
        })
    }
}

/// Reads a JSON array of jobs from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<Job>> {
    info!("Loading job catalog from {}", path.display());
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job catalog '{}'", path.display()))?;
    parse(&raw, &path.display().to_string())
}

fn parse<T: DeserializeOwned>(raw: &str, source: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("Invalid seed data in {source}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_embedded_dataset_parses() {
        let seed = SeedData::load(None).unwrap();
        assert_eq!(seed.jobs.len(), 12);
        assert!(!seed.resumes.is_empty());
        assert_eq!(seed.resumes.iter().filter(|r| r.is_primary).count(), 1);
        assert!(!seed.profile.name.is_empty());
    }

    #[test]
    fn test_embedded_job_ids_unique() {
        let seed = SeedData::load(None).unwrap();
        let mut ids: Vec<_> = seed.jobs.iter().map(|j| j.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed.jobs.len());
    }

    #[test]
    fn test_catalog_path_overrides_jobs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": "x1",
                "title": "Lighthouse Keeper",
                "company": "Coastline",
                "location": "Portland, ME",
                "type": "part-time",
                "experience": "entry",
                "salary": "$30,000",
                "description": "Keep the light on.",
                "requirements": [],
                "posted_date": "2024-02-01T00:00:00Z"
            }}]"#
        )
        .unwrap();

        let seed = SeedData::load(Some(file.path())).unwrap();
        assert_eq!(seed.jobs.len(), 1);
        assert_eq!(seed.jobs[0].title, "Lighthouse Keeper");
    }

    #[test]
    fn test_missing_catalog_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read job catalog"));
    }

    #[test]
    fn test_malformed_catalog_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(load_catalog(file.path()).is_err());
    }
}
