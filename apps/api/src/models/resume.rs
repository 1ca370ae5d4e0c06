use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest accepted resume file.
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resume {
    pub id: String,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    pub file_url: String,
    pub is_primary: bool,
    /// Size of the uploaded file in bytes.
    pub size: u64,
}

/// Metadata for an upload; the file body itself is not retained.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub filename: String,
    pub size: u64,
}
