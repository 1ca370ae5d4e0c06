use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedJob {
    pub id: String,
    pub job_id: String,
    pub saved_date: DateTime<Utc>,
}
