use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq)]
pub struct DashboardStats {
    pub saved_jobs: usize,
    pub applications: usize,
    pub interviews: usize,
}

pub fn compute_stats(saved_jobs: usize, applications: &[Application]) -> DashboardStats {
    DashboardStats {
        saved_jobs,
        applications: applications.len(),
        interviews: applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Interview)
            .count(),
    }
}

/// GET /api/v1/dashboard/stats
pub async fn handle_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    let saved = state.saved_jobs.list().await?;
    let applications = state.applications.list().await?;
    Ok(Json(compute_stats(saved.len(), &applications)))
}
