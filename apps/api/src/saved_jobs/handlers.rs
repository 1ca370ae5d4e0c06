use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::saved_job::SavedJob;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveJobRequest {
    pub job_id: String,
}

#[derive(Debug, Serialize)]
pub struct SavedStatusResponse {
    pub saved: bool,
}

/// GET /api/v1/saved-jobs
pub async fn handle_list_saved_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedJob>>, AppError> {
    Ok(Json(state.saved_jobs.list().await?))
}

/// GET /api/v1/saved-jobs/:id
pub async fn handle_get_saved_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedJob>, AppError> {
    Ok(Json(state.saved_jobs.get(&id).await?))
}

/// POST /api/v1/saved-jobs
pub async fn handle_save_job(
    State(state): State<AppState>,
    Json(req): Json<SaveJobRequest>,
) -> Result<(StatusCode, Json<SavedJob>), AppError> {
    // Only catalog jobs can be bookmarked.
    state.jobs.get_by_id(&req.job_id).await?;
    let saved = state.saved_jobs.create(&req.job_id).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/v1/saved-jobs/:id
pub async fn handle_delete_saved_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.saved_jobs.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/saved-jobs/by-job/:job_id
pub async fn handle_unsave_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.saved_jobs.delete_by_job_id(&job_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/jobs/:id/saved
pub async fn handle_job_saved_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<SavedStatusResponse>, AppError> {
    let saved = state.saved_jobs.exists_for_job(&job_id).await?;
    Ok(Json(SavedStatusResponse { saved }))
}
