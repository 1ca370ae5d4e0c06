use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::applications::store::validate_new_application;
use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus, NewApplication};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<Application>>, AppError> {
    Ok(Json(state.applications.list().await?))
}

/// GET /api/v1/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Application>, AppError> {
    Ok(Json(state.applications.get(&id).await?))
}

/// POST /api/v1/applications
///
/// The referenced job and resume must both exist.
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(req): Json<NewApplication>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    validate_new_application(&req)?;
    state.jobs.get_by_id(&req.job_id).await?;
    state.resumes.get(&req.resume_id).await?;

    let application = state.applications.create(req).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<Application>, AppError> {
    Ok(Json(
        state.applications.update_status(&id, req.status).await?,
    ))
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.applications.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/jobs/:id/application
///
/// Returns `null` when no application exists for the job.
pub async fn handle_application_for_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Option<Application>>, AppError> {
    Ok(Json(state.applications.get_by_job_id(&job_id).await?))
}
