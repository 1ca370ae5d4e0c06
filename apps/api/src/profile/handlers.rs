use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::profile::{
    EducationPatch, ExperiencePatch, NewEducation, NewExperience, ProfilePatch, UserProfile,
};
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.profile.get().await?))
}

/// PATCH /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.profile.update(patch).await?))
}

/// POST /api/v1/profile/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Json(req): Json<NewExperience>,
) -> Result<(StatusCode, Json<UserProfile>), AppError> {
    let profile = state.profile.add_experience(req).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// PATCH /api/v1/profile/experience/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.profile.update_experience(&id, patch).await?))
}

/// DELETE /api/v1/profile/experience/:id
pub async fn handle_delete_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.profile.delete_experience(&id).await?))
}

/// POST /api/v1/profile/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Json(req): Json<NewEducation>,
) -> Result<(StatusCode, Json<UserProfile>), AppError> {
    let profile = state.profile.add_education(req).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// PATCH /api/v1/profile/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.profile.update_education(&id, patch).await?))
}

/// DELETE /api/v1/profile/education/:id
pub async fn handle_delete_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.profile.delete_education(&id).await?))
}
