use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::{NewResume, Resume};
use crate::state::AppState;

/// Request body cap for uploads: room for a 5MB file plus multipart framing,
/// so oversized files reach the explicit size check.
pub const UPLOAD_BODY_LIMIT: usize = 8 * 1024 * 1024;

#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub filename: String,
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(state.resumes.list().await?))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.resumes.get(&id).await?))
}

/// POST /api/v1/resumes
///
/// Multipart upload with a single `file` field holding a PDF of at most 5MB.
/// Only the filename and size are recorded.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Invalid multipart body", e))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("file field has no filename".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read upload", e))?;

        let resume = state
            .resumes
            .upload(NewResume {
                filename,
                size: data.len() as u64,
            })
            .await?;
        return Ok((StatusCode::CREATED, Json(resume)));
    }

    Err(AppError::Validation("missing 'file' field".to_string()))
}

fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::Validation("File size must be less than 5MB".to_string());
    }
    AppError::Validation(format!("{context}: {e}"))
}

/// PATCH /api/v1/resumes/:id
pub async fn handle_rename_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.resumes.rename(&id, &req.filename).await?))
}

/// POST /api/v1/resumes/:id/primary
pub async fn handle_set_primary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.resumes.set_primary(&id).await?))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.resumes.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
