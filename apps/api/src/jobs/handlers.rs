//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::errors::AppError;
use crate::jobs::query::{JobFilters, JobPage, JobQueryParams};
use crate::models::job::Job;
use crate::state::AppState;

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<JobPage>, AppError> {
    let filters = JobFilters::from(JobQueryParams::from_pairs(pairs));
    let page = state.jobs.list(&filters).await?;
    tracing::debug!(
        "Job query matched {} (page {}/{})",
        page.total,
        page.page,
        page.total_pages
    );
    Ok(Json(page))
}

/// GET /api/v1/jobs/search?q=
///
/// Same as listing with `keyword` taken from `q`.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<JobPage>, AppError> {
    let q = pairs
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.clone());
    let mut filters = JobQueryParams::from_pairs(pairs);
    filters.keyword = q;
    let page = state.jobs.list(&JobFilters::from(filters)).await?;
    Ok(Json(page))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(state.jobs.get_by_id(&id).await?))
}
