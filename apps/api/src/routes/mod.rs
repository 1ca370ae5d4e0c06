pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::dashboard;
use crate::jobs::handlers as jobs;
use crate::latency::simulate_latency;
use crate::profile::handlers as profile;
use crate::resumes::handlers as resumes;
use crate::saved_jobs::handlers as saved_jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Jobs
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/search", get(jobs::handle_search_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route(
            "/api/v1/jobs/:id/application",
            get(applications::handle_application_for_job),
        )
        .route(
            "/api/v1/jobs/:id/saved",
            get(saved_jobs::handle_job_saved_status),
        )
        // Resumes
        .route(
            "/api/v1/resumes",
            get(resumes::handle_list_resumes).post(resumes::handle_upload_resume).layer(
                DefaultBodyLimit::max(resumes::UPLOAD_BODY_LIMIT),
            ),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume)
                .patch(resumes::handle_rename_resume)
                .delete(resumes::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/primary",
            post(resumes::handle_set_primary),
        )
        // Saved jobs
        .route(
            "/api/v1/saved-jobs",
            get(saved_jobs::handle_list_saved_jobs).post(saved_jobs::handle_save_job),
        )
        .route(
            "/api/v1/saved-jobs/:id",
            get(saved_jobs::handle_get_saved_job).delete(saved_jobs::handle_delete_saved_job),
        )
        .route(
            "/api/v1/saved-jobs/by-job/:job_id",
            delete(saved_jobs::handle_unsave_job),
        )
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications)
                .post(applications::handle_create_application),
        )
        .route(
            "/api/v1/applications/:id",
            get(applications::handle_get_application)
                .delete(applications::handle_delete_application),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(applications::handle_update_status),
        )
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).patch(profile::handle_update_profile),
        )
        .route(
            "/api/v1/profile/experience",
            post(profile::handle_add_experience),
        )
        .route(
            "/api/v1/profile/experience/:id",
            patch(profile::handle_update_experience).delete(profile::handle_delete_experience),
        )
        .route(
            "/api/v1/profile/education",
            post(profile::handle_add_education),
        )
        .route(
            "/api/v1/profile/education/:id",
            patch(profile::handle_update_education).delete(profile::handle_delete_education),
        )
        // Dashboard
        .route(
            "/api/v1/dashboard/stats",
            get(dashboard::handle_dashboard_stats),
        )
        .layer(from_fn_with_state(state.clone(), simulate_latency));

    api.route("/health", get(health::health_handler))
        .with_state(state)
}
