mod applications;
mod config;
mod dashboard;
mod errors;
mod jobs;
mod latency;
mod models;
mod profile;
mod resumes;
mod routes;
mod saved_jobs;
mod seed;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::seed::SeedData;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    let seed = SeedData::load(config.catalog_path.as_deref())?;
    info!(
        "Seeded {} jobs, {} resumes, {} saved jobs, {} applications",
        seed.jobs.len(),
        seed.resumes.len(),
        seed.saved_jobs.len(),
        seed.applications.len()
    );

    if config.simulated_latency_ms > 0 {
        info!("Simulating {}ms latency per request", config.simulated_latency_ms);
    }

    let state = AppState::in_memory(config.clone(), seed)?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
