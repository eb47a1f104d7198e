mod config;
mod errors;
mod models;
mod outreach;
mod pathway;
mod ranking;
mod routes;
mod state;
mod taxonomy;
mod text;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ranking::engine::ScoringEngine;
use crate::routes::build_router;
use crate::state::AppState;
use crate::taxonomy::TaxonomyStore;

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

    info!("Starting Shortlist API v{}", env!("CARGO_PKG_VERSION"));

    // A taxonomy that fails to load or validate is fatal at startup
    let taxonomy = TaxonomyStore::open(config.taxonomy_path.clone())?;
    let engine = Arc::new(ScoringEngine::with_defaults(taxonomy));
    info!(
        "Scoring engine ready (max batch size {})",
        config.max_batch_size
    );

    let state = AppState {
        config: config.clone(),
        engine,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
