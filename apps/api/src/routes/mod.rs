pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::ranking::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Postings API
        .route("/api/v1/postings/score", post(handlers::handle_score))
        .route("/api/v1/postings/rank", post(handlers::handle_rank))
        .route("/api/v1/postings/keywords", post(handlers::handle_keywords))
        .route(
            "/api/v1/postings/keyword-match",
            post(handlers::handle_keyword_match),
        )
        .route(
            "/api/v1/postings/pathway-summary",
            post(handlers::handle_pathway_summary),
        )
        .route(
            "/api/v1/postings/skills-gap",
            post(handlers::handle_skills_gap),
        )
        // Taxonomy API
        .route("/api/v1/taxonomy", get(handlers::handle_taxonomy))
        .route(
            "/api/v1/taxonomy/reload",
            post(handlers::handle_taxonomy_reload),
        )
        .fallback(not_found)
        .with_state(state)
}
