use std::sync::Arc;

use crate::config::Config;
use crate::ranking::engine::ScoringEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Scoring engine; owns the hot-reloadable taxonomy snapshot.
    pub engine: Arc<ScoringEngine>,
}
