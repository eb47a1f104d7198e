//! Axum route handlers for the Ranking API.

use anyhow::Context;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::posting::JobPosting;
use crate::pathway::{summarize, PathwaySummary};
use crate::ranking::models::ScoredPosting;
use crate::state::AppState;
use crate::taxonomy::TaxonomySummary;
use crate::text::gaps::{analyze_gaps, SkillsGapReport};
use crate::text::keywords::{
    extract_keywords, match_keywords, skill_mentions, KeywordExtraction, KeywordMatchReport,
    SkillMention,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub postings: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub count: usize,
    pub postings: Vec<ScoredPosting>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: KeywordExtraction,
    pub skills: Vec<SkillMention>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordMatchRequest {
    pub description: String,
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillsGapRequest {
    pub descriptions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TaxonomyReloadResponse {
    pub status: &'static str,
    pub taxonomy: TaxonomySummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/postings/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(posting): Json<JobPosting>,
) -> Result<Json<ScoredPosting>, AppError> {
    let scored = state.engine.score_posting(posting)?;
    Ok(Json(scored))
}

/// POST /api/v1/postings/rank
///
/// Scoring is CPU-bound, so the batch runs on the blocking pool.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let postings = rank_batch(&state, request.postings).await?;
    Ok(Json(RankResponse {
        count: postings.len(),
        postings,
    }))
}

/// POST /api/v1/postings/keywords
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation("description cannot be empty".to_string()));
    }

    let taxonomy = state.engine.taxonomy().snapshot();
    let keywords = extract_keywords(&request.description, &taxonomy.keywords);
    let skills = skill_mentions(&keywords, &taxonomy.skills);

    Ok(Json(KeywordsResponse { keywords, skills }))
}

/// POST /api/v1/postings/keyword-match
pub async fn handle_keyword_match(
    State(state): State<AppState>,
    Json(request): Json<KeywordMatchRequest>,
) -> Result<Json<KeywordMatchReport>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation("description cannot be empty".to_string()));
    }
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    let taxonomy = state.engine.taxonomy().snapshot();
    let keywords = extract_keywords(&request.description, &taxonomy.keywords);

    Ok(Json(match_keywords(&keywords, &request.resume_text)))
}

/// POST /api/v1/postings/pathway-summary
pub async fn handle_pathway_summary(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<PathwaySummary>, AppError> {
    let scored = rank_batch(&state, request.postings).await?;
    let taxonomy = state.engine.taxonomy().snapshot();
    Ok(Json(summarize(&scored, &taxonomy.pathway)))
}

/// POST /api/v1/postings/skills-gap
///
/// Aggregates skill mentions over a set of target job descriptions.
pub async fn handle_skills_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillsGapRequest>,
) -> Result<Json<SkillsGapReport>, AppError> {
    let limit = state.config.max_batch_size;
    if request.descriptions.len() > limit {
        return Err(AppError::Validation(format!(
            "batch of {} descriptions exceeds the limit of {limit}",
            request.descriptions.len()
        )));
    }

    let taxonomy = state.engine.taxonomy().snapshot();
    let mentions: Vec<_> = request
        .descriptions
        .iter()
        .map(|description| {
            let keywords = extract_keywords(description, &taxonomy.keywords);
            skill_mentions(&keywords, &taxonomy.skills)
        })
        .collect();

    Ok(Json(analyze_gaps(&mentions)))
}

/// GET /api/v1/taxonomy
pub async fn handle_taxonomy(State(state): State<AppState>) -> Json<TaxonomySummary> {
    Json(state.engine.taxonomy().snapshot().summary())
}

/// POST /api/v1/taxonomy/reload
///
/// A rejected reload leaves the active taxonomy in place and reports why.
pub async fn handle_taxonomy_reload(
    State(state): State<AppState>,
) -> Result<Json<TaxonomyReloadResponse>, AppError> {
    let taxonomy = state.engine.taxonomy().reload()?;
    Ok(Json(TaxonomyReloadResponse {
        status: "reloaded",
        taxonomy: taxonomy.summary(),
    }))
}

async fn rank_batch(state: &AppState, postings: Vec<JobPosting>) -> Result<Vec<ScoredPosting>, AppError> {
    let limit = state.config.max_batch_size;
    if postings.len() > limit {
        return Err(AppError::Validation(format!(
            "batch of {} postings exceeds the limit of {limit}",
            postings.len()
        )));
    }

    let engine = state.engine.clone();
    tokio::task::spawn_blocking(move || engine.rank_postings(postings))
        .await
        .context("ranking task panicked")?
}
