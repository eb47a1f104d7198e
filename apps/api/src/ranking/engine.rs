use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::posting::JobPosting;
use crate::outreach::{CompanyPresenceNetworking, NetworkingScorer};
use crate::pathway::{describe_occupation, OccupationGuesser, TitleOccupationGuesser};
use crate::ranking::compensation::score_compensation;
use crate::ranking::composite::{compute_total, priority_for, ScoringConfig};
use crate::ranking::interview::score_interview_format;
use crate::ranking::models::{DimensionScores, ScoreSet, ScoredPosting};
use crate::ranking::pathway_fit::score_pathway_fit;
use crate::ranking::reputation::score_employer_reputation;
use crate::ranking::skills::score_skills;
use crate::ranking::success::score_success_probability;
use crate::ranking::tier::classify_tier;
use crate::taxonomy::store::TaxonomyStore;
use crate::taxonomy::Taxonomy;

/// Scores and ranks postings against the active taxonomy snapshot.
pub struct ScoringEngine {
    taxonomy: TaxonomyStore,
    config: ScoringConfig,
    networking: Arc<dyn NetworkingScorer>,
    occupations: Arc<dyn OccupationGuesser>,
}

impl ScoringEngine {
    pub fn new(
        taxonomy: TaxonomyStore,
        config: ScoringConfig,
        networking: Arc<dyn NetworkingScorer>,
        occupations: Arc<dyn OccupationGuesser>,
    ) -> Self {
        Self {
            taxonomy,
            config,
            networking,
            occupations,
        }
    }

    /// Engine with the default collaborators and weights.
    pub fn with_defaults(taxonomy: TaxonomyStore) -> Self {
        Self::new(
            taxonomy,
            ScoringConfig::default(),
            Arc::new(CompanyPresenceNetworking::default()),
            Arc::new(TitleOccupationGuesser),
        )
    }

    pub fn taxonomy(&self) -> &TaxonomyStore {
        &self.taxonomy
    }

    pub fn score_posting(&self, posting: JobPosting) -> Result<ScoredPosting, AppError> {
        let taxonomy = self.taxonomy.snapshot();
        self.score_with(&taxonomy, posting)
    }

    /// Scores a batch against one taxonomy snapshot and sorts by total,
    /// highest first. Ties keep their input order.
    pub fn rank_postings(&self, postings: Vec<JobPosting>) -> Result<Vec<ScoredPosting>, AppError> {
        let taxonomy = self.taxonomy.snapshot();
        let count = postings.len();

        let mut scored = postings
            .into_par_iter()
            .map(|posting| self.score_with(&taxonomy, posting))
            .collect::<Result<Vec<_>, _>>()?;

        scored.sort_by(|a, b| b.scores.total.total_cmp(&a.scores.total));

        info!(count, "Ranked postings");
        Ok(scored)
    }

    fn score_with(&self, taxonomy: &Taxonomy, posting: JobPosting) -> Result<ScoredPosting, AppError> {
        score_posting(
            posting,
            taxonomy,
            &self.config,
            self.networking.as_ref(),
            self.occupations.as_ref(),
        )
    }
}

/// One full scoring pass. Pure: the same inputs always give the same output.
pub fn score_posting(
    posting: JobPosting,
    taxonomy: &Taxonomy,
    config: &ScoringConfig,
    networking: &dyn NetworkingScorer,
    occupations: &dyn OccupationGuesser,
) -> Result<ScoredPosting, AppError> {
    posting.validate()?;

    let (occupation_code, occupation_description) = match posting
        .occupation_code
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        Some(code) => (code.to_string(), describe_occupation(code).map(str::to_string)),
        None => match occupations.guess(&posting.title) {
            Some(occ) => (occ.code, Some(occ.description).filter(|d| !d.is_empty())),
            None => (String::new(), None),
        },
    };

    let networking_score = networking.networking_score(&posting.company);
    let outreach_tips = networking.outreach_tips(&posting.company);

    let (interview, interview_signals) = score_interview_format(&posting, &taxonomy.companies);
    let (success, success_signals) =
        score_success_probability(&posting, &taxonomy.companies, networking_score);

    let dimensions = DimensionScores {
        skills: score_skills(&posting.title, &posting.description, &taxonomy.skills),
        pathway: score_pathway_fit(
            &posting.title,
            &posting.description,
            &posting.location,
            &posting.job_type,
            &occupation_code,
            &taxonomy.pathway,
        ),
        interview,
        compensation: score_compensation(
            posting.salary_min,
            posting.salary_max,
            posting.salary_interval.as_deref(),
        ),
        reputation: score_employer_reputation(
            &posting.company,
            &posting.description,
            &taxonomy.companies,
        ),
        success,
    };

    let total = compute_total(&dimensions, &config.weights);
    let priority = priority_for(total, &config.priority);
    let tier = classify_tier(&posting, &dimensions, &taxonomy.companies);

    debug!(
        posting = posting.label(),
        total,
        ?priority,
        ?tier,
        "Scored posting"
    );

    Ok(ScoredPosting {
        priority_occupation: taxonomy.pathway.is_priority_occupation(&occupation_code),
        occupation_code,
        occupation_description,
        networking_score,
        outreach_tips,
        scores: ScoreSet {
            dimensions,
            total,
            priority,
            tier,
            interview_signals,
            success_signals,
        },
        posting,
    })
}
