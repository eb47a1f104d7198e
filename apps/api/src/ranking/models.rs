use serde::{Deserialize, Serialize};

use crate::models::posting::JobPosting;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A = stretch, B = sweet spot, C = quick win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    // interview format
    RoleType,
    CompanyFormat,
    JdFormatPositive,
    JdBusinessFocus,
    JdBiFocus,
    JdCodingSignal,
    JdEngineeringSignal,
    JdStrongCoding,
    Industry,
    // success probability
    ExperienceMatch,
    LocalExperience,
    CompanyOpenness,
    DiversitySignal,
    VisaSignal,
    Competition,
    NicheSecurityData,
    NicheRegionalMarket,
    NicheQuant,
    NicheInsurance,
    NicheGraph,
    NicheConsulting,
    Networking,
}

/// One rule that fired while scoring a dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub category: SignalCategory,
    pub delta: i32,
    pub reason: String,
}

impl Signal {
    pub fn new(category: SignalCategory, delta: i32, reason: impl Into<String>) -> Self {
        Self {
            category,
            delta,
            reason: reason.into(),
        }
    }
}

/// The six dimension scores, each in 0–100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub skills: u32,
    pub pathway: u32,
    pub interview: u32,
    pub compensation: u32,
    pub reputation: u32,
    pub success: u32,
}

/// Everything one scoring pass derives for a posting. Re-scoring builds a
/// fresh `ScoreSet`; nothing here is patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    #[serde(flatten)]
    pub dimensions: DimensionScores,
    pub total: f64,
    pub priority: Priority,
    pub tier: Tier,
    pub interview_signals: Vec<Signal>,
    pub success_signals: Vec<Signal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPosting {
    pub posting: JobPosting,
    /// Code the pathway score was computed with; empty when unknown.
    pub occupation_code: String,
    pub occupation_description: Option<String>,
    pub priority_occupation: bool,
    pub networking_score: u32,
    pub outreach_tips: Vec<String>,
    pub scores: ScoreSet,
}
