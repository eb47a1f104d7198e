//! Tier classification: A (stretch), B (sweet spot), C (quick win).
//!
//! Not a score bucket. Two hard overrides are checked first and short-circuit
//! everything else; only then are stretch/quick-win signals counted. The order
//! of the steps below decides outcomes and must not change.

use crate::models::posting::JobPosting;
use crate::ranking::models::{DimensionScores, Tier};
use crate::ranking::success::LOCAL_EXPERIENCE_PHRASES;
use crate::taxonomy::CompanyLists;
use crate::text::contains_any;

/// Below this interview score a live coding round is near certain.
pub const INTERVIEW_HARD_FLOOR: u32 = 30;

const ENGINEERING_TITLES: &[&str] = &[
    "data engineer", "software engineer", "ml engineer",
    "machine learning engineer", "backend", "frontend",
    "platform engineer", "devops",
];

const SENIOR_TITLES: &[&str] = &["senior", "staff", "principal", "lead", "head"];
const JUNIOR_TITLES: &[&str] = &["junior", "associate", "entry"];
const NON_CODING_TITLES: &[&str] = &["product manager", "consultant", "business analyst"];
const NICHE_TITLES: &[&str] = &["cybersecurity", "insurance", "quant"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierSignals {
    pub stretch: u32,
    pub quickwin: u32,
}

/// Counts every checklist item independently; nothing here short-circuits.
pub fn count_tier_signals(posting: &JobPosting, interview: u32, companies: &CompanyLists) -> TierSignals {
    let title = posting.title.to_lowercase();
    let company = posting.company.to_lowercase();
    let description = posting.description.to_lowercase();
    let job_type = posting.job_type.to_lowercase();

    let mut signals = TierSignals::default();

    if interview >= 70 {
        signals.quickwin += 1;
    } else if interview < 45 {
        signals.stretch += 1;
    }

    if contains_any(&title, SENIOR_TITLES) {
        signals.stretch += 1;
    }
    if contains_any(&company, &companies.top_tier) {
        signals.stretch += 1;
    }
    if contains_any(&description, LOCAL_EXPERIENCE_PHRASES) {
        signals.stretch += 2;
    }

    if contains_any(&title, JUNIOR_TITLES) {
        signals.quickwin += 1;
    }
    if job_type.contains("contract") {
        signals.quickwin += 1;
    }
    if contains_any(&title, NON_CODING_TITLES) {
        signals.quickwin += 1;
    }
    if contains_any(&company, &companies.small_or_startup) {
        signals.quickwin += 1;
    }
    if contains_any(&title, NICHE_TITLES) {
        signals.quickwin += 1;
    }

    signals
}

pub fn classify_tier(posting: &JobPosting, dims: &DimensionScores, companies: &CompanyLists) -> Tier {
    // 1. live coding near certain
    if dims.interview < INTERVIEW_HARD_FLOOR {
        return Tier::A;
    }

    // 2. pure engineering role
    if contains_any(&posting.title.to_lowercase(), ENGINEERING_TITLES) {
        return Tier::A;
    }

    // 3–4. signal accumulation
    let signals = count_tier_signals(posting, dims.interview, companies);
    if signals.stretch >= 2 && signals.quickwin < 2 {
        Tier::A
    } else if signals.quickwin >= 2 || dims.success >= 60 {
        Tier::C
    } else {
        Tier::B
    }
}
