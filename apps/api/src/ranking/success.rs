//! Success probability: a realistic estimate of landing an interview for a
//! candidate whose experience was mostly gained abroad.
//!
//! Every block records what it contributed; the signal list is part of the
//! output, not debug logging.

use crate::models::posting::JobPosting;
use crate::ranking::models::{Signal, SignalCategory};
use crate::taxonomy::CompanyLists;
use crate::text::contains_any;

pub const SUCCESS_BASELINE: i32 = 40;
pub const NETWORKING_CAP: u32 = 15;

/// Phrases that mean the employer explicitly wants in-country experience.
pub const LOCAL_EXPERIENCE_PHRASES: &[&str] = &["canadian experience", "local experience"];

const SENIOR_TITLES: &[&str] = &["senior", "sr.", "sr "];
const LEADERSHIP_TITLES: &[&str] = &["lead", "principal", "staff", "head", "director"];
const JUNIOR_TITLES: &[&str] = &["junior", "jr.", "associate", "entry"];

const GLOBAL_PHRASES: &[&str] = &["global", "cross-border", "multinational", "multilingual"];

const DIVERSITY_PHRASES: &[&str] = &[
    "diversity", "equity", "inclusion", "dei", "equal opportunity",
    "diverse backgrounds", "underrepresented", "belong",
];

const SPONSORSHIP_PHRASES: &[&str] = &["visa sponsorship", "work permit"];
const SPONSORSHIP_NEGATIONS: &[&str] = &["no visa", "no sponsorship", "not sponsor"];

const REGIONAL_MARKET_PHRASES: &[&str] = &["chinese market", "china", "apac", "asia pacific", "mandarin"];
const INSURANCE_PHRASES: &[&str] = &["insurance", "insurtech"];
const GRAPH_PHRASES: &[&str] = &["graph neural", "gnn", "knowledge graph"];

pub fn score_success_probability(
    posting: &JobPosting,
    companies: &CompanyLists,
    networking_score: u32,
) -> (u32, Vec<Signal>) {
    let title = posting.title.to_lowercase();
    let description = posting.description.to_lowercase();
    let company = posting.company.to_lowercase();
    let location = posting.location.to_lowercase();

    let mut signals = Vec::new();

    // Seniority: exactly one branch.
    let (delta, reason) = if contains_any(&title, SENIOR_TITLES) {
        (5, "+5 (senior role, experience is there but gained overseas)")
    } else if contains_any(&title, LEADERSHIP_TITLES) {
        (-5, "-5 (leadership role, usually needs a local track record)")
    } else if contains_any(&title, JUNIOR_TITLES) {
        (10, "+10 (junior role, easy to qualify for but may read as overqualified)")
    } else {
        (15, "+15 (mid-level role, good fit)")
    };
    signals.push(Signal::new(SignalCategory::ExperienceMatch, delta, reason));

    // Outsider penalty: first matching branch replaces the default.
    let (delta, reason) = if contains_any(&description, LOCAL_EXPERIENCE_PHRASES) {
        (-25, "-25 (JD explicitly requires local experience)")
    } else if description.contains("international")
        && (description.contains("welcome") || description.contains("valued"))
    {
        (-5, "-5 (JD welcomes international experience)")
    } else if contains_any(&description, GLOBAL_PHRASES) {
        (-8, "-8 (role involves global work, an international background is relevant)")
    } else if location.contains("remote") {
        (-10, "-10 (remote role, less local bias)")
    } else {
        (-15, "-15 (no signals about international candidates)")
    };
    signals.push(Signal::new(SignalCategory::LocalExperience, delta, reason));

    // Openness: cumulative.
    if contains_any(&company, &companies.outreach_friendly) {
        signals.push(Signal::new(
            SignalCategory::CompanyOpenness,
            10,
            "+10 (company known to hire international talent)",
        ));
    }
    if contains_any(&description, DIVERSITY_PHRASES) {
        signals.push(Signal::new(
            SignalCategory::DiversitySignal,
            5,
            "+5 (JD has diversity language)",
        ));
    }
    if contains_any(&description, SPONSORSHIP_PHRASES) {
        if contains_any(&description, SPONSORSHIP_NEGATIONS) {
            signals.push(Signal::new(
                SignalCategory::VisaSignal,
                -10,
                "-10 (explicitly will not sponsor)",
            ));
        } else {
            signals.push(Signal::new(
                SignalCategory::VisaSignal,
                5,
                "+5 (mentions visa sponsorship positively)",
            ));
        }
    }

    // Competition: exactly one branch.
    let (delta, reason) = if contains_any(&company, &companies.top_tier) {
        if title.contains("senior") || title.contains("lead") {
            (-15, "-15 (senior role at a top company, extremely competitive)")
        } else {
            (-8, "-8 (top company, competitive)")
        }
    } else if contains_any(&company, &companies.small_or_startup) {
        (-3, "-3 (smaller company, less competition)")
    } else {
        (-5, "-5 (average competition)")
    };
    signals.push(Signal::new(SignalCategory::Competition, delta, reason));

    // Niche advantages: every rule that matches adds its bonus.
    let niche_rules: [(bool, SignalCategory, i32, &str); 6] = [
        (
            title.contains("cybersecurity")
                && (title.contains("data")
                    || title.contains("ml")
                    || description.contains("machine learning")),
            SignalCategory::NicheSecurityData,
            10,
            "+10 (cybersecurity combined with data science is a rare niche)",
        ),
        (
            contains_any(&description, REGIONAL_MARKET_PHRASES),
            SignalCategory::NicheRegionalMarket,
            10,
            "+10 (role values China/APAC market experience)",
        ),
        (
            title.contains("quantitative") || title.contains("quant"),
            SignalCategory::NicheQuant,
            8,
            "+8 (quantitative role matches a private-equity background)",
        ),
        (
            contains_any(&description, INSURANCE_PHRASES),
            SignalCategory::NicheInsurance,
            8,
            "+8 (insurance domain experience applies)",
        ),
        (
            contains_any(&description, GRAPH_PHRASES),
            SignalCategory::NicheGraph,
            10,
            "+10 (graph ML expertise is a strong differentiator)",
        ),
        (
            title.contains("consulting") || title.contains("consultant"),
            SignalCategory::NicheConsulting,
            8,
            "+8 (consulting role matches a consulting background)",
        ),
    ];
    for (matched, category, delta, reason) in niche_rules {
        if matched {
            signals.push(Signal::new(category, delta, reason));
        }
    }

    let networking = networking_score.min(NETWORKING_CAP);
    signals.push(Signal::new(
        SignalCategory::Networking,
        networking as i32,
        format!("+{networking} (networking potential at this company)"),
    ));

    let score = SUCCESS_BASELINE + signals.iter().map(|s| s.delta).sum::<i32>();
    (score.clamp(0, 100) as u32, signals)
}
