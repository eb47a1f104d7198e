//! Interview-format risk: how likely the hiring loop includes live coding.
//!
//! Higher is better: 100 means almost certainly a discussion/case format,
//! 0 means almost certainly a live coding screen.

use crate::models::posting::JobPosting;
use crate::ranking::models::{Signal, SignalCategory};
use crate::taxonomy::CompanyLists;
use crate::text::{contains_any, first_match};

pub const INTERVIEW_BASELINE: i32 = 50;

/// Roles that almost never include live coding.
const NEVER_CODING_ROLES: &[&str] = &[
    "product manager", "program manager", "project manager",
    "management consultant", "strategy consultant", "consultant",
    "business analyst",
    "analytics manager", "analytics lead", "analytics director",
    "data strategy", "data governance",
    "operations analyst", "operations manager",
    "marketing analyst",
    "insights analyst", "insights manager",
    "chief", "coo", "cto", "vp ",
];

/// Roles that usually include live coding.
const HEAVY_CODING_ROLES: &[&str] = &[
    "machine learning engineer", "ml engineer", "mle",
    "data engineer", "software engineer", "backend engineer",
    "full stack", "frontend engineer",
    "applied scientist",
    "research engineer",
];

/// Roles where the format varies by company.
const MIXED_ROLES: &[&str] = &[
    "data scientist", "data analyst", "product analyst",
    "research scientist", "quantitative analyst",
    "bi analyst", "business intelligence",
];

const CASE_FORMAT_PHRASES: &[&str] = &[
    "case study", "take-home", "take home", "presentation", "case presentation",
];

const BUSINESS_FOCUS_PHRASES: &[&str] = &[
    "stakeholder", "cross-functional", "executive", "business partner", "strategic thinking",
];

const BI_FOCUS_PHRASES: &[&str] = &[
    "tableau", "power bi", "looker", "dashboard", "visualization", "reporting",
];

const CODING_ASSESSMENT_PHRASES: &[&str] = &[
    "leetcode", "hackerrank", "coderpad",
    "coding challenge", "coding assessment",
    "live coding", "technical screen",
    "whiteboard",
];

const ENGINEERING_PHRASES: &[&str] = &[
    "system design", "design a system", "production code", "code review",
    "write efficient", "optimize query",
];

const STRONG_PROGRAMMING_PHRASES: &[&str] = &["strong programming", "expert in python"];

/// Industries that traditionally run lighter technical interviews.
const LIGHT_INTERVIEW_INDUSTRIES: &[&str] = &[
    "healthcare", "hospital", "clinic", "pharma",
    "government", "public sector", "crown corporation",
    "insurance", "credit union", "bank",
    "retail", "fashion", "apparel",
    "real estate", "construction",
    "transportation", "transit", "logistics",
    "energy", "mining", "forestry",
    "nonprofit", "non-profit", "ngo",
    "university", "college", "education",
];

pub fn score_interview_format(posting: &JobPosting, companies: &CompanyLists) -> (u32, Vec<Signal>) {
    let title = posting.title.to_lowercase();
    let company = posting.company.to_lowercase();
    let description = posting.description.to_lowercase();

    let mut score = INTERVIEW_BASELINE;
    let mut signals = Vec::new();
    let mut apply = |score: &mut i32, category, delta: i32, reason: String| {
        *score += delta;
        signals.push(Signal::new(category, delta, reason));
    };

    // Role buckets: first bucket with a hit wins.
    if let Some(role) = first_match(&title, NEVER_CODING_ROLES) {
        apply(
            &mut score,
            SignalCategory::RoleType,
            35,
            format!("+35 ('{role}' roles rarely have live coding)"),
        );
    } else if let Some(role) = first_match(&title, HEAVY_CODING_ROLES) {
        apply(
            &mut score,
            SignalCategory::RoleType,
            -30,
            format!("-30 ('{role}' roles almost always have live coding)"),
        );
    } else if let Some(role) = first_match(&title, MIXED_ROLES) {
        apply(
            &mut score,
            SignalCategory::RoleType,
            0,
            format!("0 ('{role}' interview format varies by company)"),
        );
    }

    // Take-home list is only consulted when the live-coding list misses.
    if let Some(c) = first_match(&company, &companies.live_coding) {
        apply(
            &mut score,
            SignalCategory::CompanyFormat,
            -20,
            format!("-20 ({c} is known for live coding interviews)"),
        );
    } else if let Some(c) = first_match(&company, &companies.take_home) {
        apply(
            &mut score,
            SignalCategory::CompanyFormat,
            15,
            format!("+15 ({c} typically uses take-home or discussion format)"),
        );
    }

    let text_rules: [(&[&str], SignalCategory, i32, &str); 6] = [
        (
            CASE_FORMAT_PHRASES,
            SignalCategory::JdFormatPositive,
            15,
            "+15 (JD mentions case study / take-home / presentation)",
        ),
        (
            BUSINESS_FOCUS_PHRASES,
            SignalCategory::JdBusinessFocus,
            10,
            "+10 (JD emphasizes business/stakeholder skills over coding)",
        ),
        (
            BI_FOCUS_PHRASES,
            SignalCategory::JdBiFocus,
            8,
            "+8 (BI/visualization focus, less likely to test raw coding)",
        ),
        (
            CODING_ASSESSMENT_PHRASES,
            SignalCategory::JdCodingSignal,
            -25,
            "-25 (JD explicitly mentions coding test/assessment)",
        ),
        (
            ENGINEERING_PHRASES,
            SignalCategory::JdEngineeringSignal,
            -15,
            "-15 (JD has engineering/system design requirements)",
        ),
        (
            STRONG_PROGRAMMING_PHRASES,
            SignalCategory::JdStrongCoding,
            -10,
            "-10 (JD requires strong/expert programming skills)",
        ),
    ];
    for (phrases, category, delta, reason) in text_rules {
        if contains_any(&description, phrases) {
            apply(&mut score, category, delta, reason.to_string());
        }
    }

    if let Some(industry) = LIGHT_INTERVIEW_INDUSTRIES
        .iter()
        .find(|kw| description.contains(*kw) || company.contains(*kw))
    {
        apply(
            &mut score,
            SignalCategory::Industry,
            10,
            format!("+10 (industry '{industry}' typically has lighter technical interviews)"),
        );
    }

    (score.clamp(0, 100) as u32, signals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, company: &str, description: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn score(p: &JobPosting) -> (u32, Vec<Signal>) {
        score_interview_format(p, &CompanyLists::default())
    }

    fn categories(signals: &[Signal]) -> Vec<SignalCategory> {
        signals.iter().map(|s| s.category).collect()
    }

    #[test]
    fn test_baseline_no_signals() {
        let (s, signals) = score(&posting("Barista", "Joe's Cafe", "Pour coffee"));
        assert_eq!(s, 50);
        assert!(signals.is_empty());
    }

    #[test]
    fn test_never_coding_role_wins_over_heavy_bucket() {
        // "product manager" hits before "software engineer" is even considered
        let (s, signals) = score(&posting("Product Manager, Software Engineering", "", ""));
        assert_eq!(s, 85);
        assert_eq!(signals[0].delta, 35);
    }

    #[test]
    fn test_heavy_coding_role() {
        let (s, signals) = score(&posting("Backend Engineer", "", ""));
        assert_eq!(s, 20);
        assert_eq!(signals[0].category, SignalCategory::RoleType);
        assert_eq!(signals[0].delta, -30);
    }

    #[test]
    fn test_mixed_role_only_adds_a_note() {
        let (s, signals) = score(&posting("Data Analyst", "", ""));
        assert_eq!(s, 50);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].delta, 0);
        assert!(signals[0].reason.contains("data analyst"));
    }

    #[test]
    fn test_live_coding_company_skips_take_home_list() {
        // "amazon" is live-coding; nothing on the take-home list is consulted
        let (s, signals) = score(&posting("Barista", "Amazon", ""));
        assert_eq!(s, 30);
        assert_eq!(categories(&signals), vec![SignalCategory::CompanyFormat]);

        let (s, _) = score(&posting("Barista", "Hootsuite", ""));
        assert_eq!(s, 65);
    }

    #[test]
    fn test_description_signals_accumulate() {
        let (s, signals) = score(&posting(
            "Barista",
            "",
            "Take-home case study. Work with stakeholders on Tableau dashboards.",
        ));
        assert_eq!(s, 50 + 15 + 10 + 8);
        assert_eq!(
            categories(&signals),
            vec![
                SignalCategory::JdFormatPositive,
                SignalCategory::JdBusinessFocus,
                SignalCategory::JdBiFocus,
            ]
        );
    }

    #[test]
    fn test_negative_description_signals() {
        let (s, _) = score(&posting(
            "Barista",
            "",
            "HackerRank screen, system design round, strong programming required",
        ));
        assert_eq!(s, 0);
    }

    #[test]
    fn test_industry_counts_once_from_company_or_description() {
        let (s, signals) = score(&posting("Barista", "City Hospital", "healthcare and insurance"));
        assert_eq!(s, 60);
        assert_eq!(signals.len(), 1);
        assert!(signals[0].reason.contains("healthcare"));
    }

    #[test]
    fn test_clamped_at_zero() {
        let (s, _) = score(&posting(
            "Software Engineer",
            "Google",
            "LeetCode rounds, code review, expert in python",
        ));
        assert_eq!(s, 0);
    }
}
