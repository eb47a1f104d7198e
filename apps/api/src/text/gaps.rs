//! Skills gap: which skills keep showing up across target postings that the
//! candidate does not hold yet, and which held skills are in demand.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::text::keywords::SkillMention;

/// Number of missing skills turned into learning recommendations.
const MAX_RECOMMENDATIONS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillDemand {
    pub skill: String,
    pub category: String,
    /// Postings mentioning the skill.
    pub frequency: usize,
    pub pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub has: usize,
    pub missing: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillsGapReport {
    /// Postings with at least one skill mention.
    pub total_postings_analyzed: usize,
    pub missing_skills: Vec<SkillDemand>,
    pub strong_skills: Vec<SkillDemand>,
    pub category_breakdown: BTreeMap<String, CategoryBreakdown>,
    pub recommendations: Vec<String>,
}

/// Aggregates per-posting skill mentions. Each skill counts at most once per
/// posting. Both skill lists are ordered by frequency, then by name.
pub fn analyze_gaps(postings: &[Vec<SkillMention>]) -> SkillsGapReport {
    let analyzed: Vec<&Vec<SkillMention>> = postings.iter().filter(|m| !m.is_empty()).collect();
    let total = analyzed.len();
    if total == 0 {
        return SkillsGapReport::default();
    }

    // skill -> (category, user_has, frequency)
    let mut demand: BTreeMap<&str, (&str, bool, usize)> = BTreeMap::new();
    let mut breakdown: BTreeMap<String, CategoryBreakdown> = BTreeMap::new();

    for mentions in analyzed {
        let mut seen = BTreeSet::new();
        for mention in mentions {
            if !seen.insert(mention.skill.as_str()) {
                continue;
            }
            demand
                .entry(mention.skill.as_str())
                .or_insert((mention.category.as_str(), mention.user_has, 0))
                .2 += 1;

            let entry = breakdown.entry(mention.category.clone()).or_default();
            if mention.user_has {
                entry.has += 1;
            } else {
                entry.missing += 1;
            }
            entry.total += 1;
        }
    }

    let mut missing = Vec::new();
    let mut strong = Vec::new();
    for (skill, (category, user_has, frequency)) in demand {
        let row = SkillDemand {
            skill: skill.to_string(),
            category: category.to_string(),
            frequency,
            pct: round1(frequency as f64 / total as f64 * 100.0),
        };
        if user_has {
            strong.push(row);
        } else {
            missing.push(row);
        }
    }
    // stable: ties stay in skill-name order
    missing.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    strong.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    let recommendations = missing
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|s| {
            format!(
                "Learn {}: appears in {:.1}% of target postings",
                title_case(&s.skill),
                s.pct
            )
        })
        .collect();

    SkillsGapReport {
        total_postings_analyzed: total,
        missing_skills: missing,
        strong_skills: strong,
        category_breakdown: breakdown,
        recommendations,
    }
}

fn title_case(skill: &str) -> String {
    skill
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
