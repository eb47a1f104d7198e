use std::collections::BTreeMap;

use serde::Serialize;

use crate::ranking::compensation::annualized_salary;
use crate::ranking::models::ScoredPosting;
use crate::taxonomy::PathwayProfile;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathwaySummary {
    pub total_postings: usize,
    /// "code - description" → number of postings.
    pub occupation_distribution: BTreeMap<String, usize>,
    pub eligible_count: usize,
    pub eligible_pct: f64,
    /// Priority plus secondary occupations.
    pub any_eligible_count: usize,
    pub above_median_wage: usize,
    pub above_median_pct: f64,
    pub median_annual_wage: f64,
}

pub fn summarize(postings: &[ScoredPosting], pathway: &PathwayProfile) -> PathwaySummary {
    let median = pathway.median_annual_wage();
    let mut distribution = BTreeMap::new();
    let mut eligible = 0;
    let mut any_eligible = 0;
    let mut above_median = 0;

    for scored in postings {
        if !scored.occupation_code.is_empty() {
            let label = format!(
                "{} - {}",
                scored.occupation_code,
                scored.occupation_description.as_deref().unwrap_or("Unknown")
            );
            *distribution.entry(label).or_insert(0) += 1;
        }

        if scored.priority_occupation {
            eligible += 1;
        }
        if pathway.is_any_eligible(&scored.occupation_code) {
            any_eligible += 1;
        }

        let p = &scored.posting;
        let annual = annualized_salary(p.salary_min, p.salary_max, p.salary_interval.as_deref());
        if annual.is_some_and(|a| a >= median) {
            above_median += 1;
        }
    }

    PathwaySummary {
        total_postings: postings.len(),
        occupation_distribution: distribution,
        eligible_count: eligible,
        eligible_pct: percentage(eligible, postings.len()),
        any_eligible_count: any_eligible,
        above_median_wage: above_median,
        above_median_pct: percentage(above_median, postings.len()),
        median_annual_wage: median,
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}
