//! Pathway fit: how well a posting lines up with the eligibility pathway's
//! occupation, location and employment conditions.

use crate::taxonomy::PathwayProfile;
use crate::text::contains_any;

pub const PATHWAY_BASELINE: i32 = 50;

const PRIORITY_ROLE_TITLES: &[&str] = &[
    "data scientist", "machine learning", "ml engineer",
    "cybersecurity", "security analyst", "security engineer",
    "software engineer", "software developer",
    "data analyst", "data engineer", "analytics",
    "ai", "artificial intelligence",
    "product manager", "business analyst", "consultant",
];

pub fn score_pathway_fit(
    title: &str,
    description: &str,
    location: &str,
    job_type: &str,
    occupation_code: &str,
    pathway: &PathwayProfile,
) -> u32 {
    let title = title.to_lowercase();
    let description = description.to_lowercase();
    let location_lower = location.to_lowercase();
    let job_type = job_type.to_lowercase();

    let mut score = PATHWAY_BASELINE;

    if pathway.is_priority_occupation(occupation_code) {
        score += 30;
    }

    if contains_any(&title, PRIORITY_ROLE_TITLES) {
        score += 10;
    }

    if pathway.is_in_region(location) {
        score += 10;
    } else if location_lower.contains("remote") {
        score += 5;
    } else if !pathway.country.is_empty() && location_lower.contains(pathway.country.as_str()) {
        score += 3;
    }

    if job_type.contains("full") || job_type.contains("permanent") {
        score += 5;
    } else if job_type.contains("contract") || job_type.contains("temporary") {
        score -= 15;
    }

    if description.contains("permanent") || description.contains("full-time") {
        score += 5;
    }

    if title.contains("senior") && !title.contains("staff") && !title.contains("principal") {
        score += 5;
    } else if title.contains("lead") {
        score += 3;
    } else if title.contains("junior") || title.contains("entry") {
        score -= 5;
    }

    score.clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(title: &str, desc: &str, loc: &str, job_type: &str, code: &str) -> u32 {
        score_pathway_fit(title, desc, loc, job_type, code, &PathwayProfile::default())
    }

    #[test]
    fn test_baseline_with_no_signals() {
        assert_eq!(score("Barista", "", "", "", ""), 50);
    }

    #[test]
    fn test_priority_occupation_and_title() {
        // 50 + 30 code + 10 title
        assert_eq!(score("Data Scientist", "", "", "", "21211"), 90);
        // non-priority code adds nothing
        assert_eq!(score("Data Scientist", "", "", "", "11201"), 60);
    }

    #[test]
    fn test_location_priority_order() {
        assert_eq!(score("Barista", "", "Vancouver, BC", "", ""), 60);
        assert_eq!(score("Barista", "", "Remote - Canada", "", ""), 55);
        assert_eq!(score("Barista", "", "Toronto, Canada", "", ""), 53);
        assert_eq!(score("Barista", "", "Austin, TX", "", ""), 50);
    }

    #[test]
    fn test_contract_penalty_and_description_bonus_stack() {
        assert_eq!(score("Barista", "", "", "Contract", ""), 35);
        assert_eq!(score("Barista", "", "", "Full-time", ""), 55);
        // job_type and description both mention full-time
        assert_eq!(score("Barista", "This is a full-time role", "", "fulltime", ""), 60);
        // description bonus is independent of a contract job type
        assert_eq!(score("Barista", "path to permanent", "", "temporary", ""), 40);
    }

    #[test]
    fn test_seniority_branches() {
        assert_eq!(score("Senior Barista", "", "", "", ""), 55);
        assert_eq!(score("Senior Staff Barista", "", "", "", ""), 50);
        assert_eq!(score("Principal Barista Lead", "", "", "", ""), 53);
        assert_eq!(score("Junior Barista", "", "", "", ""), 45);
        assert_eq!(score("Entry Level Barista", "", "", "", ""), 45);
    }

    #[test]
    fn test_clamped_to_100() {
        let s = score(
            "Senior Data Scientist",
            "permanent position",
            "Vancouver, BC",
            "Full-time",
            "21211",
        );
        assert_eq!(s, 100);
    }
}
