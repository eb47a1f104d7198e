//! Keyword extraction: ATS-style categorized keyword hits for a job
//! description, and a weighted match of those hits against resume text.

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::taxonomy::{KeywordCategories, SkillTaxonomy};
use crate::text::{normalize, variants};

/// Matches "5+ years of experience", "3 yrs exp", "10 years experience".
static YEARS_REQUIRED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of)?\s*(?:experience|exp)")
        .expect("Invalid years-required regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    HardSkills,
    SoftSkills,
    ExperienceMarkers,
    EducationMarkers,
    ActionVerbs,
}

impl KeywordCategory {
    pub fn weight(self) -> f64 {
        match self {
            KeywordCategory::HardSkills => 3.0,
            KeywordCategory::SoftSkills => 1.0,
            KeywordCategory::ExperienceMarkers => 2.0,
            KeywordCategory::EducationMarkers => 1.5,
            KeywordCategory::ActionVerbs => 0.5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeywordCategory::HardSkills => "hard_skills",
            KeywordCategory::SoftSkills => "soft_skills",
            KeywordCategory::ExperienceMarkers => "experience_markers",
            KeywordCategory::EducationMarkers => "education_markers",
            KeywordCategory::ActionVerbs => "action_verbs",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordExtraction {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experience_markers: Vec<String>,
    pub education_markers: Vec<String>,
    pub action_verbs: Vec<String>,
    pub years_required: Option<u32>,
}

impl KeywordExtraction {
    pub fn by_category(&self) -> [(KeywordCategory, &[String]); 5] {
        [
            (KeywordCategory::HardSkills, self.hard_skills.as_slice()),
            (KeywordCategory::SoftSkills, self.soft_skills.as_slice()),
            (KeywordCategory::ExperienceMarkers, self.experience_markers.as_slice()),
            (KeywordCategory::EducationMarkers, self.education_markers.as_slice()),
            (KeywordCategory::ActionVerbs, self.action_verbs.as_slice()),
        ]
    }
}

/// A keyword found in a posting, labelled with whether the candidate holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMention {
    pub skill: String,
    pub category: String,
    pub user_has: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: KeywordCategory,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub percentage: f64,
}

/// How likely a resume is to get through keyword-based screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchGrade {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchGrade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            MatchGrade::Excellent
        } else if percentage >= 65.0 {
            MatchGrade::Good
        } else if percentage >= 50.0 {
            MatchGrade::Fair
        } else {
            MatchGrade::Low
        }
    }

    pub fn assessment(self) -> &'static str {
        match self {
            MatchGrade::Excellent => "High chance of passing ATS",
            MatchGrade::Good => "Likely to pass most ATS systems",
            MatchGrade::Fair => "May pass some ATS systems, optimization needed",
            MatchGrade::Low => "Likely filtered out by ATS",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatchReport {
    pub percentage: f64,
    pub grade: MatchGrade,
    pub assessment: String,
    pub total_score: f64,
    pub max_score: f64,
    pub categories: Vec<CategoryMatch>,
}

/// Extracts categorized keywords from a job description.
///
/// Hard skills match as given or with hyphen/space swapped, longest phrase
/// first. Soft skills and markers are plain substrings. Action verbs must be
/// whole words of the normalized text.
pub fn extract_keywords(description: &str, keywords: &KeywordCategories) -> KeywordExtraction {
    let lower = description.to_lowercase();

    let mut hard: Vec<&String> = keywords.hard_skills.iter().collect();
    hard.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let hard_skills = hard
        .into_iter()
        .filter(|skill| {
            lower.contains(skill.as_str())
                || lower.contains(&skill.replace(' ', "-"))
                || lower.contains(&skill.replace('-', " "))
        })
        .cloned()
        .collect();

    let substring_hits = |list: &[String]| -> Vec<String> {
        list.iter()
            .filter(|kw| lower.contains(kw.as_str()))
            .cloned()
            .collect()
    };

    let normalized = normalize(description);
    let words: HashSet<&str> = normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let action_verbs = keywords
        .action_verbs
        .iter()
        .filter(|v| words.contains(v.as_str()))
        .cloned()
        .collect();

    let years_required = YEARS_REQUIRED
        .captures_iter(&lower)
        .filter_map(|cap| cap[1].parse::<u32>().ok())
        .max();

    KeywordExtraction {
        hard_skills,
        soft_skills: substring_hits(&keywords.soft_skills),
        experience_markers: substring_hits(&keywords.experience_markers),
        education_markers: substring_hits(&keywords.education_markers),
        action_verbs,
        years_required,
    }
}

/// Flattens an extraction into deduplicated skill mentions, categorized by the
/// taxonomy lookup when it knows the skill.
pub fn skill_mentions(extraction: &KeywordExtraction, skills: &SkillTaxonomy) -> Vec<SkillMention> {
    let mut seen = BTreeSet::new();
    let mut mentions = Vec::new();

    for (category, hits) in extraction.by_category() {
        for hit in hits {
            let skill = hit.to_lowercase();
            if !seen.insert(skill.clone()) {
                continue;
            }
            mentions.push(SkillMention {
                category: skills
                    .category_of(&skill)
                    .unwrap_or(category.as_str())
                    .to_string(),
                user_has: skills.user_has(&skill),
                skill,
            });
        }
    }

    mentions
}

/// Weighted share of extracted keywords that appear (in any variant) in the
/// normalized resume text. Empty categories are skipped.
pub fn match_keywords(extraction: &KeywordExtraction, resume_text: &str) -> KeywordMatchReport {
    let surface = normalize(resume_text);
    let mut total_score = 0.0;
    let mut max_score = 0.0;
    let mut categories = Vec::new();

    for (category, hits) in extraction.by_category() {
        if hits.is_empty() {
            continue;
        }

        let (matched, missing): (Vec<String>, Vec<String>) = hits
            .iter()
            .cloned()
            .partition(|kw| variants(kw).iter().any(|v| surface.contains(v.as_str())));

        let weight = category.weight();
        total_score += matched.len() as f64 * weight;
        max_score += hits.len() as f64 * weight;

        categories.push(CategoryMatch {
            category,
            percentage: round1(matched.len() as f64 / hits.len() as f64 * 100.0),
            matched,
            missing,
        });
    }

    let percentage = if max_score > 0.0 {
        round1(total_score / max_score * 100.0)
    } else {
        0.0
    };

    let grade = MatchGrade::from_percentage(percentage);
    KeywordMatchReport {
        percentage,
        grade,
        assessment: grade.assessment().to_string(),
        total_score,
        max_score,
        categories,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Taxonomy;

    const JD: &str = "We need a Senior Data Scientist with 5+ years of experience in Python, \
        SQL and machine-learning. You will collaborate with cross-functional stakeholders, \
        build A/B testing frameworks and mentor juniors. Led projects a plus. \
        Bachelor in Statistics required; 3 yrs exp with Tableau.";

    fn keywords() -> KeywordCategories {
        KeywordCategories::default()
    }

    #[test]
    fn test_extracts_hard_skills_with_hyphen_variant() {
        let ex = extract_keywords(JD, &keywords());
        assert!(ex.hard_skills.contains(&"python".to_string()));
        assert!(ex.hard_skills.contains(&"machine learning".to_string()));
        assert!(ex.hard_skills.contains(&"a/b testing".to_string()));
        assert!(ex.hard_skills.contains(&"tableau".to_string()));
        assert!(!ex.hard_skills.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn test_hard_skills_longest_first() {
        let ex = extract_keywords(JD, &keywords());
        let lens: Vec<usize> = ex.hard_skills.iter().map(|s| s.len()).collect();
        let mut sorted = lens.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lens, sorted);
    }

    #[test]
    fn test_action_verbs_are_whole_words() {
        let ex = extract_keywords("Led the team. Misled nobody. Built tooling.", &keywords());
        assert_eq!(ex.action_verbs, vec!["led".to_string(), "built".to_string()]);

        let ex = extract_keywords("the rebuilt pipeline was misled", &keywords());
        assert!(ex.action_verbs.is_empty());
    }

    #[test]
    fn test_years_required_takes_max() {
        let ex = extract_keywords(JD, &keywords());
        assert_eq!(ex.years_required, Some(5));

        let ex = extract_keywords("no experience figure here", &keywords());
        assert_eq!(ex.years_required, None);
    }

    #[test]
    fn test_markers_and_soft_skills() {
        let ex = extract_keywords(JD, &keywords());
        assert!(ex.soft_skills.contains(&"cross-functional".to_string()));
        assert!(ex.soft_skills.contains(&"stakeholder".to_string()));
        assert!(ex.experience_markers.contains(&"senior".to_string()));
        assert!(ex.education_markers.contains(&"bachelor".to_string()));
        assert!(ex.education_markers.contains(&"statistics".to_string()));
    }

    #[test]
    fn test_skill_mentions_dedup_and_user_has() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let ex = extract_keywords(JD, &taxonomy.keywords);
        let mentions = skill_mentions(&ex, &taxonomy.skills);

        let ml: Vec<_> = mentions.iter().filter(|m| m.skill == "machine learning").collect();
        assert_eq!(ml.len(), 1);
        assert_eq!(ml[0].category, "ml_ai");
        assert!(ml[0].user_has);

        let stakeholder = mentions.iter().find(|m| m.skill == "stakeholder").unwrap();
        assert_eq!(stakeholder.category, "soft_skills");
        assert!(!stakeholder.user_has);
    }

    #[test]
    fn test_match_keywords_uses_variants() {
        let ex = KeywordExtraction {
            hard_skills: vec!["ci/cd".to_string(), "power bi".to_string(), "rust".to_string()],
            ..Default::default()
        };
        let report = match_keywords(&ex, "Shipped CI CD pipelines and Power-BI dashboards.");
        let hard = &report.categories[0];
        assert_eq!(hard.matched, vec!["ci/cd".to_string(), "power bi".to_string()]);
        assert_eq!(hard.missing, vec!["rust".to_string()]);
        assert_eq!(hard.percentage, 66.7);
        assert_eq!(report.percentage, 66.7);
        assert_eq!(report.grade, MatchGrade::Good);
    }

    #[test]
    fn test_match_keywords_weights_categories() {
        let ex = KeywordExtraction {
            hard_skills: vec!["python".to_string()],
            action_verbs: vec!["led".to_string()],
            ..Default::default()
        };
        // hard skill matched (3.0 of 3.0), verb missed (0 of 0.5)
        let report = match_keywords(&ex, "python");
        assert_eq!(report.total_score, 3.0);
        assert_eq!(report.max_score, 3.5);
        assert_eq!(report.percentage, 85.7);
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.grade, MatchGrade::Excellent);
        assert_eq!(report.assessment, "High chance of passing ATS");
    }

    #[test]
    fn test_grade_thresholds_are_inclusive() {
        assert_eq!(MatchGrade::from_percentage(80.0), MatchGrade::Excellent);
        assert_eq!(MatchGrade::from_percentage(79.9), MatchGrade::Good);
        assert_eq!(MatchGrade::from_percentage(65.0), MatchGrade::Good);
        assert_eq!(MatchGrade::from_percentage(64.9), MatchGrade::Fair);
        assert_eq!(MatchGrade::from_percentage(50.0), MatchGrade::Fair);
        assert_eq!(MatchGrade::from_percentage(49.9), MatchGrade::Low);
    }

    #[test]
    fn test_match_keywords_empty_extraction() {
        let report = match_keywords(&KeywordExtraction::default(), "anything");
        assert_eq!(report.percentage, 0.0);
        assert_eq!(report.grade, MatchGrade::Low);
        assert!(report.categories.is_empty());
    }
}
