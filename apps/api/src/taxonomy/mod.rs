//! Taxonomy: the read-only reference data every scorer consumes.
//!
//! A `Taxonomy` is built once (from a JSON file or the bundled default),
//! validated as a whole, and then shared as an immutable `Arc` snapshot.
//! Scorers never see a partially built taxonomy: construction either returns a
//! complete value or a `TaxonomyError`.

pub mod defaults;
pub mod store;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use store::TaxonomyStore;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("taxonomy is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("skill taxonomy has no skills in any proficiency tier")]
    Empty,

    #[error("blank skill entry in the {0} tier")]
    BlankSkill(Proficiency),

    #[error("skill '{skill}' appears in both the {first} and {second} tiers")]
    Overlap {
        skill: String,
        first: Proficiency,
        second: Proficiency,
    },

    #[error("list '{0}' contains a blank entry")]
    BlankEntry(&'static str),
}

// ────────────────────────────────────────────────────────────────────────────
// Skill proficiency
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Strong,
    Moderate,
    Emerging,
    Weak,
}

impl Proficiency {
    pub const ALL: [Proficiency; 4] = [
        Proficiency::Strong,
        Proficiency::Moderate,
        Proficiency::Emerging,
        Proficiency::Weak,
    ];

    /// Contribution of one mention at this proficiency to the skills score.
    pub fn weight(self) -> f64 {
        match self {
            Proficiency::Strong => 1.0,
            Proficiency::Moderate => 0.7,
            Proficiency::Emerging => 0.4,
            Proficiency::Weak => 0.1,
        }
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Proficiency::Strong => "strong",
            Proficiency::Moderate => "moderate",
            Proficiency::Emerging => "emerging",
            Proficiency::Weak => "weak",
        };
        f.write_str(name)
    }
}

/// The candidate's skills split into four disjoint proficiency tiers,
/// plus a skill → category lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillTaxonomy {
    pub strong: BTreeSet<String>,
    pub moderate: BTreeSet<String>,
    pub emerging: BTreeSet<String>,
    pub weak: BTreeSet<String>,
    categories: BTreeMap<String, String>,
}

impl SkillTaxonomy {
    pub fn new(
        strong: Vec<String>,
        moderate: Vec<String>,
        emerging: Vec<String>,
        weak: Vec<String>,
        categories: BTreeMap<String, Vec<String>>,
    ) -> Result<Self, TaxonomyError> {
        let mut seen: BTreeMap<String, Proficiency> = BTreeMap::new();
        let mut tiers: [BTreeSet<String>; 4] = Default::default();

        for (slot, (level, skills)) in tiers.iter_mut().zip(
            Proficiency::ALL
                .into_iter()
                .zip([strong, moderate, emerging, weak]),
        ) {
            for raw in skills {
                let skill = raw.trim().to_lowercase();
                if skill.is_empty() {
                    return Err(TaxonomyError::BlankSkill(level));
                }
                if let Some(&first) = seen.get(&skill) {
                    if first != level {
                        return Err(TaxonomyError::Overlap {
                            skill,
                            first,
                            second: level,
                        });
                    }
                    continue;
                }
                seen.insert(skill.clone(), level);
                slot.insert(skill);
            }
        }

        if seen.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let mut lookup = BTreeMap::new();
        for (category, skills) in categories {
            for skill in skills {
                lookup
                    .entry(skill.trim().to_lowercase())
                    .or_insert_with(|| category.clone());
            }
        }

        let [strong, moderate, emerging, weak] = tiers;
        Ok(Self {
            strong,
            moderate,
            emerging,
            weak,
            categories: lookup,
        })
    }

    pub fn tier(&self, level: Proficiency) -> &BTreeSet<String> {
        match level {
            Proficiency::Strong => &self.strong,
            Proficiency::Moderate => &self.moderate,
            Proficiency::Emerging => &self.emerging,
            Proficiency::Weak => &self.weak,
        }
    }

    pub fn proficiency_of(&self, skill: &str) -> Option<Proficiency> {
        let skill = skill.to_lowercase();
        Proficiency::ALL
            .into_iter()
            .find(|&level| self.tier(level).contains(&skill))
    }

    /// Weak skills do not count as held.
    pub fn user_has(&self, skill: &str) -> bool {
        matches!(
            self.proficiency_of(skill),
            Some(Proficiency::Strong | Proficiency::Moderate | Proficiency::Emerging)
        )
    }

    pub fn category_of(&self, skill: &str) -> Option<&str> {
        self.categories
            .get(&skill.to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strong.len() + self.moderate.len() + self.emerging.len() + self.weak.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Company, keyword and pathway tables
// ────────────────────────────────────────────────────────────────────────────

/// Company-name substrings grouped by what they signal. Each list is matched
/// case-insensitively in order; the first hit wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyLists {
    pub reputation_tier1: Vec<String>,
    pub reputation_tier2: Vec<String>,
    pub top_tier: Vec<String>,
    pub small_or_startup: Vec<String>,
    pub outreach_friendly: Vec<String>,
    pub live_coding: Vec<String>,
    pub take_home: Vec<String>,
}

impl Default for CompanyLists {
    fn default() -> Self {
        use defaults::*;
        Self {
            reputation_tier1: owned(REPUTATION_TIER1),
            reputation_tier2: owned(REPUTATION_TIER2),
            top_tier: owned(TOP_TIER),
            small_or_startup: owned(SMALL_OR_STARTUP),
            outreach_friendly: owned(OUTREACH_FRIENDLY),
            live_coding: owned(LIVE_CODING),
            take_home: owned(TAKE_HOME),
        }
    }
}

/// Trims and lower-cases every entry of a file-supplied list. Search surfaces
/// are lower-cased, so an entry kept as "Python" would never match.
fn clean(name: &'static str, list: Vec<String>) -> Result<Vec<String>, TaxonomyError> {
    list.into_iter()
        .map(|entry| {
            let entry = entry.trim().to_lowercase();
            if entry.is_empty() {
                Err(TaxonomyError::BlankEntry(name))
            } else {
                Ok(entry)
            }
        })
        .collect()
}

impl CompanyLists {
    fn normalized(self) -> Result<Self, TaxonomyError> {
        Ok(Self {
            reputation_tier1: clean("reputation_tier1", self.reputation_tier1)?,
            reputation_tier2: clean("reputation_tier2", self.reputation_tier2)?,
            top_tier: clean("top_tier", self.top_tier)?,
            small_or_startup: clean("small_or_startup", self.small_or_startup)?,
            outreach_friendly: clean("outreach_friendly", self.outreach_friendly)?,
            live_coding: clean("live_coding", self.live_coding)?,
            take_home: clean("take_home", self.take_home)?,
        })
    }
}

/// Categorized keyword sets used for ATS-style extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCategories {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experience_markers: Vec<String>,
    pub education_markers: Vec<String>,
    pub action_verbs: Vec<String>,
}

impl Default for KeywordCategories {
    fn default() -> Self {
        use defaults::*;
        Self {
            hard_skills: owned(HARD_SKILLS),
            soft_skills: owned(SOFT_SKILLS),
            experience_markers: owned(EXPERIENCE_MARKERS),
            education_markers: owned(EDUCATION_MARKERS),
            action_verbs: owned(ACTION_VERBS),
        }
    }
}

impl KeywordCategories {
    fn normalized(self) -> Result<Self, TaxonomyError> {
        Ok(Self {
            hard_skills: clean("hard_skills", self.hard_skills)?,
            soft_skills: clean("soft_skills", self.soft_skills)?,
            experience_markers: clean("experience_markers", self.experience_markers)?,
            education_markers: clean("education_markers", self.education_markers)?,
            action_verbs: clean("action_verbs", self.action_verbs)?,
        })
    }
}

/// Region and occupation data for the eligibility pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayProfile {
    pub region_indicators: Vec<String>,
    pub country: String,
    pub priority_occupations: BTreeSet<String>,
    pub secondary_occupations: BTreeSet<String>,
    pub median_hourly_wage: f64,
}

impl Default for PathwayProfile {
    fn default() -> Self {
        use defaults::*;
        Self {
            region_indicators: owned(REGION_INDICATORS),
            country: COUNTRY.to_string(),
            priority_occupations: PRIORITY_OCCUPATIONS.iter().map(|s| s.to_string()).collect(),
            secondary_occupations: SECONDARY_OCCUPATIONS.iter().map(|s| s.to_string()).collect(),
            median_hourly_wage: MEDIAN_HOURLY_WAGE,
        }
    }
}

impl PathwayProfile {
    pub fn is_in_region(&self, location: &str) -> bool {
        let location = location.to_lowercase();
        !location.is_empty()
            && self
                .region_indicators
                .iter()
                .any(|ind| location.contains(ind.as_str()))
    }

    pub fn is_priority_occupation(&self, code: &str) -> bool {
        !code.is_empty() && self.priority_occupations.contains(code)
    }

    pub fn is_any_eligible(&self, code: &str) -> bool {
        self.is_priority_occupation(code) || self.secondary_occupations.contains(code)
    }

    pub fn median_annual_wage(&self) -> f64 {
        self.median_hourly_wage * 2080.0
    }

    fn normalized(self) -> Result<Self, TaxonomyError> {
        let codes = |set: BTreeSet<String>| -> BTreeSet<String> {
            set.into_iter()
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty())
                .collect()
        };
        Ok(Self {
            region_indicators: clean("region_indicators", self.region_indicators)?,
            country: self.country.trim().to_lowercase(),
            priority_occupations: codes(self.priority_occupations),
            secondary_occupations: codes(self.secondary_occupations),
            median_hourly_wage: self.median_hourly_wage,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Taxonomy
// ────────────────────────────────────────────────────────────────────────────

/// On-disk shape. The four proficiency tiers are required; the remaining
/// sections fall back to the built-in tables as a whole.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TaxonomyFile {
    user_strong: Vec<String>,
    user_moderate: Vec<String>,
    user_emerging: Vec<String>,
    user_weak: Vec<String>,
    #[serde(default)]
    categories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    keywords: Option<KeywordCategories>,
    #[serde(default)]
    companies: Option<CompanyLists>,
    #[serde(default)]
    pathway: Option<PathwayProfile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    pub skills: SkillTaxonomy,
    pub keywords: KeywordCategories,
    pub companies: CompanyLists,
    pub pathway: PathwayProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxonomySummary {
    pub strong: usize,
    pub moderate: usize,
    pub emerging: usize,
    pub weak: usize,
    pub hard_skills: usize,
    pub companies: usize,
    pub priority_occupations: usize,
}

impl Taxonomy {
    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile = serde_json::from_str(json)?;
        let skills = SkillTaxonomy::new(
            file.user_strong,
            file.user_moderate,
            file.user_emerging,
            file.user_weak,
            file.categories,
        )?;

        let keywords = file.keywords.unwrap_or_default().normalized()?;
        let companies = file.companies.unwrap_or_default().normalized()?;
        let pathway = file.pathway.unwrap_or_default().normalized()?;

        Ok(Self {
            skills,
            keywords,
            companies,
            pathway,
        })
    }

    pub fn load(path: &Path) -> Result<Self, TaxonomyError> {
        let json = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The taxonomy bundled with the binary.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::from_json_str(defaults::BUILTIN_TAXONOMY_JSON)
    }

    pub fn summary(&self) -> TaxonomySummary {
        let c = &self.companies;
        TaxonomySummary {
            strong: self.skills.strong.len(),
            moderate: self.skills.moderate.len(),
            emerging: self.skills.emerging.len(),
            weak: self.skills.weak.len(),
            hard_skills: self.keywords.hard_skills.len(),
            companies: c.reputation_tier1.len()
                + c.reputation_tier2.len()
                + c.top_tier.len()
                + c.small_or_startup.len()
                + c.outreach_friendly.len()
                + c.live_coding.len()
                + c.take_home.len(),
            priority_occupations: self.pathway.priority_occupations.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_taxonomy_loads() {
        let taxonomy = Taxonomy::builtin().unwrap();
        assert!(taxonomy.skills.strong.contains("python"));
        assert!(taxonomy.skills.weak.contains("java"));
        assert_eq!(taxonomy.skills.category_of("Python"), Some("programming"));
        assert!(taxonomy.pathway.is_priority_occupation("21211"));
    }

    #[test]
    fn test_skills_are_lowercased_and_deduplicated() {
        let skills = SkillTaxonomy::new(
            strings(&["Python", "python "]),
            vec![],
            vec![],
            vec![],
            BTreeMap::new(),
        )
        .unwrap();
        assert_eq!(skills.strong.len(), 1);
        assert_eq!(skills.proficiency_of("PYTHON"), Some(Proficiency::Strong));
    }

    #[test]
    fn test_overlapping_tiers_rejected() {
        let err = SkillTaxonomy::new(
            strings(&["sql"]),
            strings(&["SQL"]),
            vec![],
            vec![],
            BTreeMap::new(),
        )
        .unwrap_err();
        assert!(
            matches!(err, TaxonomyError::Overlap { ref skill, .. } if skill == "sql"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_empty_taxonomy_rejected() {
        let err = SkillTaxonomy::new(vec![], vec![], vec![], vec![], BTreeMap::new()).unwrap_err();
        assert!(matches!(err, TaxonomyError::Empty));
    }

    #[test]
    fn test_blank_skill_rejected() {
        let err = SkillTaxonomy::new(vec![], strings(&["  "]), vec![], vec![], BTreeMap::new())
            .unwrap_err();
        assert!(matches!(err, TaxonomyError::BlankSkill(Proficiency::Moderate)));
    }

    #[test]
    fn test_missing_tier_is_a_parse_error() {
        let json = r#"{"user_strong": ["python"], "user_moderate": [], "user_emerging": []}"#;
        let err = Taxonomy::from_json_str(json).unwrap_err();
        assert!(matches!(err, TaxonomyError::Parse(_)));
    }

    #[test]
    fn test_weak_skills_are_not_held() {
        let taxonomy = Taxonomy::builtin().unwrap();
        assert!(taxonomy.skills.user_has("pytorch"));
        assert!(!taxonomy.skills.user_has("java"));
        assert!(!taxonomy.skills.user_has("cobol"));
    }

    #[test]
    fn test_company_overrides_are_normalized() {
        let json = r#"{
            "user_strong": ["python"], "user_moderate": [], "user_emerging": [], "user_weak": [],
            "companies": {
                "reputation_tier1": ["Acme Corp"], "reputation_tier2": [], "top_tier": [],
                "small_or_startup": [], "outreach_friendly": [], "live_coding": [], "take_home": []
            }
        }"#;
        let taxonomy = Taxonomy::from_json_str(json).unwrap();
        assert_eq!(taxonomy.companies.reputation_tier1, vec!["acme corp".to_string()]);
        // untouched sections keep the built-in tables
        assert_eq!(taxonomy.keywords, KeywordCategories::default());
    }

    #[test]
    fn test_keyword_and_region_overrides_are_normalized() {
        let json = r#"{
            "user_strong": ["python"], "user_moderate": [], "user_emerging": [], "user_weak": [],
            "keywords": {
                "hard_skills": [" Python ", "Machine Learning"], "soft_skills": ["Leadership"],
                "experience_markers": [], "education_markers": [], "action_verbs": ["Built"]
            },
            "pathway": {
                "region_indicators": ["Vancouver", " BURNABY"], "country": "Canada",
                "priority_occupations": [" 21211 "], "secondary_occupations": [],
                "median_hourly_wage": 40.0
            }
        }"#;
        let taxonomy = Taxonomy::from_json_str(json).unwrap();
        assert_eq!(taxonomy.keywords.hard_skills, strings(&["python", "machine learning"]));
        assert_eq!(taxonomy.keywords.action_verbs, strings(&["built"]));
        assert!(taxonomy.pathway.is_in_region("Vancouver, BC"));
        assert!(taxonomy.pathway.is_in_region("burnaby"));
        assert_eq!(taxonomy.pathway.country, "canada");
        assert!(taxonomy.pathway.is_priority_occupation("21211"));
    }

    #[test]
    fn test_blank_keyword_entry_rejected() {
        let json = r#"{
            "user_strong": ["python"], "user_moderate": [], "user_emerging": [], "user_weak": [],
            "keywords": {
                "hard_skills": ["  "], "soft_skills": [], "experience_markers": [],
                "education_markers": [], "action_verbs": []
            }
        }"#;
        let err = Taxonomy::from_json_str(json).unwrap_err();
        assert!(matches!(err, TaxonomyError::BlankEntry("hard_skills")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"user_strong": ["rust"], "user_moderate": [], "user_emerging": [], "user_weak": ["cobol"]}}"#
        )
        .unwrap();
        let taxonomy = Taxonomy::load(file.path()).unwrap();
        assert_eq!(taxonomy.skills.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Taxonomy::load(Path::new("/nonexistent/taxonomy.json")).unwrap_err();
        assert!(matches!(err, TaxonomyError::Io { .. }));
    }

    #[test]
    fn test_region_matching() {
        let pathway = PathwayProfile::default();
        assert!(pathway.is_in_region("Burnaby, British Columbia"));
        assert!(!pathway.is_in_region("Toronto, ON"));
        assert!(!pathway.is_in_region(""));
    }
}
