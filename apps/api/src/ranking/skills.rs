use crate::taxonomy::{Proficiency, SkillTaxonomy};

/// Returned when the posting mentions none of the candidate's skills:
/// no information is not the same as no match.
pub const NEUTRAL_SKILLS_SCORE: u32 = 50;

/// Number of taxonomy skills found in a posting, per proficiency tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillHits {
    pub strong: usize,
    pub moderate: usize,
    pub emerging: usize,
    pub weak: usize,
}

impl SkillHits {
    pub fn total(&self) -> usize {
        self.strong + self.moderate + self.emerging + self.weak
    }

    fn get(&self, level: Proficiency) -> usize {
        match level {
            Proficiency::Strong => self.strong,
            Proficiency::Moderate => self.moderate,
            Proficiency::Emerging => self.emerging,
            Proficiency::Weak => self.weak,
        }
    }
}

/// Counts each skill phrase once if it occurs anywhere in the lower-cased
/// title + description. Substring match: "sql" counts inside "postgresql".
pub fn count_skill_hits(title: &str, description: &str, skills: &SkillTaxonomy) -> SkillHits {
    let surface = format!("{title} {description}").to_lowercase();
    let count = |level| {
        skills
            .tier(level)
            .iter()
            .filter(|skill| surface.contains(skill.as_str()))
            .count()
    };

    SkillHits {
        strong: count(Proficiency::Strong),
        moderate: count(Proficiency::Moderate),
        emerging: count(Proficiency::Emerging),
        weak: count(Proficiency::Weak),
    }
}

/// Quality of the skill overlap: proficiency-weighted mentions over total
/// mentions, so short and long descriptions stay comparable.
pub fn score_skills(title: &str, description: &str, skills: &SkillTaxonomy) -> u32 {
    let hits = count_skill_hits(title, description, skills);
    let total = hits.total();
    if total == 0 {
        return NEUTRAL_SKILLS_SCORE;
    }

    let weighted: f64 = Proficiency::ALL
        .into_iter()
        .map(|level| hits.get(level) as f64 * level.weight())
        .sum();

    (weighted / total as f64 * 100.0).round().clamp(0.0, 100.0) as u32
}
