use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupation {
    pub code: String,
    pub description: String,
}

/// Maps a job title to an occupation code. Carried in the engine as
/// `Arc<dyn OccupationGuesser>`; the pathway scorer only sees the code.
pub trait OccupationGuesser: Send + Sync {
    fn guess(&self, title: &str) -> Option<Occupation>;
}

/// Title keyword → occupation code, checked in order (first hit wins).
const TITLE_TO_OCCUPATION: &[(&str, &str)] = &[
    // data
    ("data scientist", "21211"),
    ("machine learning", "21211"),
    ("applied scientist", "21211"),
    ("research scientist", "21211"),
    ("ai engineer", "21211"),
    ("ai scientist", "21211"),
    ("deep learning", "21211"),
    ("nlp engineer", "21211"),
    ("data analyst", "21223"),
    ("business intelligence", "21223"),
    ("bi analyst", "21223"),
    ("database", "21223"),
    ("analytics engineer", "21223"),
    // product
    ("product manager", "20012"),
    ("technical product manager", "20012"),
    ("program manager", "20012"),
    ("it project manager", "20012"),
    ("analytics manager", "20012"),
    // business / consulting
    ("business analyst", "21221"),
    ("systems analyst", "21221"),
    ("product analyst", "21221"),
    ("ai consultant", "21221"),
    ("insights analyst", "21221"),
    ("management consultant", "11201"),
    ("strategy consultant", "11201"),
    ("consultant", "11201"),
    // security
    ("cybersecurity", "21220"),
    ("security analyst", "21220"),
    ("security engineer", "21220"),
    ("information security", "21220"),
    ("soc analyst", "21220"),
    ("threat analyst", "21220"),
    // software
    ("software engineer", "21231"),
    ("software developer", "21231"),
    ("data engineer", "21231"),
    ("ml engineer", "21231"),
    ("backend engineer", "21231"),
    ("full stack", "21232"),
    ("frontend engineer", "21234"),
    ("web developer", "21234"),
];

const OCCUPATION_DESCRIPTIONS: &[(&str, &str)] = &[
    ("20012", "Computer and Information Systems Managers"),
    ("21211", "Data Scientists"),
    ("21220", "Cybersecurity Specialists"),
    ("21221", "Business Systems Specialists"),
    ("21222", "Information Systems Specialists"),
    ("21223", "Database Analysts and Data Administrators"),
    ("21230", "Computer Systems Developers and Programmers"),
    ("21231", "Software Engineers and Designers"),
    ("21232", "Software Developers"),
    ("21233", "Web Designers"),
    ("21234", "Web Developers and Programmers"),
    ("21311", "Computer Engineers"),
    ("22220", "Computer Network and Web Technicians"),
    ("22222", "Information Systems Testing Technicians"),
    ("11201", "Professional Occupations in Business Management Consulting"),
];

pub fn describe_occupation(code: &str) -> Option<&'static str> {
    OCCUPATION_DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, d)| *d)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TitleOccupationGuesser;

impl OccupationGuesser for TitleOccupationGuesser {
    fn guess(&self, title: &str) -> Option<Occupation> {
        let title = title.trim().to_lowercase();
        TITLE_TO_OCCUPATION
            .iter()
            .find(|(keyword, _)| title.contains(keyword))
            .map(|(_, code)| Occupation {
                code: code.to_string(),
                description: describe_occupation(code).unwrap_or_default().to_string(),
            })
    }
}
