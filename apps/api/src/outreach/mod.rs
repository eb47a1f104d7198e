//! Outreach: how much a referral network can help at a given company.
//!
//! The success scorer only consumes the numeric score (and caps it); the tips
//! are carried through to the ranked output for the candidate.

/// Pluggable networking backend. Carried in the engine as `Arc<dyn NetworkingScorer>`.
pub trait NetworkingScorer: Send + Sync {
    /// Networking bonus for a company, nominally 0–15.
    fn networking_score(&self, company: &str) -> u32;

    /// Suggested outreach actions for a company.
    fn outreach_tips(&self, _company: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Companies with a large international employee base.
const HIGH_PRESENCE: &[&str] = &[
    "amazon", "microsoft", "google", "meta", "apple", "shopify",
    "huawei", "tencent", "alibaba", "bytedance",
    "rbc", "td", "bmo", "deloitte", "pwc", "ey", "kpmg",
    "sap", "visier", "d-wave", "hootsuite",
];

const MEDIUM_PRESENCE: &[&str] = &["telus", "fortinet", "absolute", "bench", "clio"];

/// Scores companies by how many likely alumni/diaspora contacts work there.
#[derive(Debug, Clone)]
pub struct CompanyPresenceNetworking {
    high: Vec<String>,
    medium: Vec<String>,
}

impl Default for CompanyPresenceNetworking {
    fn default() -> Self {
        Self {
            high: HIGH_PRESENCE.iter().map(|s| s.to_string()).collect(),
            medium: MEDIUM_PRESENCE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl NetworkingScorer for CompanyPresenceNetworking {
    fn networking_score(&self, company: &str) -> u32 {
        let company = company.trim().to_lowercase();
        if self.high.iter().any(|c| company.contains(c.as_str())) {
            10
        } else if self.medium.iter().any(|c| company.contains(c.as_str())) {
            5
        } else {
            2
        }
    }

    fn outreach_tips(&self, company: &str) -> Vec<String> {
        let company = company.trim();
        if company.is_empty() {
            return Vec::new();
        }
        vec![
            format!("Search for university alumni at {company}; they are the most likely to accept a connection request"),
            format!("Look for data scientists at {company} who also relocated from abroad and know the local-market hurdle"),
            format!("Check whether anyone on the data team at {company} shares a former employer; shared history is a strong hook"),
            format!("When reaching out to {company} staff, lead with one concrete, quantified result from your background"),
        ]
    }
}
