use crate::taxonomy::CompanyLists;
use crate::text::contains_any;

const ENTERPRISE_PHRASES: &[&str] = &["fortune 500", "global", "enterprise", "publicly traded"];
const GROWTH_STAGE_PHRASES: &[&str] = &["series b", "series c", "series d", "well-funded"];
const EARLY_STAGE_PHRASES: &[&str] = &["startup", "early stage", "seed", "series a"];

/// Employer reputation. Curated lists match in both directions
/// (`"amazon web services"` hits `amazon`, `"rbc"` hits `"rbc"`), so short
/// or abbreviated company names still resolve.
pub fn score_employer_reputation(company: &str, description: &str, companies: &CompanyLists) -> u32 {
    let company = company.trim().to_lowercase();
    if company.is_empty() {
        return 50;
    }

    let listed = |list: &[String]| {
        list.iter()
            .any(|name| company.contains(name.as_str()) || name.contains(company.as_str()))
    };
    if listed(companies.reputation_tier1.as_slice()) {
        return 90;
    }
    if listed(companies.reputation_tier2.as_slice()) {
        return 75;
    }

    let description = description.to_lowercase();
    if contains_any(&description, ENTERPRISE_PHRASES) {
        80
    } else if contains_any(&description, GROWTH_STAGE_PHRASES) {
        70
    } else if contains_any(&description, EARLY_STAGE_PHRASES) {
        55
    } else {
        60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(company: &str, description: &str) -> u32 {
        score_employer_reputation(company, description, &CompanyLists::default())
    }

    #[test]
    fn test_empty_company_is_50() {
        assert_eq!(score("", "a global enterprise"), 50);
        assert_eq!(score("   ", ""), 50);
    }

    #[test]
    fn test_tier1_and_tier2() {
        assert_eq!(score("Amazon Web Services", ""), 90);
        assert_eq!(score("Clio", ""), 75);
    }

    #[test]
    fn test_reverse_containment_matches_abbreviations() {
        // "hugging" is contained in the listed "hugging face"
        assert_eq!(score("Hugging", ""), 90);
    }

    #[test]
    fn test_description_fallbacks() {
        assert_eq!(score("Zyxwq Labs", "A Fortune 500 company"), 80);
        assert_eq!(score("Zyxwq Labs", "We just closed our Series C"), 70);
        assert_eq!(score("Zyxwq Labs", "seed-funded startup"), 55);
        assert_eq!(score("Zyxwq Labs", "we make widgets"), 60);
    }
}
