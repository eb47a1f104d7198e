//! Text helpers shared by the scorers: a canonical search surface, keyword
//! variants for literal fuzzy matching, and ordered phrase lookups.

pub mod gaps;
pub mod keywords;

/// Lower-cases, replaces everything outside alphanumerics, whitespace and
/// `/ - + .` with a space, collapses whitespace runs and trims.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || matches!(c, '/' | '-' | '+' | '.') {
                c
            } else {
                ' '
            }
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Spellings of a keyword that should all count as the same literal:
/// as given, hyphens as spaces, spaces as hyphens, spaces removed, and
/// slashes as spaces ("ci/cd" matches "ci cd").
pub fn variants(keyword: &str) -> Vec<String> {
    if keyword.is_empty() {
        return Vec::new();
    }
    let keyword = keyword.to_lowercase();
    let candidates = [
        keyword.clone(),
        keyword.replace('-', " "),
        keyword.replace(' ', "-"),
        keyword.replace(' ', ""),
        keyword.replace('/', " "),
    ];

    let mut out: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

/// First phrase (in list order) contained in `haystack`.
pub fn first_match<'a, S: AsRef<str>>(haystack: &str, phrases: &'a [S]) -> Option<&'a str> {
    phrases
        .iter()
        .map(AsRef::as_ref)
        .find(|phrase| haystack.contains(phrase))
}

pub fn contains_any<S: AsRef<str>>(haystack: &str, phrases: &[S]) -> bool {
    first_match(haystack, phrases).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_collapses() {
        assert_eq!(
            normalize("  Senior (ML) Engineer!!  —  C++, CI/CD & Node.js "),
            "senior ml engineer c++ ci/cd node.js"
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   !!! "), "");
    }

    #[test]
    fn test_variants_cover_separators() {
        let v = variants("CI/CD");
        assert!(v.contains(&"ci/cd".to_string()));
        assert!(v.contains(&"ci cd".to_string()));

        let v = variants("co-op");
        assert!(v.contains(&"co op".to_string()));

        let v = variants("power bi");
        assert!(v.contains(&"power-bi".to_string()));
        assert!(v.contains(&"powerbi".to_string()));
    }

    #[test]
    fn test_variants_are_deduplicated() {
        assert_eq!(variants("python"), vec!["python".to_string()]);
        assert!(variants("").is_empty());
    }

    #[test]
    fn test_first_match_respects_list_order() {
        let phrases = ["consultant", "management consultant"];
        assert_eq!(
            first_match("senior management consultant", &phrases),
            Some("consultant")
        );
        assert_eq!(first_match("engineer", &phrases), None);
    }
}
