use regex::Regex;

use crate::models::JobCriteria;

/// Header synonyms per target field. First match wins; later duplicate
/// sections in the same JD are intentionally ignored.
const SKILL_HEADERS: [&str; 3] = ["skills required", "key skills", "technical skills"];
const EDUCATION_HEADERS: [&str; 2] = ["education", "qualification"];
const KEYWORD_HEADERS: [&str; 2] = ["responsibilities", "expectations"];

/// Years-of-experience pattern, shared with the evaluator so both sides of
/// the comparison read the phrase the same way.
pub const YEARS_PATTERN: &str = r"(\d+)\+?\s*(?:years?|yrs)\.?\s*(?:of\s+)?experience";

pub struct CriteriaExtractor {
    years_re: Regex,
}

impl CriteriaExtractor {
    pub fn new() -> Self {
        Self {
            // Compile-time constant pattern; cannot fail to parse.
            years_re: Regex::new(YEARS_PATTERN).expect("valid years pattern"),
        }
    }

    /// Derives structured criteria from raw JD text. Never fails: a missing
    /// section leaves its field at the documented default.
    pub fn extract(&self, jd_text: &str) -> JobCriteria {
        let text = jd_text.to_lowercase();

        let skills = first_section_body(&text, &SKILL_HEADERS)
            .map(split_list)
            .unwrap_or_default();

        let education = first_section_body(&text, &EDUCATION_HEADERS)
            .map(|body| body.trim().to_string())
            .unwrap_or_default();

        let keywords = first_section_body(&text, &KEYWORD_HEADERS)
            .map(split_list)
            .unwrap_or_default();

        let experience_years = self.find_experience_years(&text).unwrap_or(0);

        JobCriteria {
            skills,
            education,
            experience_years,
            keywords,
        }
    }

    /// First "N years experience" phrase in lower-cased text, if any.
    pub fn find_experience_years(&self, text: &str) -> Option<u32> {
        self.years_re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
    }
}

impl Default for CriteriaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the first occurrence of any header synonym and captures the rest
/// of that line, past optional separator punctuation. Capture is
/// line-bounded: it stops at the next newline.
fn first_section_body<'a>(text: &'a str, headers: &[&str]) -> Option<&'a str> {
    let (pos, header) = headers
        .iter()
        .filter_map(|h| text.find(h).map(|pos| (pos, h)))
        .min_by_key(|(pos, _)| *pos)?;

    let after = &text[pos + header.len()..];
    let line = after.split('\n').next().unwrap_or("");
    let body = line.trim_start_matches([':', '-', '•', '*', ' ', '\t']);

    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}

/// Splits a captured section body on commas or newlines into trimmed,
/// non-empty entries.
fn split_list(body: &str) -> Vec<String> {
    body.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JD: &str = "Skills Required: Python, SQL\n\
                             Education: Bachelors\n\
                             3 years experience\n\
                             Responsibilities: leadership, communication";

    #[test]
    fn test_extracts_all_fields_from_labeled_jd() {
        let extractor = CriteriaExtractor::new();
        let criteria = extractor.extract(SAMPLE_JD);

        assert_eq!(criteria.skills, vec!["python", "sql"]);
        assert_eq!(criteria.education, "bachelors");
        assert_eq!(criteria.experience_years, 3);
        assert_eq!(criteria.keywords, vec!["leadership", "communication"]);
    }

    #[test]
    fn test_unlabeled_jd_yields_all_defaults() {
        let extractor = CriteriaExtractor::new();
        let criteria = extractor.extract(
            "We are looking for a motivated engineer to join our team.\n\
             You will work on interesting problems.",
        );

        assert!(criteria.is_empty());
        assert_eq!(criteria, JobCriteria::default());
    }

    #[test]
    fn test_first_skills_section_wins() {
        let extractor = CriteriaExtractor::new();
        let criteria = extractor.extract(
            "Key Skills: rust, go\n\
             Skills Required: python, java",
        );

        // Only the earliest header is read; the later section is dropped.
        assert_eq!(criteria.skills, vec!["rust", "go"]);
    }

    #[test]
    fn test_capture_is_line_bounded() {
        let extractor = CriteriaExtractor::new();
        let criteria = extractor.extract(
            "Technical Skills: python, sql\n\
             kubernetes",
        );

        // The list stops at the newline; trailing lines are not part of it.
        assert_eq!(criteria.skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_experience_years_variants() {
        let extractor = CriteriaExtractor::new();

        assert_eq!(extractor.find_experience_years("5+ years experience"), Some(5));
        assert_eq!(
            extractor.find_experience_years("at least 3 yrs experience"),
            Some(3)
        );
        assert_eq!(
            extractor.find_experience_years("7 years of experience in sales"),
            Some(7)
        );
        assert_eq!(extractor.find_experience_years("experienced team"), None);
    }

    #[test]
    fn test_first_experience_match_wins() {
        let extractor = CriteriaExtractor::new();
        let criteria =
            extractor.extract("2 years experience required, ideally 5 years experience");
        assert_eq!(criteria.experience_years, 2);
    }

    #[test]
    fn test_separator_punctuation_is_stripped() {
        let extractor = CriteriaExtractor::new();
        let criteria = extractor.extract("Education - Masters in CS");
        assert_eq!(criteria.education, "masters in cs");
    }

    #[test]
    fn test_header_with_empty_body_yields_default() {
        let extractor = CriteriaExtractor::new();
        let criteria = extractor.extract("Skills Required:\npython");
        // Body is empty on the header line, so no skills are captured.
        assert!(criteria.skills.is_empty());
    }
}
