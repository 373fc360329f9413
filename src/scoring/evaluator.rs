use crate::models::{CategoryVerdict, EvaluationReport, JobCriteria};
use crate::scoring::extractor::CriteriaExtractor;
use crate::scoring::weights::CATEGORY_WEIGHTS;

/// Scores one resume against one set of JD criteria. Deterministic:
/// identical inputs always produce identical reports.
pub struct Evaluator {
    extractor: CriteriaExtractor,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            extractor: CriteriaExtractor::new(),
        }
    }

    pub fn evaluate(&self, criteria: &JobCriteria, resume_text: &str) -> EvaluationReport {
        let resume = resume_text.to_lowercase();

        let skills = self.match_skills(criteria, &resume);
        let experience = self.match_experience(criteria, &resume);
        let education = self.match_education(criteria, &resume);
        let keywords = self.match_keywords(criteria, &resume);

        let mut score = 0.0;
        if skills.matched {
            score += CATEGORY_WEIGHTS.skills * 100.0;
        }
        if experience.matched {
            score += CATEGORY_WEIGHTS.experience * 100.0;
        }
        if education.matched {
            score += CATEGORY_WEIGHTS.education * 100.0;
        }
        if keywords.matched {
            score += CATEGORY_WEIGHTS.keywords * 100.0;
        }

        EvaluationReport {
            skills,
            experience,
            education,
            keywords,
            score,
        }
    }

    fn match_skills(&self, criteria: &JobCriteria, resume: &str) -> CategoryVerdict {
        let total = criteria.skills.len();
        if total == 0 {
            // No stated requirement is not a failure.
            return CategoryVerdict::new(true, "no skills required");
        }

        let found = count_contained(&criteria.skills, resume);
        // ceil(0.6 * total) in integer math; f64 0.6 rounds up at total=5.
        let needed = (3 * total + 4) / 5;

        CategoryVerdict::new(found >= needed, format!("matched {found}/{total} skills"))
    }

    fn match_experience(&self, criteria: &JobCriteria, resume: &str) -> CategoryVerdict {
        let found = self.extractor.find_experience_years(resume).unwrap_or(0);
        let required = criteria.experience_years;

        CategoryVerdict::new(
            found >= required,
            format!("requires {required} years, found {found}"),
        )
    }

    fn match_education(&self, criteria: &JobCriteria, resume: &str) -> CategoryVerdict {
        if criteria.education.is_empty() {
            // Same vacuous-pass convention as skills and keywords.
            return CategoryVerdict::new(true, "no education requirement");
        }

        let matched = resume.contains(criteria.education.as_str());
        let state = if matched { "found" } else { "not found" };

        CategoryVerdict::new(matched, format!("'{}' {state}", criteria.education))
    }

    fn match_keywords(&self, criteria: &JobCriteria, resume: &str) -> CategoryVerdict {
        let total = criteria.keywords.len();
        if total == 0 {
            return CategoryVerdict::new(true, "no keywords required");
        }

        let found = count_contained(&criteria.keywords, resume);
        // ceil(0.5 * total)
        let needed = (total + 1) / 2;

        CategoryVerdict::new(found >= needed, format!("matched {found}/{total} keywords"))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn count_contained(needles: &[String], haystack: &str) -> usize {
    needles
        .iter()
        .map(|n| n.trim().to_lowercase())
        .filter(|n| !n.is_empty() && haystack.contains(n.as_str()))
        .count()
}
