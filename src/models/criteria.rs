use serde::{Deserialize, Serialize};

/// Structured requirements derived once from a job description.
/// Immutable after extraction; a fresh record is derived per JD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobCriteria {
    pub skills: Vec<String>,
    pub education: String,
    pub experience_years: u32,
    pub keywords: Vec<String>,
}

impl JobCriteria {
    /// True when no field was detected in the JD. Drives the fallback to
    /// line-overlap scoring.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.education.is_empty()
            && self.experience_years == 0
            && self.keywords.is_empty()
    }
}
