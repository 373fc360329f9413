use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::criteria::JobCriteria;
use crate::scoring::StrategyKind;

/// Per-category matched/unmatched outcome with a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryVerdict {
    pub matched: bool,
    pub reason: String,
}

impl CategoryVerdict {
    pub fn new(matched: bool, reason: impl Into<String>) -> Self {
        Self {
            matched,
            reason: reason.into(),
        }
    }
}

/// Four-category breakdown produced by the weighted-categories strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub skills: CategoryVerdict,
    pub experience: CategoryVerdict,
    pub education: CategoryVerdict,
    pub keywords: CategoryVerdict,
    pub score: f64,
}

impl EvaluationReport {
    pub fn categories(&self) -> [(&str, &CategoryVerdict); 4] {
        [
            ("Skills Match", &self.skills),
            ("Experience Match", &self.experience),
            ("Education Match", &self.education),
            ("Keyword Match", &self.keywords),
        ]
    }
}

/// Feedback payload of a result row; shape depends on the scoring strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feedback {
    /// Weighted-categories breakdown.
    Breakdown(EvaluationReport),
    /// JD lines found / not found in the resume.
    LineOverlap {
        matched: Vec<String>,
        unmatched: Vec<String>,
    },
    /// Holistic TF-IDF similarity; no per-category detail exists.
    Similarity,
}

impl Feedback {
    /// One-line rendering for table output.
    pub fn summary(&self) -> String {
        match self {
            Feedback::Breakdown(report) => report
                .categories()
                .iter()
                .map(|(name, verdict)| {
                    let mark = if verdict.matched { "ok" } else { "miss" };
                    format!("{} {} ({})", name, mark, verdict.reason)
                })
                .collect::<Vec<_>>()
                .join("; "),
            Feedback::LineOverlap { matched, unmatched } => format!(
                "{}/{} JD lines found in resume",
                matched.len(),
                matched.len() + unmatched.len()
            ),
            Feedback::Similarity => "TF-IDF cosine similarity".to_string(),
        }
    }
}

/// Coarse verdict bands shown next to the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchVerdict {
    Good,
    NeedsImprovement,
    Poor,
}

impl MatchVerdict {
    pub fn from_score(score: f64) -> Self {
        if score > 60.0 {
            MatchVerdict::Good
        } else if score > 30.0 {
            MatchVerdict::NeedsImprovement
        } else {
            MatchVerdict::Poor
        }
    }
}

impl std::fmt::Display for MatchVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchVerdict::Good => write!(f, "Good Match"),
            MatchVerdict::NeedsImprovement => write!(f, "Needs Improvement"),
            MatchVerdict::Poor => write!(f, "Poor Match"),
        }
    }
}

/// One scored candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub filename: String,
    pub score: f64,
    pub verdict: MatchVerdict,
    pub feedback: Feedback,
}

/// A candidate excluded from scoring because text extraction produced
/// nothing. Counted so "all unreadable" is distinguishable from "empty dir".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

/// Outcome of one batch run: ranked rows plus the context they were
/// produced under. Discarded after output; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub rows: Vec<ResultRow>,
    pub strategy: StrategyKind,
    pub criteria: Option<JobCriteria>,
    pub skipped: Vec<SkippedFile>,
    pub scored_at: DateTime<Utc>,
}
