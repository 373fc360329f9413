use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{Feedback, JobCriteria};
use crate::scoring::evaluator::Evaluator;
use crate::scoring::extractor::CriteriaExtractor;
use crate::scoring::overlap::LineOverlapStrategy;
use crate::scoring::tfidf::TfidfStrategy;

/// Which scoring mode produced a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Weighted,
    Overlap,
    Tfidf,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Weighted => write!(f, "weighted-categories"),
            StrategyKind::Overlap => write!(f, "line-overlap"),
            StrategyKind::Tfidf => write!(f, "tfidf-cosine"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weighted" => Ok(StrategyKind::Weighted),
            "overlap" => Ok(StrategyKind::Overlap),
            "tfidf" => Ok(StrategyKind::Tfidf),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

/// Score plus strategy-shaped feedback for one resume.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub feedback: Feedback,
}

/// One scoring mode with the JD side baked in at construction time, so a
/// batch scores every resume against the same prepared state.
pub trait ScoringStrategy {
    fn kind(&self) -> StrategyKind;

    fn score(&self, resume_text: &str) -> ScoreResult;

    /// The structured criteria backing this strategy, when it has any.
    fn criteria(&self) -> Option<&JobCriteria> {
        None
    }
}

/// Structured weighted-categories mode (the primary strategy).
pub struct WeightedCategoryStrategy {
    criteria: JobCriteria,
    evaluator: Evaluator,
}

impl WeightedCategoryStrategy {
    pub fn new(criteria: JobCriteria) -> Self {
        Self {
            criteria,
            evaluator: Evaluator::new(),
        }
    }
}

impl ScoringStrategy for WeightedCategoryStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Weighted
    }

    fn score(&self, resume_text: &str) -> ScoreResult {
        let report = self.evaluator.evaluate(&self.criteria, resume_text);
        ScoreResult {
            score: report.score,
            feedback: Feedback::Breakdown(report),
        }
    }

    fn criteria(&self) -> Option<&JobCriteria> {
        Some(&self.criteria)
    }
}

/// Builds the strategy for a JD. An explicit override wins; otherwise the
/// structured mode is used whenever extraction finds at least one
/// non-default field, with line-overlap as the degraded path.
pub fn select_strategy(jd_text: &str, forced: Option<StrategyKind>) -> Box<dyn ScoringStrategy> {
    match forced {
        Some(StrategyKind::Weighted) => {
            let criteria = CriteriaExtractor::new().extract(jd_text);
            Box::new(WeightedCategoryStrategy::new(criteria))
        }
        Some(StrategyKind::Overlap) => Box::new(LineOverlapStrategy::new(jd_text)),
        Some(StrategyKind::Tfidf) => Box::new(TfidfStrategy::new(jd_text)),
        None => {
            let criteria = CriteriaExtractor::new().extract(jd_text);
            if criteria.is_empty() {
                tracing::info!("no criteria detected in JD, falling back to line-overlap scoring");
                Box::new(LineOverlapStrategy::new(jd_text))
            } else {
                Box::new(WeightedCategoryStrategy::new(criteria))
            }
        }
    }
}
