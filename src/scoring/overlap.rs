use crate::models::Feedback;
use crate::scoring::strategy::{ScoreResult, ScoringStrategy, StrategyKind};

/// Degraded scoring for JDs with no recognizable section headers: every
/// non-empty JD line is one token, and the score is the percentage of
/// lines found verbatim in the resume.
pub struct LineOverlapStrategy {
    lines: Vec<String>,
}

impl LineOverlapStrategy {
    pub fn new(jd_text: &str) -> Self {
        let lines = jd_text
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { lines }
    }
}

impl ScoringStrategy for LineOverlapStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Overlap
    }

    fn score(&self, resume_text: &str) -> ScoreResult {
        if self.lines.is_empty() {
            return ScoreResult {
                score: 0.0,
                feedback: Feedback::LineOverlap {
                    matched: Vec::new(),
                    unmatched: Vec::new(),
                },
            };
        }

        let resume = resume_text.to_lowercase();
        let (matched, unmatched): (Vec<String>, Vec<String>) = self
            .lines
            .iter()
            .cloned()
            .partition(|line| resume.contains(line.as_str()));

        let score = matched.len() as f64 / self.lines.len() as f64 * 100.0;

        ScoreResult {
            score,
            feedback: Feedback::LineOverlap { matched, unmatched },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_percentage_of_matched_lines() {
        let strategy = LineOverlapStrategy::new("python\nsql\n\nkubernetes\n");
        let result = strategy.score("Senior Python engineer, strong SQL background");

        assert!((result.score - 2.0 / 3.0 * 100.0).abs() < 1e-9);
        match result.feedback {
            Feedback::LineOverlap { matched, unmatched } => {
                assert_eq!(matched, vec!["python", "sql"]);
                assert_eq!(unmatched, vec!["kubernetes"]);
            }
            other => panic!("unexpected feedback: {other:?}"),
        }
    }

    #[test]
    fn test_blank_jd_lines_are_ignored() {
        let strategy = LineOverlapStrategy::new("\n  \npython\n\n");
        let result = strategy.score("python");
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_empty_jd_scores_zero_without_error() {
        let strategy = LineOverlapStrategy::new("");
        let result = strategy.score("anything");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_zero_overlap_scores_zero() {
        let strategy = LineOverlapStrategy::new("haskell\nocaml");
        let result = strategy.score("java developer");
        assert_eq!(result.score, 0.0);
    }
}
