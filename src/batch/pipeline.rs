use std::path::{Path, PathBuf};

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::extract::TextSource;
use crate::models::{BatchResult, MatchVerdict, ResultRow, SkippedFile};
use crate::scoring::{select_strategy, ScoringStrategy, StrategyKind};

/// The JD side of a batch: either a document to extract or raw text.
#[derive(Debug, Clone)]
pub enum JdSource {
    Path(PathBuf),
    Text(String),
}

/// Runs one scoring batch: resolve the JD, extract each candidate with
/// per-file isolation, score the survivors, and rank them. Synchronous and
/// stateless across resumes.
pub struct BatchRunner<S: TextSource> {
    text_source: S,
    strategy_override: Option<StrategyKind>,
    show_progress: bool,
}

impl<S: TextSource> BatchRunner<S> {
    pub fn new(text_source: S) -> Self {
        Self {
            text_source,
            strategy_override: None,
            show_progress: false,
        }
    }

    pub fn with_strategy(mut self, strategy: Option<StrategyKind>) -> Self {
        self.strategy_override = strategy;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn run(&self, jd: &JdSource, resume_paths: &[PathBuf]) -> Result<BatchResult> {
        let jd_text = self.resolve_jd(jd)?;

        let strategy = select_strategy(&jd_text, self.strategy_override);
        tracing::info!(strategy = %strategy.kind(), "scoring {} candidates", resume_paths.len());

        let pb = self.progress_bar(resume_paths.len() as u64);

        let mut rows = Vec::new();
        let mut skipped = Vec::new();

        for path in resume_paths {
            let filename = display_name(path);
            let text = self.text_source.read_text(path);

            // One unreadable resume never aborts the batch; it is counted
            // and reported instead of scored.
            if text.trim().is_empty() {
                tracing::warn!(file = %filename, "no text extracted, skipping candidate");
                skipped.push(SkippedFile {
                    filename,
                    reason: "no text could be extracted".to_string(),
                });
                pb.inc(1);
                continue;
            }

            let result = strategy.score(&text);
            rows.push(ResultRow {
                filename,
                score: result.score,
                verdict: MatchVerdict::from_score(result.score),
                feedback: result.feedback,
            });
            pb.inc(1);
        }

        pb.finish_and_clear();

        if rows.is_empty() {
            tracing::warn!(
                candidates = resume_paths.len(),
                unreadable = skipped.len(),
                "batch produced no scored candidates"
            );
            return Err(Error::EmptyBatch {
                candidates: resume_paths.len(),
                unreadable: skipped.len(),
            });
        }

        // Stable sort: candidates with equal scores keep discovery order.
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(BatchResult {
            rows,
            strategy: strategy.kind(),
            criteria: strategy.criteria().cloned(),
            skipped,
            scored_at: Utc::now(),
        })
    }

    /// A batch cannot proceed without a JD: an unreadable or empty JD
    /// document is a top-level failure, unlike unreadable resumes.
    fn resolve_jd(&self, jd: &JdSource) -> Result<String> {
        let text = match jd {
            JdSource::Text(text) => text.clone(),
            JdSource::Path(path) => self.text_source.read_text(path),
        };

        if text.trim().is_empty() {
            let what = match jd {
                JdSource::Text(_) => "empty JD text".to_string(),
                JdSource::Path(path) => format!("no text extracted from {}", path.display()),
            };
            return Err(Error::MalformedJd(what));
        }

        Ok(text)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} resumes")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory text source keyed by filename; unknown paths read as
    /// empty, mirroring the best-effort extraction contract.
    struct FakeSource {
        texts: HashMap<String, String>,
    }

    impl FakeSource {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                texts: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl TextSource for FakeSource {
        fn read_text(&self, path: &Path) -> String {
            self.texts
                .get(&display_name(path))
                .cloned()
                .unwrap_or_default()
        }
    }

    const JD: &str = "Skills Required: Python, SQL\n\
                      Education: Bachelors\n\
                      3 years experience\n\
                      Responsibilities: leadership, communication";

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_batch_ranks_by_score_descending() {
        let source = FakeSource::new(&[
            ("weak.txt", "some unrelated retail background"),
            (
                "strong.txt",
                "python and sql, bachelors, 5 years experience, leadership and communication",
            ),
        ]);
        let runner = BatchRunner::new(source);
        let result = runner
            .run(&JdSource::Text(JD.to_string()), &paths(&["weak.txt", "strong.txt"]))
            .unwrap();

        assert_eq!(result.strategy, StrategyKind::Weighted);
        assert_eq!(result.rows[0].filename, "strong.txt");
        assert_eq!(result.rows[0].score, 100.0);
        assert_eq!(result.rows[1].filename, "weak.txt");
    }

    #[test]
    fn test_equal_scores_keep_discovery_order() {
        // Both resumes match education only, so they tie exactly.
        let source = FakeSource::new(&[
            ("b.txt", "bachelors in history"),
            ("a.txt", "bachelors in art"),
        ]);
        let runner = BatchRunner::new(source);
        let result = runner
            .run(&JdSource::Text(JD.to_string()), &paths(&["b.txt", "a.txt"]))
            .unwrap();

        assert_eq!(result.rows[0].score, result.rows[1].score);
        assert_eq!(result.rows[0].filename, "b.txt");
        assert_eq!(result.rows[1].filename, "a.txt");
    }

    #[test]
    fn test_unreadable_resume_is_skipped_not_zero_scored() {
        let source = FakeSource::new(&[
            ("ok.txt", "bachelors, python, sql"),
            ("broken.pdf", ""),
        ]);
        let runner = BatchRunner::new(source);
        let result = runner
            .run(
                &JdSource::Text(JD.to_string()),
                &paths(&["ok.txt", "broken.pdf"]),
            )
            .unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].filename, "broken.pdf");
    }

    #[test]
    fn test_all_unreadable_is_empty_batch_with_counts() {
        let source = FakeSource::new(&[]);
        let runner = BatchRunner::new(source);
        let err = runner
            .run(
                &JdSource::Text(JD.to_string()),
                &paths(&["x.pdf", "y.pdf"]),
            )
            .unwrap_err();

        match err {
            Error::EmptyBatch {
                candidates,
                unreadable,
            } => {
                assert_eq!(candidates, 2);
                assert_eq!(unreadable, 2);
            }
            other => panic!("expected EmptyBatch, got {other}"),
        }
    }

    #[test]
    fn test_empty_candidate_list_is_empty_batch() {
        let runner = BatchRunner::new(FakeSource::new(&[]));
        let err = runner
            .run(&JdSource::Text(JD.to_string()), &[])
            .unwrap_err();

        assert!(matches!(
            err,
            Error::EmptyBatch {
                candidates: 0,
                unreadable: 0
            }
        ));
    }

    #[test]
    fn test_unreadable_jd_is_malformed_jd() {
        let runner = BatchRunner::new(FakeSource::new(&[("cv.txt", "text")]));
        let err = runner
            .run(
                &JdSource::Path(PathBuf::from("missing_jd.pdf")),
                &paths(&["cv.txt"]),
            )
            .unwrap_err();

        assert!(matches!(err, Error::MalformedJd(_)));
        assert!(err.is_batch_outcome());
    }

    #[test]
    fn test_unlabeled_jd_falls_back_to_overlap() {
        let source = FakeSource::new(&[("cv.txt", "python and sql daily")]);
        let runner = BatchRunner::new(source);
        let result = runner
            .run(
                &JdSource::Text("python\nsql\nkubernetes".to_string()),
                &paths(&["cv.txt"]),
            )
            .unwrap();

        assert_eq!(result.strategy, StrategyKind::Overlap);
        assert!(result.criteria.is_none());
        assert!((result.rows[0].score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_forced_tfidf_strategy_is_used() {
        let source = FakeSource::new(&[("cv.txt", "completely different prose")]);
        let runner =
            BatchRunner::new(source).with_strategy(Some(StrategyKind::Tfidf));
        let result = runner
            .run(
                &JdSource::Text("Skills Required: python".to_string()),
                &paths(&["cv.txt"]),
            )
            .unwrap();

        assert_eq!(result.strategy, StrategyKind::Tfidf);
        assert_eq!(result.rows[0].score, 0.0);
    }
}
