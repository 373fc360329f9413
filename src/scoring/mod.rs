pub mod evaluator;
pub mod extractor;
pub mod overlap;
pub mod strategy;
pub mod tfidf;
pub mod weights;

pub use evaluator::Evaluator;
pub use extractor::CriteriaExtractor;
pub use strategy::{select_strategy, ScoreResult, ScoringStrategy, StrategyKind};
