pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod output;
pub mod scoring;

pub use batch::{BatchRunner, JdSource};
pub use config::Config;
pub use error::{Error, Result};
pub use extract::{FileTextSource, TextSource};
pub use models::{BatchResult, JobCriteria, ResultRow};
pub use scoring::{select_strategy, ScoringStrategy, StrategyKind};
