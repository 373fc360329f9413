pub mod criteria;
pub mod report;

pub use criteria::JobCriteria;
pub use report::{
    BatchResult, CategoryVerdict, EvaluationReport, Feedback, MatchVerdict, ResultRow, SkippedFile,
};
