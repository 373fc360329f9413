use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Job description could not be read: {0}")]
    MalformedJd(String),

    #[error("No candidates scored: {candidates} found, {unreadable} unreadable")]
    EmptyBatch { candidates: usize, unreadable: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for the outcomes a caller is expected to present to the user
    /// as distinct states rather than generic failures.
    pub fn is_batch_outcome(&self) -> bool {
        matches!(self, Error::MalformedJd(_) | Error::EmptyBatch { .. })
    }
}
