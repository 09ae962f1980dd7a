//! Error types for board construction and solving.

use std::time::Duration;

/// Errors raised by the solver core.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// Invalid input detected before any search started.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The parallel collection step did not finish before its deadline.
    #[error("aggregation timed out after {timeout:?} ({completed}/{total} batches reported)")]
    AggregationTimeout {
        timeout: Duration,
        completed: usize,
        total: usize,
    },

    /// A worker panicked or exited without reporting its batch.
    #[error("worker failure in batch {batch}: {cause}")]
    WorkerFailure { batch: usize, cause: String },
}

impl SolveError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SolveError::Configuration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;
