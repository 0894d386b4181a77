//! Failures while persisting a run's trace, productivity and queue records.

use thiserror::Error;

/// A backend could not create, write or flush its output.
///
/// Writing never affects the run; [`SimOutputObserver`][crate::SimOutputObserver]
/// keeps the first of these for the caller to inspect.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("output database: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
