//! Error types for loading and scheduling job lists.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::dispatching::ScoringRule;

/// Result type alias for u-completion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. None of them are recoverable within a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input has no job count line.
    #[error("missing job count line")]
    MissingCount,

    /// Job count line is not a non-negative integer.
    #[error("invalid job count {line:?}: {source}")]
    InvalidCount {
        line: String,
        #[source]
        source: ParseIntError,
    },

    /// Number of parsed jobs disagrees with the declared count.
    #[error(
        "incorrect parse: declared {declared} jobs, loaded {difference} (difference) / {ratio} (ratio)"
    )]
    CountMismatch {
        declared: usize,
        difference: usize,
        ratio: usize,
    },

    /// Weighted completion time does not fit in `i64`.
    #[error("weighted completion time overflows at job #{number} ({rule} schedule)")]
    Overflow { rule: ScoringRule, number: u32 },
}
