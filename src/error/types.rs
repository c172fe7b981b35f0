use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the masonry placement crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the crate.
///
/// Placement itself never fails; malformed inputs are normalized (empty
/// batches no-op, unknown column sizes degrade to a single column, stale
/// outlines are rebuilt). The only fallible paths are the logging and
/// metrics emission surfaces.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
