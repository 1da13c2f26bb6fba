//! Progress errors.

use bookgoal_storage::StorageError;

/// Result alias for progress operations.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors surfaced by the goal tracker.
///
/// The arithmetic itself never fails; zero targets and exhausted weeks are
/// handled by the calculator formulas.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Backing store failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
