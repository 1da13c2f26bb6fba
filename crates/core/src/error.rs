//! Errors raised when building domain values from raw input.

/// Result alias for core constructors.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Input-contract violations caught at the domain boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Goal target must be a positive count
    #[error("reading goal target must be at least 1, got {0}")]
    InvalidTarget(i64),

    /// Unknown shelf name
    #[error("unknown shelf: {0}")]
    UnknownShelf(String),
}
