//! Storage trait abstraction.

use async_trait::async_trait;
use bookgoal_core::{GoalId, ReadingGoal, Shelf, ShelfName};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage abstraction for goals and shelves.
///
/// This trait allows different storage backends to be plugged in.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Goal operations ===

    /// Save a goal (create or update).
    async fn save_goal(&mut self, goal: &ReadingGoal) -> Result<()>;

    /// List all stored goals, oldest first.
    async fn list_goals(&self) -> Result<Vec<ReadingGoal>>;

    /// Delete a goal. Deleting a missing goal is not an error.
    async fn delete_goal(&mut self, id: GoalId) -> Result<()>;

    // === Shelf operations ===

    /// Save a shelf, replacing its stored contents.
    async fn save_shelf(&mut self, shelf: &Shelf) -> Result<()>;

    /// Load a shelf by name.
    async fn load_shelf(&self, name: ShelfName) -> Result<Option<Shelf>>;

    /// List every stored shelf.
    async fn list_shelves(&self) -> Result<Vec<Shelf>>;
}
