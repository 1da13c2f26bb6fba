//! bookgoal core data models.
//!
//! This crate defines the reading goal, book and shelf types shared by the
//! storage, progress and CLI crates.

#![warn(missing_docs)]

// Core identities
mod id;

// Errors
mod error;

// Goals
mod goal;

// Books and shelves
mod book;
mod shelf;

// Re-exports
pub use id::*;
pub use error::{CoreError, Result};

pub use goal::{ReadingGoal, GoalType};
pub use book::Book;
pub use shelf::{Shelf, ShelfName};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
