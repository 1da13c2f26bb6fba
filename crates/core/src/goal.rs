//! Reading goal model - the yearly target a reader sets.

use serde::{Deserialize, Serialize};
use chrono::Utc;
use crate::error::{CoreError, Result};
use crate::id::GoalId;
use crate::Time;

/// A yearly reading target, counted in books or pages.
///
/// A goal is never edited in place. Setting a new goal replaces the
/// previous one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingGoal {
    /// Unique identifier
    pub id: GoalId,

    /// What the target counts
    pub goal_type: GoalType,

    /// Number of books or pages to read this year (always >= 1)
    pub target: u32,

    /// When created
    pub created_at: Time,

    /// Last updated
    pub updated_at: Time,
}

impl ReadingGoal {
    /// Create a goal, rejecting targets below 1.
    pub fn new(goal_type: GoalType, target: i64) -> Result<Self> {
        if target < 1 || target > i64::from(u32::MAX) {
            return Err(CoreError::InvalidTarget(target));
        }

        let now = Utc::now();
        Ok(Self {
            id: GoalId::new(),
            goal_type,
            target: target as u32,
            created_at: now,
            updated_at: now,
        })
    }

    /// Shorthand for a books goal.
    pub fn books(target: i64) -> Result<Self> {
        Self::new(GoalType::Books, target)
    }

    /// Shorthand for a pages goal.
    pub fn pages(target: i64) -> Result<Self> {
        Self::new(GoalType::Pages, target)
    }
}

/// What a reading goal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalType {
    /// Number of books finished
    Books,
    /// Number of pages read
    Pages,
}

impl GoalType {
    /// Plural unit used in display text.
    pub fn unit(&self) -> &'static str {
        match self {
            GoalType::Books => "books",
            GoalType::Pages => "pages",
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unit())
    }
}
