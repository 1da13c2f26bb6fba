//! Derived progress values for a single refresh.

use bookgoal_core::GoalType;
use serde::{Deserialize, Serialize};

/// Where the reader stands against the linear schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleDirection {
    /// Fewer units done than the schedule expects
    Behind,
    /// At or above the expected pace
    Ahead,
    /// Target reached
    Met,
}

/// Schedule direction plus how many units separate the reader from the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStatus {
    /// Behind, ahead, or met
    pub direction: ScheduleDirection,
    /// Distance from the expected pace (0 when met)
    pub delta: u32,
}

impl ScheduleStatus {
    /// Status for a reached target.
    pub fn met() -> Self {
        Self {
            direction: ScheduleDirection::Met,
            delta: 0,
        }
    }

    /// Whether the target has been reached.
    pub fn is_met(&self) -> bool {
        self.direction == ScheduleDirection::Met
    }
}

/// Progress against a goal. Derived on every refresh, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// What the goal counts
    pub goal_type: GoalType,

    /// Goal target
    pub target: u32,

    /// Books or pages read this year
    pub completed_count: u32,

    /// Completion in `[0, 1]`
    pub fraction: f64,

    /// Week of the year the snapshot was taken in
    pub current_week: u32,

    /// Weeks left in the year (may be zero or negative)
    pub weeks_remaining: i32,

    /// Units per week still needed, `None` when no weeks remain
    pub weekly_pace_needed: Option<f64>,

    /// Schedule standing
    pub schedule: ScheduleStatus,
}

impl ProgressSnapshot {
    /// Completion as a percentage in `[0, 100]`.
    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }
}
