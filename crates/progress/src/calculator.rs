//! Goal progress arithmetic.
//!
//! Every function here is pure: same inputs, same outputs, no I/O.

use bookgoal_core::ReadingGoal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::snapshot::{ProgressSnapshot, ScheduleDirection, ScheduleStatus};

/// Weeks assumed in a year unless configured otherwise.
pub const WEEKS_IN_YEAR: u32 = 52;

/// Configuration for the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Length of the reading year in weeks
    pub weeks_in_year: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            weeks_in_year: WEEKS_IN_YEAR,
        }
    }
}

/// Computes completion, schedule and pace for a reading goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalProgressCalculator {
    config: CalculatorConfig,
}

impl GoalProgressCalculator {
    /// Create a calculator with a 52-week year.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Configured weeks in the year.
    pub fn weeks_in_year(&self) -> u32 {
        self.config.weeks_in_year
    }

    /// Fraction of the target completed, clamped to `[0, 1]`.
    ///
    /// A zero target yields `0.0`.
    pub fn compute_fraction(&self, target: u32, completed: u32) -> f64 {
        if target == 0 {
            return 0.0;
        }
        (f64::from(completed) / f64::from(target)).min(1.0)
    }

    /// Weeks left after `current_week`. Zero or negative once the year is spent.
    pub fn weeks_remaining(&self, current_week: u32) -> i32 {
        let remaining = i64::from(self.config.weeks_in_year) - i64::from(current_week);
        i32::try_from(remaining).unwrap_or(if remaining > 0 { i32::MAX } else { i32::MIN })
    }

    /// Units that should be done by `current_week` on a linear schedule.
    ///
    /// The weekly rate is rounded up before multiplying, so small targets
    /// overstate the expected pace: a 10 book goal expects 1 book every week.
    pub fn expected_pace_by_now(&self, target: u32, current_week: u32) -> u32 {
        let weeks = self.config.weeks_in_year;
        if weeks == 0 {
            return 0;
        }
        target.div_ceil(weeks).saturating_mul(current_week)
    }

    /// Whether the reader is behind, ahead of, or done with the schedule.
    pub fn schedule_status(&self, target: u32, completed: u32, current_week: u32) -> ScheduleStatus {
        if completed >= target {
            return ScheduleStatus::met();
        }

        let expected = self.expected_pace_by_now(target, current_week);
        let direction = if completed < expected {
            ScheduleDirection::Behind
        } else {
            ScheduleDirection::Ahead
        };

        ScheduleStatus {
            direction,
            delta: expected.abs_diff(completed),
        }
    }

    /// Units per week needed to hit the target, rounded up.
    ///
    /// `None` when no weeks remain; the pace is undefined at year end.
    pub fn weekly_pace_needed(&self, target: u32, completed: u32, weeks_remaining: i32) -> Option<f64> {
        if weeks_remaining <= 0 {
            return None;
        }
        let still_to_read = f64::from(target.saturating_sub(completed));
        Some((still_to_read / f64::from(weeks_remaining)).ceil())
    }

    /// Full progress picture for one refresh.
    pub fn snapshot(&self, goal: &ReadingGoal, completed: u32, current_week: u32) -> ProgressSnapshot {
        let weeks_remaining = self.weeks_remaining(current_week);
        let snapshot = ProgressSnapshot {
            goal_type: goal.goal_type,
            target: goal.target,
            completed_count: completed,
            fraction: self.compute_fraction(goal.target, completed),
            current_week,
            weeks_remaining,
            weekly_pace_needed: self.weekly_pace_needed(goal.target, completed, weeks_remaining),
            schedule: self.schedule_status(goal.target, completed, current_week),
        };

        debug!(
            goal_target = goal.target,
            completed,
            current_week,
            weeks_remaining,
            "Computed progress snapshot: {:?}",
            snapshot.schedule
        );
        snapshot
    }
}
