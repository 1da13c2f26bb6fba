//! Reading goal progress.
//!
//! Pure goal arithmetic, the read-shelf tally, display text, and the
//! tracker service that ties them to storage and the calendar.

#![warn(missing_docs)]

pub mod calculator;
pub mod clock;
pub mod error;
pub mod presenter;
pub mod snapshot;
pub mod tally;
pub mod tracker;

pub use calculator::{CalculatorConfig, GoalProgressCalculator, WEEKS_IN_YEAR};
pub use clock::Clock;
pub use error::{ProgressError, Result};
pub use presenter::{GoalDisplay, present};
pub use snapshot::{ProgressSnapshot, ScheduleDirection, ScheduleStatus};
pub use tally::{ReadTally, find_read_shelf};
pub use tracker::{GoalPage, GoalTracker, TrackerConfig};
