//! Display text for the goal page.
//!
//! Stateless: every call maps a freshly computed page to strings.

use bookgoal_core::GoalType;
use serde::Serialize;
use crate::snapshot::{ProgressSnapshot, ScheduleDirection};
use crate::tracker::GoalPage;

/// Strings and values a goal page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalDisplay {
    /// Main heading
    pub headline: String,

    /// Progress bar value in `[0, 1]`, absent without a goal
    pub progress: Option<f64>,

    /// "NN.NN% completed"
    pub percentage: Option<String>,

    /// Ahead/behind/met line (books goals only)
    pub schedule: Option<String>,

    /// Weekly pace advice (books goals only, while unmet and weeks remain)
    pub pace: Option<String>,

    /// Label for the set/update goal action
    pub button_label: &'static str,
}

/// Build the display for a page state.
pub fn present(page: &GoalPage) -> GoalDisplay {
    match page {
        GoalPage::NoGoal => GoalDisplay {
            headline: "Reading goal not set".to_string(),
            progress: None,
            percentage: None,
            schedule: None,
            pace: None,
            button_label: "Set goal",
        },
        GoalPage::NoReadShelf { goal } => GoalDisplay {
            headline: format!(
                "Your goal is {} {}, but no read shelf was found",
                goal.target, goal.goal_type
            ),
            progress: None,
            percentage: None,
            schedule: None,
            pace: None,
            button_label: "Update goal",
        },
        GoalPage::Progress(snapshot) => present_progress(snapshot),
    }
}

fn present_progress(snapshot: &ProgressSnapshot) -> GoalDisplay {
    let headline = format!(
        "You have read {} out of {} {}",
        snapshot.completed_count, snapshot.target, snapshot.goal_type
    );

    let (schedule, pace) = match snapshot.goal_type {
        GoalType::Books => (Some(schedule_line(snapshot)), pace_line(snapshot)),
        GoalType::Pages => (None, None),
    };

    GoalDisplay {
        headline,
        progress: Some(snapshot.fraction),
        percentage: Some(format!("{:.2}% completed", snapshot.percentage())),
        schedule,
        pace,
        button_label: "Update goal",
    }
}

fn schedule_line(snapshot: &ProgressSnapshot) -> String {
    let relation = match snapshot.schedule.direction {
        ScheduleDirection::Met => return "Congratulations for reaching your target!".to_string(),
        ScheduleDirection::Behind => "behind",
        ScheduleDirection::Ahead => "ahead of",
    };
    format!("You are {} books {} schedule", snapshot.schedule.delta, relation)
}

fn pace_line(snapshot: &ProgressSnapshot) -> Option<String> {
    if snapshot.schedule.is_met() {
        return None;
    }
    let pace = snapshot.weekly_pace_needed?;
    Some(format!(
        "You need to read {:.0} books a week on average to achieve your goal",
        pace
    ))
}

impl std::fmt::Display for GoalDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.headline)?;
        if let Some(percentage) = &self.percentage {
            writeln!(f, "  {}", percentage)?;
        }
        if let Some(schedule) = &self.schedule {
            writeln!(f, "  {}", schedule)?;
        }
        if let Some(pace) = &self.pace {
            writeln!(f, "  {}", pace)?;
        }
        write!(f, "[{}]", self.button_label)
    }
}
