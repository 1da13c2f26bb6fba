//! Counting what the reader finished this year.

use bookgoal_core::{GoalType, Shelf, ShelfName};
use tracing::debug;

/// Only books on the Read shelf count towards a goal.
pub fn find_read_shelf(shelves: &[Shelf]) -> Option<&Shelf> {
    shelves.iter().find(|s| s.name == ShelfName::Read)
}

/// Books and pages finished in one calendar year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadTally {
    /// Books finished
    pub books: u32,
    /// Pages across those books
    pub pages: u32,
}

impl ReadTally {
    /// Tally books on `shelf` finished during `year`.
    ///
    /// Books without a finish date are skipped for both counts.
    pub fn from_shelf(shelf: &Shelf, year: i32) -> Self {
        let tally = shelf
            .books
            .iter()
            .filter(|b| b.finished_in(year))
            .fold(Self::default(), |acc, b| Self {
                books: acc.books.saturating_add(1),
                pages: acc.pages.saturating_add(b.pages),
            });

        debug!(year, books = tally.books, pages = tally.pages, "Tallied read shelf");
        tally
    }

    /// The count a goal of `goal_type` measures.
    pub fn completed_for(&self, goal_type: GoalType) -> u32 {
        match goal_type {
            GoalType::Books => self.books,
            GoalType::Pages => self.pages,
        }
    }
}
