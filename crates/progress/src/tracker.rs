//! Goal page service.

use bookgoal_core::{Book, ReadingGoal, Shelf, ShelfName};
use bookgoal_storage::Storage;
use serde::Serialize;
use tracing::{debug, info, warn};
use crate::calculator::{CalculatorConfig, GoalProgressCalculator};
use crate::clock::Clock;
use crate::error::Result;
use crate::snapshot::ProgressSnapshot;
use crate::tally::{find_read_shelf, ReadTally};

/// What the goal page shows after a refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GoalPage {
    /// No goal has been set
    NoGoal,
    /// A goal exists but there is no Read shelf to count from
    NoReadShelf {
        /// The current goal
        goal: ReadingGoal,
    },
    /// Goal and progress
    Progress(ProgressSnapshot),
}

/// Configuration for the goal tracker.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackerConfig {
    /// Calculator settings
    pub calculator: CalculatorConfig,
    /// Source of the current date
    pub clock: Clock,
}

/// Loads the goal and read shelf, and recomputes progress on every call.
///
/// Holds no page state between calls.
pub struct GoalTracker<S: Storage> {
    storage: S,
    calculator: GoalProgressCalculator,
    clock: Clock,
}

impl<S: Storage> GoalTracker<S> {
    /// Create a tracker with the system clock and a 52-week year.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            calculator: GoalProgressCalculator::new(),
            clock: Clock::System,
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.calculator = GoalProgressCalculator::new().with_config(config.calculator);
        self.clock = config.clock;
        self
    }

    /// Underlying store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The current goal, if one is set.
    ///
    /// Should more than one goal be stored, the newest wins.
    pub async fn current_goal(&self) -> Result<Option<ReadingGoal>> {
        let goals = self.storage.list_goals().await?;
        Ok(goals.into_iter().max_by_key(|g| g.created_at))
    }

    /// Recompute the goal page from the store.
    pub async fn refresh(&self) -> Result<GoalPage> {
        let Some(goal) = self.current_goal().await? else {
            debug!("No reading goal set");
            return Ok(GoalPage::NoGoal);
        };

        let shelves = self.storage.list_shelves().await?;
        let Some(read_shelf) = find_read_shelf(&shelves) else {
            warn!("Read shelf not found; cannot count progress for goal {}", goal.id);
            return Ok(GoalPage::NoReadShelf { goal });
        };

        let year = self.clock.current_year();
        let week = self.clock.week_of_year();
        let completed = ReadTally::from_shelf(read_shelf, year).completed_for(goal.goal_type);

        info!(
            "Goal {}: {} of {} {} read in {} (week {})",
            goal.id, completed, goal.target, goal.goal_type, year, week
        );

        Ok(GoalPage::Progress(self.calculator.snapshot(&goal, completed, week)))
    }

    /// Replace the current goal and recompute the page.
    pub async fn save_goal(&mut self, goal: ReadingGoal) -> Result<GoalPage> {
        for old in self.storage.list_goals().await? {
            if old.id != goal.id {
                debug!("Replacing goal {}", old.id);
                self.storage.delete_goal(old.id).await?;
            }
        }

        self.storage.save_goal(&goal).await?;
        info!("Saved reading goal: {} {}", goal.target, goal.goal_type);

        self.refresh().await
    }

    /// Remove the current goal. Returns whether one existed.
    pub async fn clear_goal(&mut self) -> Result<bool> {
        let goals = self.storage.list_goals().await?;
        let existed = !goals.is_empty();
        for goal in goals {
            self.storage.delete_goal(goal.id).await?;
        }
        if existed {
            info!("Cleared reading goal");
        }
        Ok(existed)
    }

    /// Put a book on a shelf, creating the shelf if needed.
    pub async fn add_book(&mut self, shelf_name: ShelfName, book: Book) -> Result<()> {
        let mut shelf = self
            .storage
            .load_shelf(shelf_name)
            .await?
            .unwrap_or_else(|| Shelf::new(shelf_name));

        debug!("Adding '{}' to shelf {}", book.title, shelf_name);
        shelf.books.push(book);
        self.storage.save_shelf(&shelf).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookgoal_core::{GoalId, GoalType};
    use bookgoal_storage::StorageError;
    use crate::error::ProgressError;
    use crate::presenter::present;
    use crate::snapshot::ScheduleDirection;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        goals: Vec<ReadingGoal>,
        shelves: HashMap<ShelfName, Shelf>,
        fail: bool,
    }

    impl MockStorage {
        fn check(&self) -> bookgoal_storage::Result<()> {
            if self.fail {
                return Err(StorageError::Io(std::io::Error::other("disk on fire")));
            }
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl Storage for MockStorage {
        async fn save_goal(&mut self, goal: &ReadingGoal) -> bookgoal_storage::Result<()> {
            self.check()?;
            self.goals.retain(|g| g.id != goal.id);
            self.goals.push(goal.clone());
            Ok(())
        }
        async fn list_goals(&self) -> bookgoal_storage::Result<Vec<ReadingGoal>> {
            self.check()?;
            Ok(self.goals.clone())
        }
        async fn delete_goal(&mut self, id: GoalId) -> bookgoal_storage::Result<()> {
            self.check()?;
            self.goals.retain(|g| g.id != id);
            Ok(())
        }
        async fn save_shelf(&mut self, shelf: &Shelf) -> bookgoal_storage::Result<()> {
            self.check()?;
            self.shelves.insert(shelf.name, shelf.clone());
            Ok(())
        }
        async fn load_shelf(&self, name: ShelfName) -> bookgoal_storage::Result<Option<Shelf>> {
            self.check()?;
            Ok(self.shelves.get(&name).cloned())
        }
        async fn list_shelves(&self) -> bookgoal_storage::Result<Vec<Shelf>> {
            self.check()?;
            Ok(self.shelves.values().cloned().collect())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-03-11 is ISO week 11
    fn tracker(storage: MockStorage) -> GoalTracker<MockStorage> {
        GoalTracker::new(storage).with_config(TrackerConfig {
            clock: Clock::fixed_on(date(2024, 3, 11)),
            ..Default::default()
        })
    }

    fn read_shelf() -> Shelf {
        Shelf::new(ShelfName::Read)
            .with_book(Book::new("Kindred", 264).finished_on(date(2024, 1, 20)))
            .with_book(Book::new("Piranesi", 272).finished_on(date(2024, 2, 28)))
            .with_book(Book::new("Gilead", 247).finished_on(date(2023, 11, 2)))
    }

    #[tokio::test]
    async fn test_refresh_without_goal() {
        let t = tracker(MockStorage::default());
        assert_eq!(t.refresh().await.unwrap(), GoalPage::NoGoal);
    }

    #[tokio::test]
    async fn test_refresh_without_read_shelf() {
        let mut t = tracker(MockStorage::default());
        let goal = ReadingGoal::books(12).unwrap();
        let page = t.save_goal(goal.clone()).await.unwrap();
        assert_eq!(page, GoalPage::NoReadShelf { goal });
    }

    #[tokio::test]
    async fn test_books_progress_counts_this_year_only() {
        let mut storage = MockStorage::default();
        storage.shelves.insert(ShelfName::Read, read_shelf());
        let mut t = tracker(storage);

        let page = t.save_goal(ReadingGoal::books(52).unwrap()).await.unwrap();
        let GoalPage::Progress(snap) = page else {
            panic!("expected progress page");
        };

        assert_eq!(snap.goal_type, GoalType::Books);
        assert_eq!(snap.completed_count, 2);
        assert_eq!(snap.current_week, 11);
        assert_eq!(snap.weeks_remaining, 41);
        // expected = 1 * 11
        assert_eq!(snap.schedule.direction, ScheduleDirection::Behind);
        assert_eq!(snap.schedule.delta, 9);
        assert_eq!(snap.weekly_pace_needed, Some(2.0));
    }

    #[tokio::test]
    async fn test_pages_progress() {
        let mut storage = MockStorage::default();
        storage.shelves.insert(ShelfName::Read, read_shelf());
        let mut t = tracker(storage);

        let page = t.save_goal(ReadingGoal::pages(1072).unwrap()).await.unwrap();
        let GoalPage::Progress(snap) = page else {
            panic!("expected progress page");
        };
        assert_eq!(snap.completed_count, 536);
        assert_eq!(snap.fraction, 0.5);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_goal() {
        let mut t = tracker(MockStorage::default());
        t.save_goal(ReadingGoal::books(10).unwrap()).await.unwrap();
        let newer = ReadingGoal::pages(3000).unwrap();
        t.save_goal(newer.clone()).await.unwrap();

        let goals = t.storage().list_goals().await.unwrap();
        assert_eq!(goals, vec![newer.clone()]);
        assert_eq!(t.current_goal().await.unwrap(), Some(newer));
    }

    #[tokio::test]
    async fn test_clear_goal() {
        let mut t = tracker(MockStorage::default());
        assert!(!t.clear_goal().await.unwrap());

        t.save_goal(ReadingGoal::books(10).unwrap()).await.unwrap();
        assert!(t.clear_goal().await.unwrap());
        assert_eq!(t.refresh().await.unwrap(), GoalPage::NoGoal);
    }

    #[tokio::test]
    async fn test_add_book_creates_shelf() {
        let mut t = tracker(MockStorage::default());
        t.add_book(ShelfName::Read, Book::new("Lolly Willowes", 240).finished_on(date(2024, 3, 1)))
            .await
            .unwrap();
        t.save_goal(ReadingGoal::books(1).unwrap()).await.unwrap();

        let GoalPage::Progress(snap) = t.refresh().await.unwrap() else {
            panic!("expected progress");
        };
        assert!(snap.schedule.is_met());
        assert_eq!(snap.fraction, 1.0);
    }

    #[tokio::test]
    async fn test_new_year_day_in_previous_iso_year() {
        let mut storage = MockStorage::default();
        storage.shelves.insert(ShelfName::Read, read_shelf());
        let mut t = GoalTracker::new(storage).with_config(TrackerConfig {
            clock: Clock::fixed_on(date(2021, 1, 1)),
            ..Default::default()
        });

        let page = t.save_goal(ReadingGoal::books(52).unwrap()).await.unwrap();
        let display = present(&page);
        let GoalPage::Progress(snap) = page else {
            panic!("expected progress page");
        };

        assert_eq!(snap.completed_count, 0);
        assert_eq!(snap.current_week, 1);
        assert_eq!(snap.weeks_remaining, 51);
        assert_eq!(snap.schedule.direction, ScheduleDirection::Behind);
        assert_eq!(snap.schedule.delta, 1);
        assert_eq!(display.schedule.as_deref(), Some("You are 1 books behind schedule"));
        assert!(display.pace.is_some());
    }

    #[tokio::test]
    async fn test_late_december_in_next_iso_year() {
        let mut shelf = Shelf::new(ShelfName::Read);
        for i in 0..50 {
            shelf = shelf.with_book(Book::new(format!("Book {i}"), 200).finished_on(date(2024, 6, 1)));
        }
        let mut storage = MockStorage::default();
        storage.shelves.insert(ShelfName::Read, shelf);
        let mut t = GoalTracker::new(storage).with_config(TrackerConfig {
            clock: Clock::fixed_on(date(2024, 12, 30)),
            ..Default::default()
        });

        let page = t.save_goal(ReadingGoal::books(52).unwrap()).await.unwrap();
        let display = present(&page);
        let GoalPage::Progress(snap) = page else {
            panic!("expected progress page");
        };

        assert_eq!(snap.completed_count, 50);
        assert_eq!(snap.current_week, 52);
        assert_eq!(snap.weeks_remaining, 0);
        assert_eq!(snap.schedule.direction, ScheduleDirection::Behind);
        assert_eq!(snap.schedule.delta, 2);
        assert_eq!(display.schedule.as_deref(), Some("You are 2 books behind schedule"));
        assert!(display.pace.is_none());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let t = tracker(MockStorage {
            fail: true,
            ..Default::default()
        });
        let err = t.refresh().await.unwrap_err();
        assert!(matches!(err, ProgressError::Storage(StorageError::Io(_))));
    }
}
