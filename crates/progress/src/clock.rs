//! Calendar lookups behind a fixable clock.

use std::cmp::Ordering;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Source of "now" for goal refreshes.
///
/// `Fixed` pins every lookup to one instant so refreshes are reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Real system time
    #[default]
    System,
    /// Frozen at the given instant
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// A clock frozen at the start of `date` (UTC).
    pub fn fixed_on(date: NaiveDate) -> Self {
        Clock::Fixed(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// Current instant.
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Today's date.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Calendar year used to decide which finished books count.
    pub fn current_year(&self) -> i32 {
        self.today().year()
    }

    /// ISO 8601 week number (1..=53), clamped to the calendar year.
    ///
    /// Early January days that belong to the previous ISO year report week 1,
    /// and late December days that belong to the next ISO year report the
    /// last ISO week of the current year.
    pub fn week_of_year(&self) -> u32 {
        let today = self.today();
        let iso = today.iso_week();
        match iso.year().cmp(&today.year()) {
            Ordering::Less => 1,
            Ordering::Equal => iso.week(),
            Ordering::Greater => last_iso_week(today.year()),
        }
    }
}

/// Dec 28 always falls in the last ISO week of its year.
fn last_iso_week(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|d| d.iso_week().week())
        .unwrap_or(52)
}
