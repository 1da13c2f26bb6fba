//! Book model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::id::BookId;

/// A book placed on one of the reader's shelves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Page count
    pub pages: u32,

    /// When the reader finished it, if they have
    pub date_finished: Option<NaiveDate>,
}

impl Book {
    /// Create an unfinished book.
    pub fn new(title: impl Into<String>, pages: u32) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            pages,
            date_finished: None,
        }
    }

    /// Mark the book finished on the given date.
    pub fn finished_on(mut self, date: NaiveDate) -> Self {
        self.date_finished = Some(date);
        self
    }

    /// Whether the book was finished during `year`.
    pub fn finished_in(&self, year: i32) -> bool {
        self.date_finished.map(|d| d.year() == year).unwrap_or(false)
    }
}
