//! Predefined shelves.

use serde::{Deserialize, Serialize};
use crate::book::Book;
use crate::error::CoreError;

/// The fixed set of shelves every reader has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShelfName {
    /// Books the reader plans to read
    ToRead,
    /// Books in progress
    Reading,
    /// Finished books; the only shelf counted towards a goal
    Read,
    /// Books abandoned part-way
    DidNotFinish,
}

impl ShelfName {
    /// All predefined shelves, in display order.
    pub const ALL: [ShelfName; 4] = [
        ShelfName::ToRead,
        ShelfName::Reading,
        ShelfName::Read,
        ShelfName::DidNotFinish,
    ];

    /// Stable slug, also used as the storage file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShelfName::ToRead => "to-read",
            ShelfName::Reading => "reading",
            ShelfName::Read => "read",
            ShelfName::DidNotFinish => "did-not-finish",
        }
    }
}

impl std::fmt::Display for ShelfName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ShelfName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "to-read" | "toread" => Ok(ShelfName::ToRead),
            "reading" => Ok(ShelfName::Reading),
            "read" => Ok(ShelfName::Read),
            "did-not-finish" | "dnf" => Ok(ShelfName::DidNotFinish),
            _ => Err(CoreError::UnknownShelf(s.to_string())),
        }
    }
}

/// A named shelf and the books on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    /// Which predefined shelf this is
    pub name: ShelfName,

    /// Books on the shelf
    pub books: Vec<Book>,
}

impl Shelf {
    /// Create an empty shelf.
    pub fn new(name: ShelfName) -> Self {
        Self { name, books: Vec::new() }
    }

    /// Builder-style helper used when seeding shelves.
    pub fn with_book(mut self, book: Book) -> Self {
        self.books.push(book);
        self
    }
}
