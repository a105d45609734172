//! Book types: the stored record, the client candidate and the public view.

use crate::{BookId, Rating};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields a client supplies to create or replace a book.
///
/// Any `id` in the incoming body is ignored on deserialization; the store
/// owns identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCandidate {
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: Rating,
    /// Falls back to today on create and to the stored date on update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
}

impl BookCandidate {
    /// Create a candidate without a publication date.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        rating: Rating,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            description: description.into(),
            rating,
            published_date: None,
        }
    }

    /// Set the publication date.
    pub fn published_on(mut self, date: NaiveDate) -> Self {
        self.published_date = Some(date);
        self
    }
}

/// A book record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: Rating,
    pub published_date: NaiveDate,
    search: String,
}

impl Book {
    /// Build a record from a candidate, deriving its search text.
    ///
    /// `published_date` is used only when the candidate carries none.
    pub fn new(id: BookId, candidate: BookCandidate, published_date: NaiveDate) -> Self {
        let mut book = Self {
            id,
            title: candidate.title,
            author: candidate.author,
            description: candidate.description,
            rating: candidate.rating,
            published_date: candidate.published_date.unwrap_or(published_date),
            search: String::new(),
        };
        book.refresh_search();
        book
    }

    /// Replace every client-owned field, keeping `id` and, when the candidate
    /// has none, the current publication date.
    pub fn replace(&mut self, candidate: BookCandidate) {
        self.title = candidate.title;
        self.author = candidate.author;
        self.description = candidate.description;
        self.rating = candidate.rating;
        if let Some(date) = candidate.published_date {
            self.published_date = date;
        }
        self.refresh_search();
    }

    /// Derived text used for substring search.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Outward-facing projection of this record.
    pub fn view(&self) -> BookView {
        BookView::from(self)
    }

    fn refresh_search(&mut self) {
        self.search = derive_search(&self.title, &self.author, self.rating);
    }
}

/// Search text for a book: title, author and rating joined by spaces.
pub fn derive_search(title: &str, author: &str, rating: Rating) -> String {
    format!("{} {} {}", title, author, rating)
}

/// The public representation of a book. Has no search field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookView {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: Rating,
    pub published_date: NaiveDate,
}

impl From<&Book> for BookView {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            rating: book.rating,
            published_date: book.published_date,
        }
    }
}

impl From<Book> for BookView {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            description: book.description,
            rating: book.rating,
            published_date: book.published_date,
        }
    }
}
