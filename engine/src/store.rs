//! Store - the in-memory book collection.
//!
//! The Store owns the ordered list of books. It assigns identifiers, keeps the
//! derived search text current and answers listing queries. Collection order
//! is insertion order; reads sort a copy when asked to.

use crate::{error::Result, Book, BookCandidate, BookId, BookView, Error, ListQuery};
use chrono::NaiveDate;

/// One page of a listing plus the filtered total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Number of books that passed the filter, before pagination
    pub total: usize,
    /// The requested page
    pub books: Vec<BookView>,
}

/// The main store holding all books.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Create a store holding the given books in order.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: books.into_iter().collect(),
        }
    }

    /// Create a store holding the six seed books.
    pub fn seeded() -> Self {
        Self::with_books(crate::seed_books())
    }

    /// Number of books held.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the store holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Id the next created book will receive: one past the current maximum.
    pub fn next_id(&self) -> BookId {
        self.books.iter().map(|b| b.id).max().unwrap_or(0) + 1
    }

    /// All books in collection order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Filter, sort and paginate.
    ///
    /// Never fails: an unmatched filter or a page past the end gives an empty
    /// page. The sort is stable, so ties keep collection order.
    pub fn list(&self, query: &ListQuery) -> Listing {
        let mut matched: Vec<&Book> = self
            .books
            .iter()
            .filter(|b| query.filter.matches(b))
            .collect();
        let total = matched.len();

        matched.sort_by(|a, b| query.sort_order.apply(query.sort_by.compare(a, b)));

        let books = matched
            .into_iter()
            .skip(query.pagination.offset())
            .take(query.pagination.page_size as usize)
            .map(BookView::from)
            .collect();

        Listing { total, books }
    }

    /// Get a book by id.
    pub fn get(&self, id: BookId) -> Result<BookView> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .map(BookView::from)
            .ok_or(Error::BookNotFound(id))
    }

    /// Append a new book.
    ///
    /// The candidate's publication date defaults to `today`.
    pub fn create(&mut self, candidate: BookCandidate, today: NaiveDate) -> BookView {
        let book = Book::new(self.next_id(), candidate, today);
        let view = book.view();
        self.books.push(book);
        view
    }

    /// Replace a book in place.
    ///
    /// The id stays `id`; the publication date is kept when the candidate
    /// has none.
    pub fn update(&mut self, id: BookId, candidate: BookCandidate) -> Result<BookView> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(Error::BookNotFound(id))?;

        book.replace(candidate);

        Ok(book.view())
    }

    /// Remove a book, keeping the others in order. Returns the removed book.
    pub fn delete(&mut self, id: BookId) -> Result<BookView> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(Error::BookNotFound(id))?;

        Ok(self.books.remove(index).into())
    }
}
