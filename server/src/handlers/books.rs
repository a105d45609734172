//! Book handlers - translate requests into store calls.

use super::validation::{validate_candidate, validate_page};
use crate::error::Result;
use bookshelf_engine::{
    BookCandidate, BookFilter, BookId, BookStore, BookView, ListQuery, Pagination, SortKey,
    SortOrder, DEFAULT_PAGE_SIZE,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query parameters for listing books.
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    pub title: Option<String>,
    pub search: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    /// Any integer; values outside 0-5 match no book
    pub rating: Option<i64>,
    pub published_date: Option<NaiveDate>,
    /// One of id, title, author, rating, published_date
    pub sort_by: Option<String>,
    /// asc or desc
    pub sort_order: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListBooksQuery {
    /// Validate and convert into an engine query.
    pub fn into_list_query(self) -> Result<ListQuery> {
        let sort_by = match self.sort_by.as_deref() {
            Some(key) => key.parse::<SortKey>()?,
            None => SortKey::default(),
        };
        let sort_order = match self.sort_order.as_deref() {
            Some(order) => order.parse::<SortOrder>()?,
            None => SortOrder::default(),
        };

        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        validate_page(page, page_size)?;

        Ok(ListQuery {
            filter: BookFilter {
                title: self.title,
                search: self.search,
                author: self.author,
                description: self.description,
                rating: self.rating,
                published_date: self.published_date,
            },
            sort_by,
            sort_order,
            pagination: Pagination::new(page, page_size),
        })
    }
}

/// Response for listing books.
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    /// Matching books before pagination
    pub total_books: usize,
    pub books: Vec<BookView>,
}

/// List books matching a query.
pub fn handle_list(store: &BookStore, query: ListBooksQuery) -> Result<ListBooksResponse> {
    let query = query.into_list_query()?;
    let listing = store.list(&query);

    tracing::debug!(
        "Listed {} of {} books (sort {} {}, page {})",
        listing.books.len(),
        listing.total,
        query.sort_by,
        query.sort_order,
        query.pagination.page
    );

    Ok(ListBooksResponse {
        total_books: listing.total,
        books: listing.books,
    })
}

/// Fetch one book.
pub fn handle_get(store: &BookStore, id: BookId) -> Result<BookView> {
    Ok(store.get(id)?)
}

/// Create a book. `today` fills in a missing publication date.
pub fn handle_create(
    store: &mut BookStore,
    candidate: BookCandidate,
    today: NaiveDate,
) -> Result<BookView> {
    validate_candidate(&candidate)?;

    let book = store.create(candidate, today);
    tracing::info!("Created book {} ({})", book.id, book.title);

    Ok(book)
}

/// Replace a book.
pub fn handle_update(
    store: &mut BookStore,
    id: BookId,
    candidate: BookCandidate,
) -> Result<BookView> {
    validate_candidate(&candidate)?;

    let book = store.update(id, candidate)?;
    tracing::info!("Updated book {}", id);

    Ok(book)
}

/// Delete a book, returning what was removed.
pub fn handle_delete(store: &mut BookStore, id: BookId) -> Result<BookView> {
    let book = store.delete(id)?;
    tracing::info!("Deleted book {}", id);

    Ok(book)
}
