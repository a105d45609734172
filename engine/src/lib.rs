//! # Bookshelf Engine
//!
//! An in-memory store of book records with filtering, sorting and pagination.
//!
//! This crate holds the query and mutation logic behind the Bookshelf API.
//! It knows nothing about HTTP or the system clock: callers pass validated,
//! typed parameters in and serialize whatever comes back.
//!
//! ## Design Principles
//!
//! - **No IO**: The engine never touches files, network or the wall clock
//! - **Owned state**: A [`BookStore`] is a plain value; sharing it is the caller's job
//! - **Projection by type**: Outward-facing data is a [`BookView`], which has no search field
//!
//! ## Core Concepts
//!
//! ### Books
//!
//! A [`Book`] carries an id assigned by the store, the client-supplied fields
//! and a derived `search` string (`"{title} {author} {rating}"`) used only for
//! substring filtering.
//!
//! ### Candidates
//!
//! A [`BookCandidate`] is what a client sends to create or replace a book. It
//! has no id and an optional publication date.
//!
//! ### Listing
//!
//! [`BookStore::list`] runs filter → sort → paginate → project as one pass
//! and reports the filtered total alongside the requested page:
//! - [`BookFilter`] - conjunctive substring and exact-match predicates
//! - [`SortKey`] / [`SortOrder`] - the enumerated sortable fields
//! - [`Pagination`] - 1-based page and page size
//!
//! ## Quick Start
//!
//! ```rust
//! use bookshelf_engine::{BookCandidate, BookStore, ListQuery};
//! use chrono::NaiveDate;
//!
//! let mut store = BookStore::seeded();
//! let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//!
//! let created = store.create(
//!     BookCandidate::new("New", "X", "d", 5),
//!     today,
//! );
//! assert_eq!(created.id, 7);
//! assert_eq!(created.published_date, today);
//!
//! let listing = store.list(&ListQuery::default());
//! assert_eq!(listing.total, 7);
//! assert_eq!(listing.books.len(), 7);
//! ```

pub mod book;
pub mod error;
pub mod query;
pub mod seed;
pub mod store;

// Re-export main types at crate root
pub use book::{Book, BookCandidate, BookView};
pub use error::Error;
pub use query::{
    BookFilter, ListQuery, Pagination, SortKey, SortOrder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use seed::seed_books;
pub use store::{BookStore, Listing};

/// Type aliases for clarity
pub type BookId = u64;
pub type Rating = u8;
