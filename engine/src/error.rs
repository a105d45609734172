//! Error types for the Bookshelf engine.

use crate::BookId;
use thiserror::Error;

/// All possible errors from the Bookshelf engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Lookup errors
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    // Query parameter errors
    #[error("unknown sort key '{0}': expected one of id, title, author, rating, published_date")]
    UnknownSortKey(String),

    #[error("unknown sort order '{0}': expected asc or desc")]
    UnknownSortOrder(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
