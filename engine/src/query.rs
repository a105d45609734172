//! Query parameters for listing books.
//!
//! A [`ListQuery`] bundles the filter, the sort and the page to return. Every
//! part has a default, so `ListQuery::default()` lists the first ten books in
//! id order.

use crate::{error::Result, Book, Error};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Default number of books per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Id,
    Title,
    Author,
    Rating,
    PublishedDate,
}

impl SortKey {
    /// All sortable keys, in declaration order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Id,
        SortKey::Title,
        SortKey::Author,
        SortKey::Rating,
        SortKey::PublishedDate,
    ];

    /// The wire name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Rating => "rating",
            SortKey::PublishedDate => "published_date",
        }
    }

    /// Compare two books by this key, ascending.
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Author => a.author.cmp(&b.author),
            SortKey::Rating => a.rating.cmp(&b.rating),
            SortKey::PublishedDate => a.published_date.cmp(&b.published_date),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownSortKey(s.to_string()))
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Apply this direction to an ascending ordering.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(Error::UnknownSortOrder(other.to_string())),
        }
    }
}

/// 1-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Zero-based index of the first item on this page.
    ///
    /// A page of 0 is treated as page 1.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Conjunctive predicates over books. Unset fields match everything.
///
/// Text filters match case-insensitively anywhere in the target field;
/// `rating` and `published_date` require equality. The rating filter takes
/// any integer so a value outside the rating range simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub title: Option<String>,
    pub search: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i64>,
    pub published_date: Option<NaiveDate>,
}

impl BookFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, needle: impl Into<String>) -> Self {
        self.title = Some(needle.into());
        self
    }

    pub fn search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    pub fn author(mut self, needle: impl Into<String>) -> Self {
        self.author = Some(needle.into());
        self
    }

    pub fn description(mut self, needle: impl Into<String>) -> Self {
        self.description = Some(needle.into());
        self
    }

    pub fn rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn published_date(mut self, date: NaiveDate) -> Self {
        self.published_date = Some(date);
        self
    }

    /// Check whether a book satisfies every supplied predicate.
    pub fn matches(&self, book: &Book) -> bool {
        contains_ci(&book.title, self.title.as_deref())
            && contains_ci(book.search(), self.search.as_deref())
            && contains_ci(&book.author, self.author.as_deref())
            && contains_ci(&book.description, self.description.as_deref())
            && self.rating.is_none_or(|r| i64::from(book.rating) == r)
            && self.published_date.is_none_or(|d| book.published_date == d)
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Everything needed to produce one page of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: BookFilter,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub pagination: Pagination,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: BookFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = key;
        self.sort_order = order;
        self
    }

    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.pagination = Pagination::new(page, page_size);
        self
    }
}
