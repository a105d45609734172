//! Edge case tests for bookshelf-engine
//!
//! These tests cover boundary conditions and unusual inputs.

use bookshelf_engine::{
    Book, BookCandidate, BookFilter, BookStore, Error, ListQuery, SortKey, SortOrder,
    MAX_PAGE_SIZE,
};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

// ============================================================================
// Lifecycle walkthrough
// ============================================================================

#[test]
fn seeded_lifecycle() {
    let mut store = BookStore::seeded();

    assert_eq!(store.get(3).unwrap().title, "Lord of the rings");

    store.delete(3).unwrap();
    assert_eq!(store.get(3), Err(Error::BookNotFound(3)));
    assert_eq!(store.list(&ListQuery::default()).books.len(), 5);

    let created = store.create(BookCandidate::new("New", "X", "d", 5), today());
    assert_eq!(created.id, 7);
    assert_eq!(created.published_date, today());
}

#[test]
fn ids_skip_gaps_left_by_deletes() {
    let mut store = BookStore::seeded();
    store.delete(2).unwrap();
    store.delete(4).unwrap();

    let created = store.create(BookCandidate::new("New", "X", "d", 5), today());
    assert_eq!(created.id, 7);
}

#[test]
fn store_from_unordered_ids() {
    let books = [10, 3, 7].map(|id| {
        Book::new(id, BookCandidate::new("Some title", "Someone", "d", 1), today())
    });
    let mut store = BookStore::with_books(books);

    let listing = store.list(&ListQuery::default());
    let ids: Vec<_> = listing.books.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![3, 7, 10]);

    assert_eq!(store.create(BookCandidate::new("Next", "X", "d", 1), today()).id, 11);
}

#[test]
fn emptying_the_store() {
    let mut store = BookStore::seeded();
    for id in 1..=6 {
        store.delete(id).unwrap();
    }

    assert!(store.is_empty());
    assert_eq!(store.list(&ListQuery::default()).total, 0);
    assert_eq!(store.create(BookCandidate::new("Fresh", "X", "d", 0), today()).id, 1);
}

// ============================================================================
// String Edge Cases
// ============================================================================

#[test]
fn unicode_titles_filter_case_insensitively() {
    let mut store = BookStore::new();
    store.create(BookCandidate::new("Война и мир", "Толстой", "Epic", 5), today());
    store.create(BookCandidate::new("Ödön's Café", "Ödön", "Short", 3), today());

    let listing = store.list(&ListQuery::new().filter(BookFilter::new().title("ВОЙНА")));
    assert_eq!(listing.total, 1);

    let listing = store.list(&ListQuery::new().filter(BookFilter::new().author("ödön")));
    assert_eq!(listing.total, 1);
    assert_eq!(listing.books[0].title, "Ödön's Café");
}

#[test]
fn empty_filter_text_matches_everything() {
    let store = BookStore::seeded();
    let listing = store.list(&ListQuery::new().filter(BookFilter::new().title("")));
    assert_eq!(listing.total, 6);
}

#[test]
fn search_filter_matches_rating_digit() {
    let store = BookStore::seeded();
    let listing = store.list(&ListQuery::new().filter(BookFilter::new().search(" 5")));
    let ids: Vec<_> = listing.books.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn search_filter_does_not_see_description() {
    let store = BookStore::seeded();
    let listing = store.list(&ListQuery::new().filter(BookFilter::new().search("exciting")));
    assert_eq!(listing.total, 0);
}

#[test]
fn search_follows_updates() {
    let mut store = BookStore::seeded();
    store
        .update(1, BookCandidate::new("Algorithms", "Knuth", "Classic", 5))
        .unwrap();

    let by_old = store.list(&ListQuery::new().filter(BookFilter::new().search("javier")));
    assert_eq!(by_old.total, 0);

    let by_new = store.list(&ListQuery::new().filter(BookFilter::new().search("knuth")));
    assert_eq!(by_new.total, 1);
}

// ============================================================================
// Pagination Edge Cases
// ============================================================================

#[test]
fn page_far_past_the_end() {
    let store = BookStore::seeded();
    let listing = store.list(&ListQuery::new().page(u32::MAX, MAX_PAGE_SIZE));
    assert_eq!(listing.total, 6);
    assert!(listing.books.is_empty());
}

#[test]
fn page_size_one_walks_every_book() {
    let store = BookStore::seeded();
    let walked: Vec<_> = (1..=6)
        .flat_map(|page| store.list(&ListQuery::new().page(page, 1)).books)
        .map(|b| b.id)
        .collect();
    assert_eq!(walked, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn total_counts_filtered_not_paged() {
    let store = BookStore::seeded();
    let query = ListQuery::new()
        .filter(BookFilter::new().rating(5))
        .sort(SortKey::Title, SortOrder::Desc)
        .page(1, 1);

    let listing = store.list(&query);
    assert_eq!(listing.total, 2);
    assert_eq!(listing.books.len(), 1);
    assert_eq!(listing.books[0].title, "FastAPI");
}
