//! Seed data loaded into a fresh store at startup.

use crate::{Book, BookCandidate};
use chrono::NaiveDate;

const SEED: [(&str, &str, &str, u8, (i32, u32, u32)); 6] = [
    ("Computer Science", "Javier", "Great book", 5, (2012, 6, 1)),
    ("FastAPI", "Roby", "Very nice book!", 5, (2021, 3, 15)),
    ("Lord of the rings", "Tolkien", "Really exciting", 4, (1954, 7, 29)),
    ("Harry Potter", "J.K. Rowling", "Amazing", 4, (1997, 6, 26)),
    ("Whatever", "Pepe", "It is ok...", 3, (2015, 1, 10)),
    ("Whatever 2", "Pepe", "Even worst than the first one", 2, (2016, 11, 20)),
];

/// The six seed books, with ids 1 through 6.
pub fn seed_books() -> Vec<Book> {
    SEED.iter()
        .zip(1..)
        .filter_map(|(&(title, author, description, rating, (y, m, d)), id)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Book::new(
                id,
                BookCandidate::new(title, author, description, rating),
                date,
            ))
        })
        .collect()
}
