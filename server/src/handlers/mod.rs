//! Request handlers for book operations.

mod books;
mod validation;

pub use books::*;
pub use validation::*;
