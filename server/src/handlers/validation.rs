//! Input checks applied before anything reaches the store.

use crate::error::{AppError, Result};
use bookshelf_engine::{BookCandidate, MAX_PAGE_SIZE};

pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_AUTHOR_LEN: usize = 1;
pub const MAX_DESCRIPTION_LEN: usize = 100;
pub const MAX_RATING: u8 = 5;

/// Validate a create or update body.
pub fn validate_candidate(candidate: &BookCandidate) -> Result<()> {
    check_min_len("title", &candidate.title, MIN_TITLE_LEN)?;
    check_min_len("author", &candidate.author, MIN_AUTHOR_LEN)?;
    check_min_len("description", &candidate.description, 1)?;

    if candidate.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(AppError::Validation(format!(
            "description must be at most {} characters",
            MAX_DESCRIPTION_LEN
        )));
    }

    if candidate.rating > MAX_RATING {
        return Err(AppError::Validation(format!(
            "rating must be between 0 and {}",
            MAX_RATING
        )));
    }

    Ok(())
}

/// Validate page selection.
pub fn validate_page(page: u32, page_size: u32) -> Result<()> {
    if page == 0 {
        return Err(AppError::Validation("page must be at least 1".into()));
    }

    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(AppError::Validation(format!(
            "page_size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }

    Ok(())
}

fn check_min_len(field: &str, value: &str, min: usize) -> Result<()> {
    if value.chars().count() < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}
