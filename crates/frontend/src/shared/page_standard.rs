//! Page category constants.
//!
//! Every screen declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_deposit_queue--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector and it lands in `domain/a001_deposit_queue/`.

/// Table of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Bulk action page (batched assignment, resubmission).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Auto-refreshing status board.
pub const PAGE_CAT_MONITOR: &str = "monitor";

/// Builds the standard page id.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert_eq!(page_id("a003_my_bank", PAGE_CAT_LIST), "a003_my_bank--list");
    }
}
