//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a003_vendor--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from
//! the DOM inspector and it leads to the `domain/a003_vendor/` directory.

/// Table of records with a bulk action.
pub const PAGE_CAT_LIST: &str = "list";

/// Form editing or creating a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Menu dashboard with charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// File upload / import page.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Login, not-found and other system pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a003_vendor--list"));
        assert!(!is_valid_page_id("a003_vendor"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_vendor--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_USECASE));
        assert!(!is_known_category("legacy"));
    }
}
