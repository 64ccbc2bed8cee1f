//! Page category constants.
//!
//! Every page declares an HTML `id` of the form `{page}--{category}`
//! (e.g. `"user-management--list"`) and a `data-page-category` taken from
//! the constants below.

/// Table of records with search and paging.
pub const PAGE_CAT_LIST: &str = "list";

/// Summary cards and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Read-only report.
pub const PAGE_CAT_REPORT: &str = "report";

/// Master data / configuration editor.
pub const PAGE_CAT_CONFIG: &str = "config";

/// Administration and settings.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_REPORT,
    PAGE_CAT_CONFIG,
    PAGE_CAT_SYSTEM,
];

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// `{page}--{category}` with both parts non-empty and a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((page, category)) => !page.is_empty() && is_known_category(category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("user-management--list"));
        assert!(is_valid_page_id("home--dashboard"));
        assert!(!is_valid_page_id("home"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("home--widget"));
    }
}
