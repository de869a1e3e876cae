//! Pagination and sorting for list endpoints.
//!
//! Requests carry `page` and `per_page` query parameters; the API reports
//! totals in the `x-number-of-pages` and `x-number-of-items` headers.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

pub const TOTAL_PAGES_HEADER: &str = "x-number-of-pages";
pub const TOTAL_ITEMS_HEADER: &str = "x-number-of-items";

pub const MAX_PER_PAGE: u32 = 100;

/// Page request (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }.normalize()
    }

    /// Clamps out-of-range values to safe defaults
    pub fn normalize(mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.per_page == 0 {
            self.per_page = default_per_page();
        }
        if self.per_page > MAX_PER_PAGE {
            self.per_page = MAX_PER_PAGE;
        }
        self
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            per_page: self.per_page,
        }
    }

    pub(crate) fn query(&self) -> [(&'static str, u32); 2] {
        let normalized = self.normalize();
        [("page", normalized.page), ("per_page", normalized.per_page)]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

/// Totals reported by the API for a paginated call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,

    /// Absent when the API did not send the header
    pub total_pages: Option<u32>,
    pub total_items: Option<u64>,
}

impl PaginationMeta {
    pub fn new(pagination: &Pagination, total_pages: Option<u32>, total_items: Option<u64>) -> Self {
        let pagination = pagination.normalize();
        let total_pages = total_pages.or_else(|| {
            total_items.map(|items| {
                u32::try_from(items.div_ceil(u64::from(pagination.per_page))).unwrap_or(u32::MAX)
            })
        });

        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            total_pages,
            total_items,
        }
    }

    pub fn from_headers(pagination: &Pagination, headers: &HeaderMap) -> Self {
        Self::new(
            pagination,
            header_number(headers, TOTAL_PAGES_HEADER),
            header_number(headers, TOTAL_ITEMS_HEADER),
        )
    }

    pub fn has_next(&self) -> bool {
        self.total_pages.is_some_and(|total| self.page < total)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Request for the following page, if there is one
    pub fn next_page(&self) -> Option<Pagination> {
        self.has_next().then(|| Pagination {
            page: self.page + 1,
            per_page: self.per_page,
        })
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.pagination.has_next()
    }

    pub fn next_page(&self) -> Option<Pagination> {
        self.pagination.next_page()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Sort order, sent as `Sort=Field:DIRECTION`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    pub field: String,
    pub direction: SortDirection,
}

impl Sorting {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    pub(crate) fn query(&self) -> [(&'static str, String); 1] {
        [("Sort", format!("{}:{}", self.field, self.direction.as_str()))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_normalize() {
        assert_eq!(Pagination::new(0, 0), Pagination { page: 1, per_page: 10 });
        assert_eq!(Pagination::new(3, 500).per_page, 100);
        assert_eq!(Pagination::default().query(), [("page", 1), ("per_page", 10)]);
    }

    #[test]
    fn test_meta_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_PAGES_HEADER, HeaderValue::from_static("3"));
        headers.insert(TOTAL_ITEMS_HEADER, HeaderValue::from_static("25"));

        let meta = PaginationMeta::from_headers(&Pagination::new(2, 10), &headers);
        assert_eq!(meta.total_pages, Some(3));
        assert_eq!(meta.total_items, Some(25));
        assert!(meta.has_next());
        assert!(meta.has_prev());
        assert_eq!(meta.next_page(), Some(Pagination::new(3, 10)));
    }

    #[test]
    fn test_meta_without_headers() {
        let meta = PaginationMeta::from_headers(&Pagination::default(), &HeaderMap::new());
        assert_eq!(meta.total_pages, None);
        assert_eq!(meta.total_items, None);
        assert!(!meta.has_next());
        assert!(meta.next_page().is_none());
    }

    #[test]
    fn test_meta_saturates_page_count() {
        let meta = PaginationMeta::new(&Pagination::new(1, 1), None, Some(u64::MAX));
        assert_eq!(meta.total_pages, Some(u32::MAX));
        assert!(meta.has_next());
    }

    #[test]
    fn test_meta_ignores_garbage_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_PAGES_HEADER, HeaderValue::from_static("many"));
        headers.insert(TOTAL_ITEMS_HEADER, HeaderValue::from_static("12"));

        // pages derived from items when the pages header is unusable
        let meta = PaginationMeta::from_headers(&Pagination::new(1, 5), &headers);
        assert_eq!(meta.total_pages, Some(3));
    }

    #[test]
    fn test_sorting_query() {
        assert_eq!(
            Sorting::desc("CreationDate").query(),
            [("Sort", "CreationDate:DESC".to_string())]
        );
        assert_eq!(Sorting::asc("Id").query()[0].1, "Id:ASC");
    }

    #[test]
    fn test_page_accessors() {
        let page = Page {
            data: vec![1, 2],
            pagination: PaginationMeta::new(&Pagination::new(1, 2), None, Some(4)),
        };
        assert_eq!(page.len(), 2);
        assert!(page.has_next());
        assert_eq!(page.next_page().map(|p| p.page), Some(2));
        assert_eq!(page.into_data(), vec![1, 2]);
    }

    proptest! {
        #[test]
        fn prop_normalized_in_range(page in 0u32..10_000, per_page in 0u32..10_000) {
            let p = Pagination::new(page, per_page);
            prop_assert!(p.page >= 1);
            prop_assert!((1..=MAX_PER_PAGE).contains(&p.per_page));
        }

        #[test]
        fn prop_derived_pages_cover_items(items in 0u64..100_000, per_page in 1u32..=100) {
            let meta = PaginationMeta::new(&Pagination::new(1, per_page), None, Some(items));
            let pages = u64::from(meta.total_pages.unwrap());
            prop_assert!(pages * u64::from(per_page) >= items);
            if items > 0 {
                prop_assert!((pages - 1) * u64::from(per_page) < items);
            }
        }
    }
}
