use std::ops::Range;

use serde::Serialize;

use super::request::PageLimits;

/// Normalized, internally consistent pagination metadata
///
/// Produced only by [`calculate`](super::calculate). Holds for every value:
///
/// - `1 <= current_page <= total_pages`
/// - `has_next == (current_page < total_pages)` and `has_previous == (current_page > 1)`
/// - `item_count <= normalized_page_size` and `item_count <= total_records`
///
/// # Example
///
/// ```rust
/// use pagewise::pagination::{calculate, PaginationRequest};
///
/// let result = calculate(&PaginationRequest::new(95).with_page_size(20).with_page(5)).unwrap();
///
/// assert_eq!(result.total_pages, 5);
/// assert_eq!((result.first_index, result.last_index), (80, 94));
/// assert_eq!(result.item_count, 15);
/// assert!(result.is_last_page);
/// assert_eq!(result.previous_page, Some(4));
/// assert_eq!(result.next_page, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationResult {
    /// Validated number of records
    pub total_records: u64,
    /// Page size after clamping into the limits
    pub normalized_page_size: u64,
    /// Number of pages, never below one
    pub total_pages: u64,
    /// Requested page after clamping into `[1, total_pages]`
    pub current_page: u64,
    /// Always 1
    pub first_page: u64,
    /// Zero-based index of the first item on this page
    pub first_index: u64,
    /// Zero-based index of the last item on this page, inclusive
    pub last_index: u64,
    /// Number of items on this page
    pub item_count: u64,
    pub has_next: bool,
    pub has_previous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u64>,
    pub is_last_page: bool,
    /// `[1 ..= total_pages]` when it was asked for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_list: Option<Vec<u64>>,
    /// Effective page size bounds, unless echoing was switched off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<PageLimits>,
}

impl PaginationResult {
    /// Offset into the full collection, same as `first_index`
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.first_index
    }

    /// Whether the current page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Half-open range for slicing the underlying collection
    ///
    /// Empty when the page holds no items.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pagewise::pagination::{calculate, PaginationRequest};
    ///
    /// let items: Vec<u32> = (0..25).collect();
    /// let request = PaginationRequest::new(items.len() as i64).with_page_size(10).with_page(3);
    /// let result = calculate(&request).unwrap();
    ///
    /// assert_eq!(&items[result.slice_range()], &[20, 21, 22, 23, 24]);
    /// ```
    #[must_use]
    pub fn slice_range(&self) -> Range<usize> {
        let start = usize::try_from(self.first_index).unwrap_or(usize::MAX);
        let len = usize::try_from(self.item_count).unwrap_or(0);
        start..start.saturating_add(len)
    }
}
