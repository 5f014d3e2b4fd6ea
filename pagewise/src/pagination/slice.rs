//! Paginating an in-memory collection

use serde::Serialize;

use super::calculator::calculate;
use super::request::{PageLimits, PaginationRequest};
use super::result::PaginationResult;

/// One page of a borrowed collection, plus its navigation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedSlice<'a, T> {
    /// Items on this page
    pub data: &'a [T],
    /// Index of the first item on this page
    pub start: u64,
    /// Index of the last item on this page, inclusive
    pub end: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
    pub page_size: u64,
    /// `[1 ..= total_pages]`
    pub page_list: Vec<u64>,
    pub has_next: bool,
    pub has_previous: bool,
    pub is_last: bool,
}

impl<'a, T> PagedSlice<'a, T> {
    fn from_result(items: &'a [T], result: PaginationResult) -> Self {
        let range = result.slice_range();
        Self {
            data: &items[range],
            start: result.first_index,
            end: result.last_index,
            total_pages: result.total_pages,
            current_page: result.current_page,
            next_page: result.next_page,
            previous_page: result.previous_page,
            page_size: result.normalized_page_size,
            page_list: result.page_list.unwrap_or_default(),
            has_next: result.has_next,
            has_previous: result.has_previous,
            is_last: result.is_last_page,
        }
    }

    /// Everything on one page
    fn single(items: &'a [T]) -> Self {
        let len = items.len() as u64;
        Self {
            data: items,
            start: 0,
            end: len.saturating_sub(1),
            total_pages: 1,
            current_page: 1,
            next_page: None,
            previous_page: None,
            page_size: len,
            page_list: vec![1],
            has_next: false,
            has_previous: false,
            is_last: true,
        }
    }

    /// Number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Slice `items` down to the requested page
///
/// The page number and size are normalized the same way [`calculate`] does it,
/// so out-of-range input still yields a valid page. An empty collection gives
/// one empty page.
///
/// # Example
///
/// ```rust
/// use pagewise::pagination::{paginate_slice, PageLimits};
///
/// let posts: Vec<String> = (1..=45).map(|n| format!("post-{n}")).collect();
/// let page = paginate_slice(&posts, 3, 20, PageLimits::default());
///
/// assert_eq!(page.len(), 5);
/// assert_eq!(page.data[0], "post-41");
/// assert_eq!(page.page_list, vec![1, 2, 3]);
/// assert!(page.is_last);
/// ```
#[must_use]
pub fn paginate_slice<T>(items: &[T], page: i64, page_size: i64, limits: PageLimits) -> PagedSlice<'_, T> {
    let total_records = i64::try_from(items.len()).unwrap_or(i64::MAX);
    let request = PaginationRequest::new(total_records)
        .with_page(page)
        .with_page_size(page_size)
        .with_limits(limits)
        .with_page_list(true)
        .with_limits_echo(false);

    match calculate(&request) {
        Some(result) => PagedSlice::from_result(items, result),
        None => PagedSlice::single(items),
    }
}
