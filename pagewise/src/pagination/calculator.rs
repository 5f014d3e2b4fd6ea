use crate::error::{Error, Result};

use super::range::page_numbers;
use super::request::{PaginationRequest, FIRST_PAGE};
use super::result::PaginationResult;

/// Compute normalized pagination metadata
///
/// Returns `None` when `total_records` is negative or not a number. That is
/// the only rejection: a bad page number or page size is clamped to the
/// nearest valid value instead.
///
/// The result depends on nothing but the request, so callers that need a
/// different page recompute it from scratch.
///
/// # Example
///
/// ```rust
/// use pagewise::pagination::{calculate, PaginationRequest};
///
/// // Page 3 of a 10-item collection clamps down to the only page
/// let result = calculate(&PaginationRequest::new(10).with_page_size(20).with_page(3)).unwrap();
/// assert_eq!(result.current_page, 1);
/// assert_eq!(result.item_count, 10);
///
/// // A negative count cannot be paginated
/// assert!(calculate(&PaginationRequest::new(-5)).is_none());
/// ```
#[must_use]
pub fn calculate(request: &PaginationRequest) -> Option<PaginationResult> {
    let total_records = match request.total_records {
        Some(records) if records >= 0 => records as u64,
        other => {
            tracing::debug!(total_records = ?other, "rejecting pagination request");
            return None;
        }
    };

    let page_size = request.limits.clamp(request.page_size);
    let total_pages = total_records.div_ceil(page_size).max(FIRST_PAGE);

    let current_page = match request.requested_page {
        Some(page) if page >= 1 => (page as u64).min(total_pages),
        _ => FIRST_PAGE,
    };

    if request.page_size != Some(page_size as i64)
        || request.requested_page != Some(current_page as i64)
    {
        tracing::trace!(
            requested_page = ?request.requested_page,
            current_page,
            requested_size = ?request.page_size,
            page_size,
            "normalized pagination input"
        );
    }

    let first_index = offset_based(current_page, page_size);
    let last_index = (first_index + page_size - 1).min(total_records.saturating_sub(1));
    let item_count = if total_records == 0 {
        0
    } else {
        last_index - first_index + 1
    };

    let has_next = current_page < total_pages;
    let has_previous = current_page > FIRST_PAGE;

    Some(PaginationResult {
        total_records,
        normalized_page_size: page_size,
        total_pages,
        current_page,
        first_page: FIRST_PAGE,
        first_index,
        last_index,
        item_count,
        has_next,
        has_previous,
        next_page: has_next.then(|| current_page + 1),
        previous_page: has_previous.then(|| current_page - 1),
        is_last_page: current_page == total_pages,
        page_list: request.include_page_list.then(|| page_numbers(total_pages)),
        limits: request.echo_limits.then(|| request.limits.normalized()),
    })
}

/// Like [`calculate`], but reports the rejected record count as an error
///
/// # Example
///
/// ```rust
/// use pagewise::error::Error;
/// use pagewise::pagination::{try_calculate, PaginationRequest};
///
/// let err = try_calculate(&PaginationRequest::from_parts(None, Some(20), Some(1))).unwrap_err();
/// assert!(matches!(err, Error::InvalidRecordCount(_)));
/// ```
pub fn try_calculate(request: &PaginationRequest) -> Result<PaginationResult> {
    calculate(request).ok_or_else(|| Error::invalid_record_count(request.total_records))
}

/// Zero-based offset of the first item on `page`
///
/// Page `0` is treated as the first page and a page size of `0` as one item
/// per page.
///
/// # Example
///
/// ```rust
/// use pagewise::pagination::offset_based;
///
/// assert_eq!(offset_based(1, 20), 0);
/// assert_eq!(offset_based(3, 20), 40);
/// assert_eq!(offset_based(0, 20), 0);
/// assert_eq!(offset_based(4, 0), 3);
/// ```
#[must_use]
pub fn offset_based(page: u64, page_size: u64) -> u64 {
    page.max(FIRST_PAGE)
        .saturating_sub(1)
        .saturating_mul(page_size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageLimits;

    fn request(records: i64, size: i64, page: i64) -> PaginationRequest {
        PaginationRequest::new(records)
            .with_page_size(size)
            .with_page(page)
    }

    #[test]
    fn test_first_page_of_many() {
        let result = calculate(&request(95, 20, 1)).unwrap();
        assert_eq!(result.total_pages, 5);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.first_index, 0);
        assert_eq!(result.last_index, 19);
        assert_eq!(result.item_count, 20);
        assert!(result.has_next);
        assert!(!result.has_previous);
        assert_eq!(result.next_page, Some(2));
        assert_eq!(result.previous_page, None);
        assert!(!result.is_last_page);
    }

    #[test]
    fn test_partial_last_page() {
        let result = calculate(&request(95, 20, 5)).unwrap();
        assert_eq!(result.total_pages, 5);
        assert_eq!(result.current_page, 5);
        assert_eq!(result.first_index, 80);
        assert_eq!(result.last_index, 94);
        assert_eq!(result.item_count, 15);
        assert!(!result.has_next);
        assert!(result.has_previous);
        assert!(result.is_last_page);
        assert_eq!(result.next_page, None);
        assert_eq!(result.previous_page, Some(4));
    }

    #[test]
    fn test_zero_records_is_one_empty_page() {
        let result = calculate(&request(0, 20, 1)).unwrap();
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.first_index, 0);
        assert_eq!(result.last_index, 0);
        assert_eq!(result.item_count, 0);
        assert!(!result.has_next);
        assert!(!result.has_previous);
        assert!(result.is_last_page);
    }

    #[test]
    fn test_requested_page_clamped_down() {
        let result = calculate(&request(10, 20, 3)).unwrap();
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.first_index, 0);
        assert_eq!(result.last_index, 9);
        assert_eq!(result.item_count, 10);

        let result = calculate(&request(95, 20, 9999)).unwrap();
        assert_eq!(result.current_page, 5);
        assert_eq!(result.first_index, 80);
    }

    #[test]
    fn test_negative_or_missing_records_rejected() {
        assert!(calculate(&request(-5, 20, 1)).is_none());
        assert!(calculate(&request(-1, 20, 1)).is_none());
        assert!(calculate(&PaginationRequest::from_parts(None, Some(20), Some(1))).is_none());
    }

    #[test]
    fn test_bad_page_treated_as_first() {
        for page in [0, -1, -100] {
            let result = calculate(&request(95, 20, page)).unwrap();
            assert_eq!(result.current_page, 1);
            assert_eq!(result.first_index, 0);
        }
        let result = calculate(&PaginationRequest::from_parts(Some(95), Some(20), None)).unwrap();
        assert_eq!(result.current_page, 1);
    }

    #[test]
    fn test_page_size_normalization() {
        let result = calculate(&request(95, 0, 1)).unwrap();
        assert_eq!(result.normalized_page_size, 1);
        assert_eq!(result.total_pages, 95);

        let result = calculate(&PaginationRequest::from_parts(Some(95), None, Some(1))).unwrap();
        assert_eq!(result.normalized_page_size, 1);

        let result = calculate(&request(1000, 500, 1)).unwrap();
        assert_eq!(result.normalized_page_size, 100);
        assert_eq!(result.total_pages, 10);
    }

    #[test]
    fn test_custom_limits() {
        let req = request(95, 3, 2).with_limits(PageLimits::new(10, 30));
        let result = calculate(&req).unwrap();
        assert_eq!(result.normalized_page_size, 10);
        assert_eq!(result.first_index, 10);
        assert_eq!(result.limits, Some(PageLimits::new(10, 30)));

        let req = request(95, 45, 1).with_limits(PageLimits::new(10, 30));
        assert_eq!(calculate(&req).unwrap().normalized_page_size, 30);
    }

    #[test]
    fn test_page_list_only_when_requested() {
        let result = calculate(&request(95, 20, 1)).unwrap();
        assert_eq!(result.page_list, None);

        let result = calculate(&request(95, 20, 1).with_page_list(true)).unwrap();
        assert_eq!(result.page_list, Some(vec![1, 2, 3, 4, 5]));

        let result = calculate(&request(0, 20, 1).with_page_list(true)).unwrap();
        assert_eq!(result.page_list, Some(vec![1]));
    }

    #[test]
    fn test_limits_echo_toggle() {
        let result = calculate(&request(10, 5, 1).with_limits_echo(false)).unwrap();
        assert_eq!(result.limits, None);
    }

    #[test]
    fn test_try_calculate() {
        assert!(try_calculate(&request(95, 20, 1)).is_ok());
        let err = try_calculate(&request(-5, 20, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidRecordCount(_)));
    }

    #[test]
    fn test_huge_record_count() {
        let result = calculate(&request(i64::MAX, 100, i64::MAX)).unwrap();
        assert_eq!(result.total_pages, (i64::MAX as u64).div_ceil(100));
        assert_eq!(result.current_page, result.total_pages);
        assert_eq!(result.last_index, i64::MAX as u64 - 1);
        assert!(result.item_count <= 100);
    }

    #[test]
    fn test_invariants_over_input_grid() {
        for records in 0..=60 {
            for size in -2..=25 {
                for page in -2..=65 {
                    let result = calculate(&request(records, size, page)).unwrap();
                    let records = records as u64;

                    assert!(result.total_pages >= 1);
                    assert!(result.current_page >= 1);
                    assert!(result.current_page <= result.total_pages);
                    assert_eq!(result.has_next, result.current_page < result.total_pages);
                    assert_eq!(result.has_previous, result.current_page > 1);
                    assert_eq!(result.is_last_page, result.current_page == result.total_pages);
                    assert_eq!(result.next_page.is_some(), result.has_next);
                    assert_eq!(result.previous_page.is_some(), result.has_previous);
                    assert!(result.item_count <= result.normalized_page_size);
                    assert!(result.item_count <= records);
                    assert_eq!(
                        result.first_index,
                        (result.current_page - 1) * result.normalized_page_size
                    );

                    if records > 0 {
                        assert!(result.first_index <= result.last_index);
                        assert!(result.last_index <= records - 1);
                        assert_eq!(result.item_count, result.last_index - result.first_index + 1);
                    } else {
                        assert_eq!(result.item_count, 0);
                        assert_eq!(result.last_index, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_pages_partition_the_collection() {
        for records in 0..=45 {
            for size in 1..=12 {
                let total_pages = calculate(&request(records, size, 1)).unwrap().total_pages;
                let covered: u64 = (1..=total_pages as i64)
                    .map(|page| calculate(&request(records, size, page)).unwrap().item_count)
                    .sum();
                assert_eq!(covered, records as u64);
            }
        }
    }

    #[test]
    fn test_current_page_monotonic_in_requested_page() {
        let mut previous = 0;
        for page in -3..=30 {
            let current = calculate(&request(95, 20, page)).unwrap().current_page;
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 5);
    }

    #[test]
    fn test_pure() {
        let req = request(95, 20, 3).with_page_list(true);
        assert_eq!(calculate(&req), calculate(&req));
    }
}
