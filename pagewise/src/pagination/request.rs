//! Pagination input
//!
//! A [`PaginationRequest`] carries caller input as it arrived: the numeric
//! fields are `Option<i64>`, where `None` stands for "not a number". Nothing is
//! validated here; [`calculate`](super::calculate) does all normalization.

use serde::{Deserialize, Serialize};

/// Smallest page size accepted by default
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest page size accepted by default
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page numbers start at one
pub const FIRST_PAGE: u64 = 1;

/// Bounds applied to the requested page size
///
/// # Example
///
/// ```rust
/// use pagewise::pagination::PageLimits;
///
/// let limits = PageLimits::default();
/// assert_eq!((limits.min, limits.max), (1, 100));
///
/// // Zero bounds fall back to the defaults
/// let limits = PageLimits::new(0, 0);
/// assert_eq!((limits.min, limits.max), (1, 100));
///
/// // An inverted pair is widened so that `min <= max`
/// let limits = PageLimits::new(50, 10);
/// assert_eq!((limits.min, limits.max), (50, 50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageLimits {
    /// Lower bound for the page size
    pub min: u32,
    /// Upper bound for the page size
    pub max: u32,
}

impl PageLimits {
    /// Create normalized limits
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        let min = if min == 0 { MIN_PAGE_SIZE } else { min };
        let max = if max == 0 { MAX_PAGE_SIZE } else { max };
        Self {
            min,
            max: max.max(min),
        }
    }

    /// These limits with zero or inverted bounds repaired, as [`PageLimits::new`] does
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::new(self.min, self.max)
    }

    /// Clamp a raw page size into these bounds
    ///
    /// Non-numeric input and anything below `min` resets to `min`.
    #[must_use]
    pub fn clamp(&self, page_size: Option<i64>) -> u64 {
        let limits = self.normalized();
        let (min, max) = (u64::from(limits.min), u64::from(limits.max));
        match page_size {
            Some(size) if size >= 1 => (size as u64).clamp(min, max),
            _ => min,
        }
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            min: MIN_PAGE_SIZE,
            max: MAX_PAGE_SIZE,
        }
    }
}

/// Raw pagination input, constructed fresh per calculation
///
/// # Example
///
/// ```rust
/// use pagewise::pagination::PaginationRequest;
///
/// let request = PaginationRequest::new(95)
///     .with_page_size(20)
///     .with_page(2)
///     .with_page_list(true);
///
/// assert_eq!(request.total_records, Some(95));
/// assert_eq!(request.requested_page, Some(2));
/// assert!(request.include_page_list);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Number of items being paginated. `None` when the input was not a number.
    pub total_records: Option<i64>,

    /// Desired items per page. `None` when the input was not a number.
    #[serde(default)]
    pub page_size: Option<i64>,

    /// 1-based page the caller wants. `None` when the input was not a number.
    #[serde(default)]
    pub requested_page: Option<i64>,

    /// Bounds for `page_size`
    #[serde(default)]
    pub limits: PageLimits,

    /// Materialize `[1 ..= total_pages]` in the result
    #[serde(default)]
    pub include_page_list: bool,

    /// Echo the effective [`PageLimits`] back in the result
    #[serde(default = "default_echo_limits")]
    pub echo_limits: bool,
}

fn default_echo_limits() -> bool {
    true
}

impl PaginationRequest {
    /// Start a request for a collection of `total_records` items
    #[must_use]
    pub fn new(total_records: i64) -> Self {
        Self::from_parts(Some(total_records), None, None)
    }

    /// Build a request from already-coerced parts
    #[must_use]
    pub fn from_parts(
        total_records: Option<i64>,
        page_size: Option<i64>,
        requested_page: Option<i64>,
    ) -> Self {
        Self {
            total_records,
            page_size,
            requested_page,
            limits: PageLimits::default(),
            include_page_list: false,
            echo_limits: default_echo_limits(),
        }
    }

    /// Set the requested page number
    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.requested_page = Some(page);
        self
    }

    /// Set the requested page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Replace the page size bounds
    #[must_use]
    pub fn with_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Ask for the full list of page numbers
    ///
    /// The list holds one entry per page, so it grows with `total_pages`.
    /// Check the page count first when the record count is untrusted.
    #[must_use]
    pub fn with_page_list(mut self, include: bool) -> Self {
        self.include_page_list = include;
        self
    }

    /// Toggle echoing the effective limits in the result
    #[must_use]
    pub fn with_limits_echo(mut self, echo: bool) -> Self {
        self.echo_limits = echo;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_clamp() {
        let limits = PageLimits::default();
        assert_eq!(limits.clamp(Some(20)), 20);
        assert_eq!(limits.clamp(Some(0)), 1);
        assert_eq!(limits.clamp(Some(-7)), 1);
        assert_eq!(limits.clamp(None), 1);
        assert_eq!(limits.clamp(Some(500)), 100);
        assert_eq!(limits.clamp(Some(i64::MAX)), 100);
    }

    #[test]
    fn test_limits_clamp_below_custom_min() {
        let limits = PageLimits::new(5, 50);
        assert_eq!(limits.clamp(Some(3)), 5);
        assert_eq!(limits.clamp(Some(5)), 5);
        assert_eq!(limits.clamp(Some(51)), 50);
    }

    #[test]
    fn test_limits_clamp_tolerates_unnormalized_fields() {
        let limits = PageLimits { min: 50, max: 10 };
        assert_eq!(limits.clamp(Some(20)), 50);

        let limits = PageLimits { min: 0, max: 0 };
        assert_eq!(limits.clamp(Some(20)), 20);
        assert_eq!(limits.clamp(Some(500)), 100);
    }

    #[test]
    fn test_request_defaults() {
        let request = PaginationRequest::new(10);
        assert_eq!(request.total_records, Some(10));
        assert_eq!(request.page_size, None);
        assert_eq!(request.requested_page, None);
        assert_eq!(request.limits, PageLimits::default());
        assert!(!request.include_page_list);
        assert!(request.echo_limits);
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: PaginationRequest =
            serde_json::from_str(r#"{"total_records": 42}"#).unwrap();
        assert_eq!(request, PaginationRequest::new(42));
    }
}
