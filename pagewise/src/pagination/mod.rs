//! Offset pagination
//!
//! [`calculate`] turns a raw [`PaginationRequest`] into a [`PaginationResult`]
//! whose offsets, page numbers and navigation flags always agree with each
//! other. Bad page numbers and page sizes are clamped, never rejected; only a
//! negative or non-numeric record count yields no result.
//!
//! # Example
//!
//! ```rust
//! use pagewise::pagination::{calculate, PaginationRequest};
//!
//! let request = PaginationRequest::new(95)
//!     .with_page_size(20)
//!     .with_page(1);
//! let result = calculate(&request).unwrap();
//!
//! assert_eq!(result.total_pages, 5);
//! assert_eq!((result.first_index, result.last_index), (0, 19));
//! assert_eq!(result.next_page, Some(2));
//! assert_eq!(result.previous_page, None);
//! ```

mod calculator;
mod coerce;
mod range;
mod request;
mod result;
mod slice;

pub use calculator::{calculate, offset_based, try_calculate};
pub use coerce::{coerce_number, coerce_value, PaginationQuery};
pub use range::calculate_range;
pub use request::{PageLimits, PaginationRequest, FIRST_PAGE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
pub use result::PaginationResult;
pub use slice::{paginate_slice, PagedSlice};
