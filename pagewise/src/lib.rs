//! # pagewise
//!
//! Pagination math for content listings: a pure calculator that turns a record
//! count, page size and requested page into consistent offsets and navigation
//! state, plus the pieces a blog index needs around it.
//!
//! ## Features
//!
//! - **Calculator**: clamps bad page numbers and sizes instead of failing
//! - **Range generator**: inclusive integer ranges with auto-reversing steps
//! - **Boundary coercion**: loose query/JSON input to typed requests
//! - **Slice pagination**: page through an in-memory collection
//! - **Related posts**: rank posts by shared category and tags
//! - **Listing**: previous/next neighbours, tag and category lookups by slug
//! - **Configuration**: Figment-based layered config and tracing setup
//!
//! ## Example
//!
//! ```rust
//! use pagewise::prelude::*;
//!
//! let request = PaginationRequest::new(95)
//!     .with_page_size(20)
//!     .with_page(5);
//!
//! let result = calculate(&request).unwrap();
//! assert_eq!(result.current_page, 5);
//! assert_eq!(result.item_count, 15);
//! assert!(result.is_last_page);
//! ```

pub mod config;
pub mod error;
pub mod listing;
pub mod observability;
pub mod pagination;
pub mod related;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, LoggingConfig, PaginationConfig, RelatedConfig};
    pub use crate::error::{Error, Result};
    pub use crate::listing::{neighbours, slugify, Neighbours};
    pub use crate::observability::init_tracing;
    pub use crate::pagination::{
        calculate, calculate_range, coerce_number, coerce_value, offset_based, paginate_slice,
        try_calculate, PageLimits, PagedSlice, PaginationQuery, PaginationRequest,
        PaginationResult,
    };
    pub use crate::related::{Post, ScoredPost, SimilarPosts};
}
