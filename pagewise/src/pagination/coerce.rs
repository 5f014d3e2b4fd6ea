//! Boundary coercion for loosely-typed pagination input
//!
//! Page numbers and sizes usually arrive as query-string text or untyped JSON.
//! Everything here turns such input into `Option<i64>`, where `None` means
//! "not a number", before a [`PaginationRequest`] is built.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::request::{PageLimits, PaginationRequest};

/// Parse numeric-looking text
///
/// Surrounding whitespace is ignored. Finite decimals are floored; anything
/// else, including the empty string, is not a number.
///
/// # Example
///
/// ```rust
/// use pagewise::pagination::coerce_number;
///
/// assert_eq!(coerce_number(" 42 "), Some(42));
/// assert_eq!(coerce_number("-3"), Some(-3));
/// assert_eq!(coerce_number("2.9"), Some(2));
/// assert_eq!(coerce_number("1e2"), Some(100));
/// assert_eq!(coerce_number("abc"), None);
/// assert_eq!(coerce_number(""), None);
/// assert_eq!(coerce_number("NaN"), None);
/// ```
#[must_use]
pub fn coerce_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    trimmed.parse::<f64>().ok().and_then(floor_finite)
}

/// Coerce an untyped JSON value
///
/// Numbers and numeric strings coerce; `null`, booleans, arrays and objects
/// are not numbers.
///
/// # Example
///
/// ```rust
/// use pagewise::pagination::coerce_value;
/// use serde_json::json;
///
/// assert_eq!(coerce_value(&json!(7)), Some(7));
/// assert_eq!(coerce_value(&json!("7")), Some(7));
/// assert_eq!(coerce_value(&json!(7.8)), Some(7));
/// assert_eq!(coerce_value(&json!(null)), None);
/// assert_eq!(coerce_value(&json!(true)), None);
/// ```
#[must_use]
pub fn coerce_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(floor_finite)),
        Value::String(text) => coerce_number(text),
        _ => None,
    }
}

fn floor_finite(value: f64) -> Option<i64> {
    // `as` saturates at the i64 bounds
    value.is_finite().then(|| value.floor() as i64)
}

/// Raw pagination query, as decoded from JSON or a form
///
/// # Example
///
/// ```rust
/// use pagewise::pagination::{calculate, PageLimits, PaginationQuery};
///
/// let query: PaginationQuery =
///     serde_json::from_str(r#"{"records": "95", "page": "two", "limit": 20}"#).unwrap();
/// let request = query.to_request(PageLimits::default());
/// let result = calculate(&request).unwrap();
///
/// // "two" is not a number, so the first page is used
/// assert_eq!(result.current_page, 1);
/// assert_eq!(result.total_pages, 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationQuery {
    /// Number of records
    #[serde(default)]
    pub records: Value,

    /// Requested page
    #[serde(default)]
    pub page: Value,

    /// Requested page size
    #[serde(default)]
    pub limit: Value,

    /// Include the page list
    #[serde(default)]
    pub range: bool,
}

impl PaginationQuery {
    /// Coerce into a [`PaginationRequest`] bounded by `limits`
    #[must_use]
    pub fn to_request(&self, limits: PageLimits) -> PaginationRequest {
        PaginationRequest::from_parts(
            coerce_value(&self.records),
            coerce_value(&self.limit),
            coerce_value(&self.page),
        )
        .with_limits(limits)
        .with_page_list(self.range)
    }

    /// Consume and coerce into a [`PaginationRequest`]
    #[must_use]
    pub fn into_request(self, limits: PageLimits) -> PaginationRequest {
        self.to_request(limits)
    }
}
