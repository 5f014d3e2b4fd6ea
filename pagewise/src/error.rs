//! Error types shared across the crate

use thiserror::Error;

/// Result type alias using the crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by pagewise
///
/// Malformed page numbers and page sizes never show up here: the calculator
/// normalizes them. The only pagination input that is rejected is the record
/// count, see [`Error::InvalidRecordCount`].
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error (raw queries, post lists)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The collection size is negative or not a number
    #[error("Invalid record count: {0}")]
    InvalidRecordCount(String),

    /// A value that cannot be normalized into something usable
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup by key failed
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl Error {
    /// Build an [`Error::InvalidRecordCount`] from whatever the caller passed in
    pub fn invalid_record_count(raw: Option<i64>) -> Self {
        match raw {
            Some(value) => Error::InvalidRecordCount(format!("{value} is negative")),
            None => Error::InvalidRecordCount("not a number".to_string()),
        }
    }
}
