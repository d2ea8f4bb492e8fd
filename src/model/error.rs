use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Fetch error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// A failure expected to resolve itself on retry (network error, server error).
    #[error("Transient error: {0}")]
    Transient(String),

    /// A failure that retrying cannot fix.
    #[error("Non retryable error: {0}")]
    NonRetryable(String),

    /// The payload does not have the expected shape.
    #[error("Malformed data: {0}")]
    MalformedData(String),
}

impl FetchError {
    /// Returns `true` if the failed operation is worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Transient(_))
    }
}
