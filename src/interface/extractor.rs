use crate::{Quote, Repository, StdResult};

/// A trait for extracting quotes from a quotes source.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait QuoteExtractor: Sync + Send {
    /// Extracts every quote of the source, in source order.
    async fn extract_quotes(&self) -> StdResult<Vec<Quote>>;
}

/// A trait for extracting repository metadata from a repository source.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryExtractor: Sync + Send {
    /// Extracts the repositories of the source, in source order.
    async fn extract_repositories(&self) -> StdResult<Vec<Repository>>;
}
