use crate::{FetchError, HttpRequest, HttpResponse};

/// A trait for fetching a resource over HTTP.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HttpFetcher: Sync + Send {
    /// Fetches the resource described by the request.
    ///
    /// Server errors are reported as failures, other statuses are returned as responses.
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError>;
}
