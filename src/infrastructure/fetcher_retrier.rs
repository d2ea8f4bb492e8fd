use std::{sync::Arc, time::Duration};

use log::warn;
use tokio::time::sleep;

use crate::{FetchError, HttpFetcher, HttpRequest, HttpResponse};

/// A struct that retries an HttpFetcher a specified number of times in case of transient failure with exponential backoff strategy.
pub struct FetcherRetrier {
    /// The fetcher to be retried.
    fetcher: Arc<dyn HttpFetcher>,

    /// The maximum number of attempts for a request, including the first one.
    max_attempts: u32,

    /// The base delay for exponential backoff.
    base_delay: Duration,
}

impl FetcherRetrier {
    /// Creates a new `FetcherRetrier` instance with the given maximum number of attempts.
    pub fn new(fetcher: Arc<dyn HttpFetcher>, max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            fetcher,
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Delay to wait after the given number of failed attempts (1, 2, 4, ... times the base delay).
    fn calculate_exponential_backoff_delay(&self, failed_attempts: u32) -> Duration {
        self.base_delay
            .checked_mul(2u32.pow(failed_attempts.saturating_sub(1).min(31)))
            .unwrap_or(Duration::MAX)
    }
}

#[async_trait::async_trait]
impl HttpFetcher for FetcherRetrier {
    /// Retries the request on transient failures, up to the maximum number of attempts.
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        let mut attempts = 0;

        loop {
            match self.fetcher.fetch(request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    attempts += 1;
                    warn!(
                        "Fetch attempt #{}/{} failed for {request}: {}",
                        attempts, self.max_attempts, e
                    );
                    if !e.is_retryable() || attempts >= self.max_attempts {
                        return Err(e);
                    }
                    sleep(self.calculate_exponential_backoff_delay(attempts)).await;
                }
            }
        }
    }
}
