use std::time::Duration;

use anyhow::Context;
use log::debug;
use reqwest::Client;

use crate::{FetchError, HttpFetcher, HttpRequest, HttpResponse, StdResult};

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        match error.is_builder() {
            true => FetchError::NonRetryable(error.to_string()),
            false => FetchError::Transient(error.to_string()),
        }
    }
}

/// Fetches resources with a `reqwest` HTTP client.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Creates a new `ReqwestFetcher` instance with the given per request timeout.
    pub fn try_new(timeout: Duration) -> StdResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        debug!("Fetching {request}");
        let mut builder = self.client.get(request.url());
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }

        let response = builder.send().await?;
        let status = response.status();
        if status.is_server_error() {
            return Err(FetchError::Transient(format!(
                "Server error {}",
                status.as_u16()
            )));
        }
        let body = response.text().await?;

        Ok(HttpResponse::new(status.as_u16(), &body))
    }
}
