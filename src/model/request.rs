use std::fmt::Display;

/// A GET request to be issued by a fetcher.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HttpRequest {
    /// The absolute URL to fetch.
    pub(crate) url: String,

    /// The request headers, in insertion order.
    pub(crate) headers: Vec<(String, String)>,

    /// The query parameters, in insertion order.
    pub(crate) query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new `HttpRequest` without headers nor query parameters.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            headers: vec![],
            query: vec![],
        }
    }

    /// Adds a header to the request.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Retrieves the URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Retrieves the headers.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Retrieves the query parameters.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Creates a dummy `HttpRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new("https://example.com/").with_header("User-Agent", "dummy")
    }
}

impl Display for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GET {}", self.url)?;
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("&");
            write!(f, "?{query}")?;
        }

        Ok(())
    }
}
