/// A response returned by a fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub(crate) status: u16,

    /// The response body, decoded as text.
    pub(crate) body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` instance with the given status and body.
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// Retrieves the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Retrieves the response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
