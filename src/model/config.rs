use std::{path::PathBuf, time::Duration};

/// The production base URL of the quotes site.
pub const QUOTES_BASE_URL: &str = "https://quotes.toscrape.com";

/// The production GitHub repository search endpoint.
pub const GITHUB_SEARCH_ENDPOINT: &str = "https://api.github.com/search/repositories";

/// The default path of the output file.
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

/// The default `User-Agent` identifying the harvester.
pub const DEFAULT_USER_AGENT: &str = concat!("web-harvester/", env!("CARGO_PKG_VERSION"));

/// Configuration of a harvest run, handed to each component at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    /// Base URL of the quotes site, also used to resolve relative links.
    pub quotes_base_url: String,

    /// Endpoint of the repository search API.
    pub github_search_endpoint: String,

    /// Path of the JSON report.
    pub output_file: PathBuf,

    /// Value of the `User-Agent` header sent with every request.
    pub user_agent: String,

    /// Maximum number of attempts per request, including the first one.
    pub max_attempts: u32,

    /// Delay before the first retry, doubled after each failed attempt.
    pub base_delay: Duration,

    /// Timeout of a single request.
    pub request_timeout: Duration,

    /// Language filter of the repository search.
    pub github_language: String,

    /// Number of repositories requested.
    pub github_per_page: u16,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            quotes_base_url: QUOTES_BASE_URL.to_string(),
            github_search_endpoint: GITHUB_SEARCH_ENDPOINT.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            request_timeout: Duration::from_secs(10),
            github_language: "python".to_string(),
            github_per_page: 30,
        }
    }
}
