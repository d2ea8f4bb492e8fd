use std::sync::Arc;

use log::{debug, error, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    FetchError, HarvestConfig, HttpFetcher, HttpRequest, Repository, RepositoryExtractor,
    StdResult,
};

/// The media type of the GitHub REST API v3 JSON responses.
const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    items: Option<Vec<Value>>,
}

#[derive(Deserialize, Debug)]
struct SearchItem {
    name: Option<String>,
    owner: Option<SearchItemOwner>,
    stargazers_count: Option<u64>,
    html_url: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SearchItemOwner {
    login: Option<String>,
}

impl From<SearchItem> for Repository {
    fn from(item: SearchItem) -> Self {
        Repository::new(
            item.name.as_deref(),
            item.owner
                .as_ref()
                .and_then(|owner| owner.login.as_deref()),
            item.stargazers_count.unwrap_or_default(),
            item.html_url.as_deref(),
        )
    }
}

/// Extracts the most starred repositories of a language from the GitHub search API.
///
/// This source is best-effort: failures are logged and yield no repositories.
pub struct GithubRepositoryExtractor {
    fetcher: Arc<dyn HttpFetcher>,
    endpoint: String,
    user_agent: String,
    language: String,
    per_page: u16,
}

impl GithubRepositoryExtractor {
    /// Creates a new `GithubRepositoryExtractor` for the search endpoint of the configuration.
    pub fn new(fetcher: Arc<dyn HttpFetcher>, config: &HarvestConfig) -> Self {
        Self {
            fetcher,
            endpoint: config.github_search_endpoint.to_owned(),
            user_agent: config.user_agent.to_owned(),
            language: config.github_language.to_owned(),
            per_page: config.github_per_page,
        }
    }

    fn search_request(&self) -> HttpRequest {
        HttpRequest::new(&self.endpoint)
            .with_header("User-Agent", &self.user_agent)
            .with_header("Accept", GITHUB_V3_MEDIA_TYPE)
            .with_query_param("q", &format!("language:{}", self.language))
            .with_query_param("sort", "stars")
            .with_query_param("order", "desc")
            .with_query_param("per_page", &self.per_page.to_string())
            .with_query_param("page", "1")
    }

    async fn fetch_search_items(&self) -> Result<Vec<Value>, FetchError> {
        let response = self.fetcher.fetch(&self.search_request()).await?;
        if !response.is_success() {
            warn!("GitHub API answered with status {}", response.status());
        }
        let search_response: SearchResponse = serde_json::from_str(response.body())
            .map_err(|e| FetchError::MalformedData(e.to_string()))?;

        Ok(search_response.items.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl RepositoryExtractor for GithubRepositoryExtractor {
    async fn extract_repositories(&self) -> StdResult<Vec<Repository>> {
        info!("Fetching GitHub repositories");
        let items = match self.fetch_search_items().await {
            Ok(items) => items,
            Err(e) => {
                error!("GitHub API request failed: {e}");
                return Ok(vec![]);
            }
        };
        if items.is_empty() {
            warn!("No GitHub repositories returned (possibly rate limited)");
            return Ok(vec![]);
        }

        let repositories = items
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, item)| match serde_json::from_value::<SearchItem>(item) {
                    Ok(item) => Some(Repository::from(item)),
                    Err(e) => {
                        warn!("Skipping malformed repository item #{}: {e}", index + 1);
                        None
                    }
                },
            )
            .collect::<Vec<_>>();
        for repository in &repositories {
            debug!("Fetched {repository}");
        }
        info!("Fetched {} GitHub repositories", repositories.len());

        Ok(repositories)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::MockServer;
    use serde_json::json;

    use crate::{FetcherRetrier, HttpResponse, MockHttpFetcher, ReqwestFetcher};

    use super::*;

    fn mock_json_value() -> Value {
        json!({
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {
                    "name": "repository-1",
                    "owner": {
                        "login": "owner-1"
                    },
                    "stargazers_count": 100,
                    "html_url": "https://github.com/owner-1/repository-1"
                },
                {
                    "name": "repository-2",
                    "owner": {
                        "login": "owner-2"
                    },
                    "html_url": "https://github.com/owner-2/repository-2"
                }
            ]
        })
    }

    fn extractor_with(fetcher: MockHttpFetcher) -> GithubRepositoryExtractor {
        GithubRepositoryExtractor::new(Arc::new(fetcher), &HarvestConfig::default())
    }

    fn fetcher_answering(status: u16, body: &str) -> MockHttpFetcher {
        let body = body.to_string();
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_fetch()
            .returning(move |_| Ok(HttpResponse::new(status, &body)))
            .times(1);

        fetcher
    }

    #[test]
    fn search_request_targets_most_starred_python_repositories() {
        let extractor = extractor_with(MockHttpFetcher::new());

        let request = extractor.search_request();

        assert_eq!(
            HttpRequest::new("https://api.github.com/search/repositories")
                .with_header("User-Agent", &HarvestConfig::default().user_agent)
                .with_header("Accept", "application/vnd.github.v3+json")
                .with_query_param("q", "language:python")
                .with_query_param("sort", "stars")
                .with_query_param("order", "desc")
                .with_query_param("per_page", "30")
                .with_query_param("page", "1"),
            request
        );
    }

    #[tokio::test]
    async fn extract_repositories_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/search/repositories")
                .header("user-agent", "web-harvester/test")
                .header("accept", "application/vnd.github.v3+json")
                .query_param("q", "language:python")
                .query_param("sort", "stars")
                .query_param("order", "desc")
                .query_param("per_page", "30")
                .query_param("page", "1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_json_value());
        });
        let config = HarvestConfig {
            github_search_endpoint: server.url("/search/repositories"),
            user_agent: "web-harvester/test".to_string(),
            ..HarvestConfig::default()
        };
        let extractor = GithubRepositoryExtractor::new(
            Arc::new(ReqwestFetcher::try_new(Duration::from_secs(5)).unwrap()),
            &config,
        );

        let repositories = extractor.extract_repositories().await.unwrap();

        mock.assert();
        assert_eq!(
            vec![
                Repository::new(
                    Some("repository-1"),
                    Some("owner-1"),
                    100,
                    Some("https://github.com/owner-1/repository-1")
                ),
                Repository::new(
                    Some("repository-2"),
                    Some("owner-2"),
                    0,
                    Some("https://github.com/owner-2/repository-2")
                ),
            ],
            repositories
        );
    }

    #[tokio::test]
    async fn extract_repositories_keeps_items_with_missing_fields() {
        let body = json!({
            "items": [
                { "stargazers_count": 7 },
                { "name": "repository-2", "owner": {}, "stargazers_count": null }
            ]
        })
        .to_string();
        let extractor = extractor_with(fetcher_answering(200, &body));

        let repositories = extractor.extract_repositories().await.unwrap();

        assert_eq!(
            vec![
                Repository::new(None, None, 7, None),
                Repository::new(Some("repository-2"), None, 0, None),
            ],
            repositories
        );
    }

    #[tokio::test]
    async fn extract_repositories_skips_unreadable_items() {
        let body = json!({
            "items": [
                { "name": 42, "stargazers_count": 1 },
                { "name": "repository-2", "stargazers_count": 2 }
            ]
        })
        .to_string();
        let extractor = extractor_with(fetcher_answering(200, &body));

        let repositories = extractor.extract_repositories().await.unwrap();

        assert_eq!(
            vec![Repository::new(Some("repository-2"), None, 2, None)],
            repositories
        );
    }

    #[tokio::test]
    async fn extract_repositories_returns_empty_when_no_items() {
        let extractor = extractor_with(fetcher_answering(200, r#"{"total_count":0,"items":[]}"#));

        let repositories = extractor.extract_repositories().await.unwrap();

        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn extract_repositories_returns_empty_when_rate_limited() {
        let extractor = extractor_with(fetcher_answering(
            403,
            r#"{"message":"API rate limit exceeded","documentation_url":"https://docs.github.com"}"#,
        ));

        let repositories = extractor.extract_repositories().await.unwrap();

        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn extract_repositories_returns_empty_when_body_is_not_json() {
        let extractor = extractor_with(fetcher_answering(200, "<html>oops</html>"));

        let repositories = extractor.extract_repositories().await.unwrap();

        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn extract_repositories_returns_empty_when_fetcher_always_fails() {
        let fetcher = {
            let mut fetcher = MockHttpFetcher::new();
            fetcher
                .expect_fetch()
                .returning(|_| Err(FetchError::Transient("Server error 502".to_string())))
                .times(3);

            fetcher
        };
        let extractor = GithubRepositoryExtractor::new(
            Arc::new(FetcherRetrier::new(
                Arc::new(fetcher),
                3,
                Duration::from_millis(10),
            )),
            &HarvestConfig::default(),
        );

        let repositories = extractor.extract_repositories().await.unwrap();

        assert!(repositories.is_empty());
    }
}
