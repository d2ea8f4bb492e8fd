use std::{collections::HashSet, sync::Arc};

use anyhow::anyhow;
use log::{debug, info, warn};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::{
    FetchError, HarvestConfig, HttpFetcher, HttpRequest, Quote, QuoteExtractor, StdResult,
};

/// CSS selectors of the quotes site markup.
struct QuoteSelectors {
    quote: Selector,
    text: Selector,
    author: Selector,
    author_link: Selector,
    next_link: Selector,
}

impl QuoteSelectors {
    fn try_new() -> StdResult<Self> {
        Ok(Self {
            quote: parse_selector(".quote")?,
            text: parse_selector(".text")?,
            author: parse_selector(".author")?,
            author_link: parse_selector("a")?,
            next_link: parse_selector("li.next > a")?,
        })
    }
}

fn parse_selector(selector: &str) -> StdResult<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("Invalid CSS selector '{selector}': {e}"))
}

/// Text of an element, made of its whitespace trimmed text nodes.
fn element_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}

/// The quotes and the next page link found on a single page.
#[derive(Debug, PartialEq, Eq)]
struct QuotesPage {
    quotes: Vec<Quote>,
    next_url: Option<Url>,
}

/// Extracts quotes by walking the pages of an HTML quotes site.
pub struct HtmlQuoteExtractor {
    fetcher: Arc<dyn HttpFetcher>,
    base_url: Url,
    user_agent: String,
    selectors: QuoteSelectors,
}

impl HtmlQuoteExtractor {
    /// Creates a new `HtmlQuoteExtractor` for the quotes site of the configuration.
    pub fn try_new(fetcher: Arc<dyn HttpFetcher>, config: &HarvestConfig) -> StdResult<Self> {
        let base_url = Url::parse(&config.quotes_base_url)
            .map_err(|e| anyhow!("Invalid quotes base URL '{}': {e}", config.quotes_base_url))?;

        Ok(Self {
            fetcher,
            base_url,
            user_agent: config.user_agent.to_owned(),
            selectors: QuoteSelectors::try_new()?,
        })
    }

    /// Parses the quotes and the next page link of a page.
    ///
    /// Quote blocks missing their text, author or author link are skipped.
    fn parse_page(&self, html: &str) -> QuotesPage {
        let document = Html::parse_document(html);
        let quotes = document
            .select(&self.selectors.quote)
            .enumerate()
            .filter_map(|(index, element)| match self.parse_quote(element) {
                Ok(quote) => Some(quote),
                Err(e) => {
                    warn!("Skipping malformed quote block #{}: {e}", index + 1);
                    None
                }
            })
            .collect();
        let next_url = document
            .select(&self.selectors.next_link)
            .next()
            .and_then(|element| element.value().attr("href"))
            .and_then(|href| match self.base_url.join(href) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("Ignoring invalid next page link '{href}': {e}");
                    None
                }
            });

        QuotesPage { quotes, next_url }
    }

    fn parse_quote(&self, element: ElementRef) -> Result<Quote, FetchError> {
        let text = element
            .select(&self.selectors.text)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| FetchError::MalformedData("missing quote text".to_string()))?;
        let author = element
            .select(&self.selectors.author)
            .next()
            .map(element_text)
            .filter(|author| !author.is_empty())
            .ok_or_else(|| FetchError::MalformedData("missing quote author".to_string()))?;
        let href = element
            .select(&self.selectors.author_link)
            .next()
            .and_then(|link| link.value().attr("href"))
            .ok_or_else(|| FetchError::MalformedData("missing author link".to_string()))?;
        let author_url = self.base_url.join(href).map_err(|e| {
            FetchError::MalformedData(format!("invalid author link '{href}': {e}"))
        })?;

        Ok(Quote::new(&text, &author, author_url.as_str()))
    }
}

#[async_trait::async_trait]
impl QuoteExtractor for HtmlQuoteExtractor {
    async fn extract_quotes(&self) -> StdResult<Vec<Quote>> {
        let mut quotes = vec![];
        let mut visited_urls = HashSet::new();
        let mut next_url = Some(self.base_url.clone());

        while let Some(url) = next_url.take() {
            if !visited_urls.insert(url.clone()) {
                warn!("Next page link points back to already visited page {url}, stopping");
                break;
            }
            info!("Scraping quotes page: {url}");
            let request =
                HttpRequest::new(url.as_str()).with_header("User-Agent", &self.user_agent);
            let response = self.fetcher.fetch(&request).await?;
            if !response.is_success() {
                warn!(
                    "Unexpected status {} for quotes page {url}, stopping",
                    response.status()
                );
                break;
            }

            let page = self.parse_page(response.body());
            debug!("Found {} quotes on page {url}", page.quotes.len());
            for quote in &page.quotes {
                debug!("Scraped {quote}");
            }
            quotes.extend(page.quotes);
            next_url = page.next_url;
        }
        info!("Scraped {} quotes from {} pages", quotes.len(), visited_urls.len());

        Ok(quotes)
    }
}
