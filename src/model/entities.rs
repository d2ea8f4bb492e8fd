use std::{fmt::Display, ops::Deref};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A quotation scraped from the quotes site.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quotation text.
    text: String,

    /// The name of the author.
    author: String,

    /// The absolute URL of the author's profile page.
    author_url: String,
}

impl Quote {
    /// Creates a new `Quote` instance.
    pub fn new(text: &str, author: &str, author_url: &str) -> Self {
        Self {
            text: text.to_string(),
            author: author.to_string(),
            author_url: author_url.to_string(),
        }
    }

    /// Retrieves the quotation text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Retrieves the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Retrieves the author profile URL.
    pub fn author_url(&self) -> &str {
        &self.author_url
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Quote: {}, Author: {}", self.text, self.author)
    }
}

/// The name of a repository.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The login of the account owning a repository.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OwnerLogin(pub String);

impl Deref for OwnerLogin {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for OwnerLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of stars a repository has.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarsCounter(pub u64);

impl Deref for StarsCounter {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for StarsCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata of a GitHub repository.
///
/// Any field but the stars may be absent when the API omits it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The name of the repository.
    name: Option<RepositoryName>,

    /// The login of the repository owner.
    owner: Option<OwnerLogin>,

    /// The number of stars the repository has.
    stars: StarsCounter,

    /// The web URL of the repository.
    url: Option<String>,
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(name: Option<&str>, owner: Option<&str>, stars: u64, url: Option<&str>) -> Self {
        Self {
            name: name.map(|name| RepositoryName(name.to_string())),
            owner: owner.map(|owner| OwnerLogin(owner.to_string())),
            stars: StarsCounter(stars),
            url: url.map(|url| url.to_string()),
        }
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> Option<&RepositoryName> {
        self.name.as_ref()
    }

    /// Retrieves the owner login.
    pub fn owner(&self) -> Option<&OwnerLogin> {
        self.owner.as_ref()
    }

    /// Retrieves the total stars of the repository.
    pub fn stars(&self) -> &StarsCounter {
        &self.stars
    }

    /// Retrieves the repository URL.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Creates a dummy `Repository` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(index: u64) -> Self {
        Self::new(
            Some(&format!("repository-{index}")),
            Some(&format!("owner-{index}")),
            index * 10,
            Some(&format!("https://github.com/owner-{index}/repository-{index}")),
        )
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let missing = "<missing>".to_string();
        write!(
            f,
            "Repository: {}, Owner: {}, Stars: {}",
            self.name.as_deref().unwrap_or(&missing),
            self.owner.as_deref().unwrap_or(&missing),
            self.stars
        )
    }
}

/// Metadata describing a harvest run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    /// The UTC time of the run, in ISO-8601 format.
    pub run_time: String,

    /// The number of quotes harvested.
    pub total_quotes: usize,

    /// The number of repositories harvested.
    pub total_repos: usize,

    /// The number of sources that failed (0 to 2).
    pub failures: u8,
}

/// The combined result of a harvest run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HarvestReport {
    /// The harvested quotes.
    quotes: Vec<Quote>,

    /// The harvested repositories.
    github_repos: Vec<Repository>,

    /// The run metadata.
    meta: RunMetadata,
}

impl HarvestReport {
    /// Creates a new `HarvestReport`, computing its metadata.
    pub fn new(
        quotes: Vec<Quote>,
        repositories: Vec<Repository>,
        failures: u8,
        run_time: DateTime<Utc>,
    ) -> Self {
        let meta = RunMetadata {
            run_time: run_time.to_rfc3339_opts(SecondsFormat::Micros, false),
            total_quotes: quotes.len(),
            total_repos: repositories.len(),
            failures,
        };

        Self {
            quotes,
            github_repos: repositories,
            meta,
        }
    }

    /// Retrieves the quotes.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Retrieves the repositories.
    pub fn repositories(&self) -> &[Repository] {
        &self.github_repos
    }

    /// Retrieves the run metadata.
    pub fn meta(&self) -> &RunMetadata {
        &self.meta
    }
}

impl Display for HarvestReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quotes: {} | Repos: {} | Failures: {}",
            self.meta.total_quotes, self.meta.total_repos, self.meta.failures
        )
    }
}
