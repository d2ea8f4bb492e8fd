use std::{sync::Arc, time::Instant};

use chrono::Utc;
use log::{error, info};

use crate::{
    DataHarvester, HarvestReport, QuoteExtractor, ReportPersister, RepositoryExtractor, StdResult,
};

/// A harvester running each source one after the other.
///
/// A failing source is counted and contributes no records, it never aborts the run.
pub struct SequentialHarvester {
    quote_extractor: Arc<dyn QuoteExtractor>,
    repository_extractor: Arc<dyn RepositoryExtractor>,
    persister: Arc<dyn ReportPersister>,
}

impl SequentialHarvester {
    /// Creates a new `SequentialHarvester` instance with the given extractors and persister.
    pub fn new(
        quote_extractor: Arc<dyn QuoteExtractor>,
        repository_extractor: Arc<dyn RepositoryExtractor>,
        persister: Arc<dyn ReportPersister>,
    ) -> Self {
        Self {
            quote_extractor,
            repository_extractor,
            persister,
        }
    }
}

#[async_trait::async_trait]
impl DataHarvester for SequentialHarvester {
    async fn harvest(&self) -> StdResult<HarvestReport> {
        let started_at = Instant::now();
        let mut failures = 0;

        let quotes = match self.quote_extractor.extract_quotes().await {
            Ok(quotes) => quotes,
            Err(e) => {
                error!("Quotes scraping failed: {e:?}");
                failures += 1;
                vec![]
            }
        };
        let repositories = match self.repository_extractor.extract_repositories().await {
            Ok(repositories) => repositories,
            Err(e) => {
                error!("GitHub fetch failed: {e:?}");
                failures += 1;
                vec![]
            }
        };

        let report = HarvestReport::new(quotes, repositories, failures, Utc::now());
        self.persister.persist(&report).await?;
        info!(
            "Completed in {:.2}s | {report}",
            started_at.elapsed().as_secs_f64()
        );

        Ok(report)
    }
}
