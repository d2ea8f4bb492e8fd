use crate::{HarvestReport, StdResult};

/// A trait for harvesting every source into a single report.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DataHarvester {
    /// Harvests the sources, persists the combined report and returns it.
    async fn harvest(&self) -> StdResult<HarvestReport>;
}
