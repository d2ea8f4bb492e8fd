use crate::{HarvestReport, StdResult};

/// A trait for persisting a harvest report to a storage medium.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ReportPersister: Sync + Send {
    /// Persists the harvest report to a storage medium.
    async fn persist(&self, report: &HarvestReport) -> StdResult<()>;
}
