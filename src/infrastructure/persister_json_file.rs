use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use crate::{HarvestReport, ReportPersister, StdResult};

/// A persister that writes the harvest report to a pretty-printed JSON file.
pub struct JsonFilePersister {
    path: PathBuf,
}

impl JsonFilePersister {
    /// Creates a new `JsonFilePersister` instance writing to the given path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ReportPersister for JsonFilePersister {
    async fn persist(&self, report: &HarvestReport) -> StdResult<()> {
        let content = serde_json::to_string_pretty(report)
            .with_context(|| "Failed to serialize harvest report")?;
        tokio::fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write report to {}", self.path.display()))?;
        info!("Report written to {}", self.path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::{Quote, Repository};

    use super::*;

    fn dummy_report() -> HarvestReport {
        HarvestReport::new(
            vec![Quote::new(
                "“A quote.”",
                "An Author",
                "https://quotes.example.com/author/An-Author",
            )],
            vec![Repository::dummy(1)],
            0,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn persist_writes_indented_json_report() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("output.json");
        let persister = JsonFilePersister::new(&path);
        let report = dummy_report();

        persister.persist(&report).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"quotes\": ["));
        let persisted_report: HarvestReport = serde_json::from_str(&content).unwrap();
        assert_eq!(report, persisted_report);
    }

    #[tokio::test]
    async fn persist_overwrites_previous_report() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("output.json");
        std::fs::write(&path, "previous content").unwrap();
        let persister = JsonFilePersister::new(&path);

        persister.persist(&dummy_report()).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("previous content"));
    }

    #[tokio::test]
    async fn persist_fails_when_directory_does_not_exist() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing").join("output.json");
        let persister = JsonFilePersister::new(&path);

        persister
            .persist(&dummy_report())
            .await
            .expect_err("Expected a write failure");
    }
}
