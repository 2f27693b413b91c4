use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{datastore::SummaryStore, TopicSummary};

/// Persists a summary as 2-space indented UTF-8 JSON at a fixed path.
///
/// Every save overwrites the file; there is no locking against concurrent
/// writers.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SummaryStore for JsonFileStore {
    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    async fn save_summary(&self, summary: &TopicSummary) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(summary)
            .context("Failed to serialize topic summary")?;

        tokio::fs::write(&self.path, contents)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to write summary file"))
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        tracing::info!("Saved topic summary");
        Ok(())
    }
}
