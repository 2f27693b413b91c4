use std::future::Future;

use crate::TopicSummary;

pub mod json_file;

pub trait SummaryStore {
    fn save_summary(
        &self,
        summary: &TopicSummary,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl<T: SummaryStore + Send + Sync> SummaryStore for &T {
    async fn save_summary(&self, summary: &TopicSummary) -> anyhow::Result<()> {
        (**self).save_summary(summary).await
    }
}
