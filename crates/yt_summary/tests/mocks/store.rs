use std::sync::{Arc, Mutex};
use yt_summary::{SummaryStore, TopicSummary};

#[derive(Clone, Default)]
pub struct MockSummaryStore {
    pub saved: Arc<Mutex<Vec<TopicSummary>>>,
    pub fail_with: Option<String>,
}

impl MockSummaryStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl SummaryStore for MockSummaryStore {
    async fn save_summary(&self, summary: &TopicSummary) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.saved.lock().unwrap().push(summary.clone());
        Ok(())
    }
}
