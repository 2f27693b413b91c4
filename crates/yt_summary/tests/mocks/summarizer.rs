use std::sync::{Arc, Mutex};
use yt_summary::{parse_summary, parser::VideoId, Summarizer, TopicSummary};

/// Answers with a canned model response, parsed the way a real response is.
#[derive(Clone)]
pub struct MockSummarizer {
    pub response_text: String,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockSummarizer {
    pub fn new(response_text: &str) -> Self {
        Self {
            response_text: response_text.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }
}

impl Summarizer for MockSummarizer {
    type Error = anyhow::Error;

    async fn summarize(
        &self,
        transcript: &str,
        video_id: &VideoId,
    ) -> Result<TopicSummary, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((transcript.to_string(), video_id.to_string()));

        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(parse_summary(&self.response_text)?)
    }
}
