use std::sync::{Arc, Mutex};
use yt_summary::{
    parser::VideoId,
    types::TranscriptSegment,
    yt::{TranscriptError, TranscriptFetcher},
};

#[derive(Debug, Clone, Copy)]
pub enum FetchFailure {
    Disabled,
    NotFound,
    ServiceDown,
}

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<FetchFailure>,
}

impl MockTranscriptFetcher {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            segments: texts.iter().map(|t| TranscriptSegment::new(*t)).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(failure: FetchFailure) -> Self {
        Self {
            fail_with: Some(failure),
            ..Self::new(&[])
        }
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());

        match self.fail_with {
            Some(FetchFailure::Disabled) => {
                Err(TranscriptError::TranscriptsDisabled(video_id.clone()))
            }
            Some(FetchFailure::NotFound) => Err(TranscriptError::NoTranscriptFound {
                video_id: video_id.clone(),
                requested: vec!["en".into()],
                available: vec!["de".into()],
            }),
            Some(FetchFailure::ServiceDown) => Err(TranscriptError::Http { status: 503 }),
            None => Ok(self.segments.clone()),
        }
    }
}
