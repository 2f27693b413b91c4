pub mod scraper;
pub mod transcript;

use std::future::Future;

use crate::{parser::VideoId, types::TranscriptSegment};

/// The external transcript service.
pub trait TranscriptFetcher {
    /// Fetches the caption segments of `video_id` in service order.
    fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> impl Future<Output = Result<Vec<TranscriptSegment>, TranscriptError>> + Send;
}

impl<T: TranscriptFetcher + Send + Sync> TranscriptFetcher for &T {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        (**self).fetch_transcript(video_id).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Transcripts are disabled for video ID {0}")]
    TranscriptsDisabled(VideoId),
    #[error(
        "No transcript found for video ID {video_id} in the requested languages {requested:?} (available: {available:?})"
    )]
    NoTranscriptFound {
        video_id: VideoId,
        requested: Vec<String>,
        available: Vec<String>,
    },
    #[error("Video {video_id} is unavailable: {reason}")]
    VideoUnavailable { video_id: VideoId, reason: String },
    #[error("YouTube is rate limiting requests from this IP")]
    TooManyRequests,
    #[error("Transcript service returned HTTP {status}")]
    Http { status: u16 },
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    Parse(#[from] crate::error::Error),
}

impl TranscriptError {
    /// `true` when the video simply has no usable transcript, as opposed to
    /// the service failing.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            TranscriptError::TranscriptsDisabled(_) | TranscriptError::NoTranscriptFound { .. }
        )
    }
}
