use itertools::Itertools;

use crate::{
    parser::VideoId,
    types::TranscriptSegment,
    yt::{TranscriptError, TranscriptFetcher},
};

/// Joins segment texts with single spaces, preserving order.
pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).join(" ")
}

/// Fetches a transcript and flattens it into one text blob.
///
/// Every failure is logged here, where it happens, before being returned.
#[tracing::instrument(skip_all, fields(%video_id))]
pub async fn fetch_transcript_text<F>(
    fetcher: &F,
    video_id: &VideoId,
) -> Result<String, TranscriptError>
where
    F: TranscriptFetcher + Sync,
{
    let segments = fetcher
        .fetch_transcript(video_id)
        .await
        .inspect_err(|e| match e {
            TranscriptError::TranscriptsDisabled(_) => {
                tracing::error!("Transcripts are disabled for video ID {video_id}")
            }
            TranscriptError::NoTranscriptFound { .. } => tracing::error!(
                "No transcript found for video ID {video_id} in the requested language"
            ),
            e => tracing::error!(error = %e, "Error fetching transcript"),
        })?;

    tracing::debug!(segments = segments.len(), "Fetched transcript");
    Ok(join_segments(&segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_preserves_order() {
        let segments = vec![TranscriptSegment::new("hello"), TranscriptSegment::new("world")];
        assert_eq!(join_segments(&segments), "hello world");
    }

    #[test]
    fn test_join_does_not_trim() {
        let segments = vec![TranscriptSegment::new(" a"), TranscriptSegment::new("b ")];
        assert_eq!(join_segments(&segments), " a b ");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_segments(&[]), "");
    }
}
