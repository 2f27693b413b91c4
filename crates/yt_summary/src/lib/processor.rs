use std::fmt;

use summary_store::{SummaryStore, TopicSummary};

use crate::{
    error::Error,
    parser::{extract_video_id, VideoId},
    yt::{transcript::fetch_transcript_text, TranscriptError, TranscriptFetcher},
    Summarizer,
};

pub mod builder;

/// Where a pipeline run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Parsing,
    Fetching,
    Summarizing,
    Storing,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            PipelineStage::Parsing => "parsing",
            PipelineStage::Fetching => "fetching",
            PipelineStage::Summarizing => "summarizing",
            PipelineStage::Storing => "storing",
        };
        f.write_str(stage)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Only ever built from [`extract_video_id`]'s error.
    #[error(transparent)]
    InvalidUrl(Error),
    #[error("Transcript unavailable: {0}")]
    TranscriptUnavailable(#[from] TranscriptError),
    #[error("Transcript for video ID {0} is empty")]
    EmptyTranscript(VideoId),
    #[error("Failed to summarize transcript: {0:#}")]
    Summarization(anyhow::Error),
    #[error("Failed to store summary: {0:#}")]
    Store(anyhow::Error),
}

impl PipelineError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::InvalidUrl(_) => PipelineStage::Parsing,
            PipelineError::TranscriptUnavailable(_) | PipelineError::EmptyTranscript(_) => {
                PipelineStage::Fetching
            }
            PipelineError::Summarization(_) => PipelineStage::Summarizing,
            PipelineError::Store(_) => PipelineStage::Storing,
        }
    }

    /// The fetch stage produced no usable transcript.
    pub fn is_transcript_missing(&self) -> bool {
        self.stage() == PipelineStage::Fetching
    }
}

/// Linear pipeline shared by the batch run and the HTTP handler.
#[derive(Debug)]
pub struct SummaryPipeline<T, S>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    transcript_fetcher: T,
    summarizer: S,
}

impl<T, S> SummaryPipeline<T, S>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn new(transcript_fetcher: T, summarizer: S) -> Self {
        SummaryPipeline {
            transcript_fetcher,
            summarizer,
        }
    }

    /// Runs the three stages for `url` and returns the summary.
    #[tracing::instrument(skip(self))]
    pub async fn summarize(&self, url: &str) -> Result<TopicSummary, PipelineError> {
        let video_id = extract_video_id(url)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to parse URL"))
            .map_err(PipelineError::InvalidUrl)?;

        let transcript = fetch_transcript_text(&self.transcript_fetcher, &video_id).await?;
        if transcript.is_empty() {
            tracing::error!(%video_id, "Transcript is empty");
            return Err(PipelineError::EmptyTranscript(video_id));
        }

        let summary = self
            .summarizer
            .summarize(&transcript, &video_id)
            .await
            .map_err(|e| PipelineError::Summarization(e.into()))
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate summary"))?;

        tracing::info!(%video_id, topic = %summary.topic_name, "Generated summary");
        Ok(summary)
    }

    /// Batch entry: summarizes `url` and persists the result to `store`.
    ///
    /// Nothing is written unless every stage succeeded.
    #[tracing::instrument(skip(self, store))]
    pub async fn run<D>(&self, url: &str, store: &D) -> Result<TopicSummary, PipelineError>
    where
        D: SummaryStore + Sync,
    {
        let summary = self.summarize(url).await?;

        store
            .save_summary(&summary)
            .await
            .map_err(PipelineError::Store)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to store summary"))?;

        Ok(summary)
    }
}
