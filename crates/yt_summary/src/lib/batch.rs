//! Console-facing batch entry: one URL in, `summary.json` out.

use std::io::Write;

use summary_store::{SummaryStore, TopicSummary};

use crate::{yt::TranscriptFetcher, PipelineError, Summarizer, SummaryPipeline};

pub const MISSING_API_KEY: &str = "Error: GEMINI_API_KEY environment variable not set.";
pub const TRANSCRIPT_FETCH_FAILED: &str = "Failed to fetch transcript.";
pub const SUMMARY_FAILED: &str = "Failed to generate summary.";

/// Treats an absent or blank key as missing.
pub fn resolve_api_key(key: Option<String>) -> Option<String> {
    key.filter(|key| !key.trim().is_empty())
}

/// Returns the key, or reports it missing on `err` so the caller can skip all work.
pub fn require_api_key<W: Write>(key: Option<String>, err: &mut W) -> Option<String> {
    let key = resolve_api_key(key);
    if key.is_none() {
        let _ = writeln!(err, "{MISSING_API_KEY}");
    }
    key
}

/// Summarizes `url`, saves the result to `store` and reports the outcome on `out`.
///
/// A missing transcript or a failed summary is reported and recovered: the
/// store is left untouched and `Ok(None)` is returned. Anything else is
/// propagated.
pub async fn run_batch<T, S, D, W>(
    pipeline: &SummaryPipeline<T, S>,
    url: &str,
    store: &D,
    out: &mut W,
) -> anyhow::Result<Option<TopicSummary>>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    D: SummaryStore + Sync,
    W: Write,
{
    match pipeline.run(url, store).await {
        Ok(summary) => {
            writeln!(out, "Generated Summary:")?;
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            Ok(Some(summary))
        }
        Err(e) if e.is_transcript_missing() => {
            writeln!(out, "{TRANSCRIPT_FETCH_FAILED}")?;
            Ok(None)
        }
        Err(e @ PipelineError::Summarization(_)) => {
            tracing::debug!(error = %e, "Summarization failed");
            writeln!(out, "{SUMMARY_FAILED}")?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
