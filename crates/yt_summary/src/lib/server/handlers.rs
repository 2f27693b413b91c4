use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use summary_store::TopicSummary;

use super::errors::AppError;
use crate::{yt::TranscriptFetcher, Summarizer, SummaryPipeline};

#[derive(Debug, Deserialize)]
pub struct SummarizeParams {
    pub url: String,
}

/// `GET /summarize?url=...`
pub async fn summarize_handler<T, S>(
    State(pipeline): State<Arc<SummaryPipeline<T, S>>>,
    Query(SummarizeParams { url }): Query<SummarizeParams>,
) -> Result<Json<TopicSummary>, AppError>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let summary = pipeline.summarize(&url).await?;
    Ok(Json(summary))
}
