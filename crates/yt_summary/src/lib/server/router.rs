use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::{yt::TranscriptFetcher, Summarizer, SummaryPipeline};

/// Creates the Axum router with the summary route.
pub fn create_router<T, S>(pipeline: Arc<SummaryPipeline<T, S>>) -> Router
where
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    Router::new()
        .route("/summarize", get(handlers::summarize_handler::<T, S>))
        .with_state(pipeline)
        .layer(TraceLayer::new_for_http())
}
