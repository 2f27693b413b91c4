//! # HTTP Server
//!
//! Exposes the summary pipeline as `GET /summarize?url=...`.

mod errors;
mod handlers;
mod router;

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;

pub use errors::AppError;
pub use handlers::SummarizeParams;
pub use router::create_router;

use crate::{yt::TranscriptFetcher, Summarizer, SummaryPipeline};

/// Serves the router on `listener` until the process is stopped.
pub async fn serve<T, S>(
    listener: TcpListener,
    pipeline: SummaryPipeline<T, S>,
) -> anyhow::Result<()>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, create_router(Arc::new(pipeline))).await?;

    Ok(())
}
