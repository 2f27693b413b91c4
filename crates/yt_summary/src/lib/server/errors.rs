use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{PipelineError, PipelineStage};

pub const TRANSCRIPT_NOT_FOUND: &str = "Transcript not found.";
pub const SUMMARY_FAILED: &str = "Failed to generate summary.";

/// Maps pipeline failures onto the HTTP contract.
///
/// A missing transcript is reported in the body of a normal `200` response.
/// An unparseable URL is not recovered from and surfaces as a bare `500`.
#[derive(Debug)]
pub struct AppError(pub PipelineError);

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError(err) = self;
        tracing::error!(error = %err, stage = %err.stage(), "Failed to summarize video");

        match err.stage() {
            // `Storing` only comes from batch runs; handlers never store.
            PipelineStage::Parsing | PipelineStage::Storing => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            PipelineStage::Fetching => {
                (StatusCode::OK, Json(json!({ "error": TRANSCRIPT_NOT_FOUND }))).into_response()
            }
            PipelineStage::Summarizing => {
                (StatusCode::BAD_GATEWAY, Json(json!({ "error": SUMMARY_FAILED }))).into_response()
            }
        }
    }
}
