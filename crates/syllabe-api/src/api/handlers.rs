//! HTTP handler definitions

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{SegmentRequest, SegmentResponse};

use super::state::AppState;

/// POST /segment endpoint
///
/// Runs the syllable segmentation pipeline over the request text.
///
/// # Request Body
/// ```json
/// { "text": "Bonjour, le monde!", "sep": "." }
/// ```
///
/// # Response
/// - 200 OK: segmentation succeeded
/// - 400 Bad Request: empty text
/// - 413 Payload Too Large: text over the configured limit
/// - 401 Unauthorized: rejected by the auth middleware (never reaches here)
pub async fn post_segment(
  State(state): State<AppState>,
  Json(request): Json<SegmentRequest>,
) -> Result<Json<SegmentResponse>, ApiError> {
  debug!(text_len = request.text.len(), sep = %request.sep, "received segmentation request");

  // The pipeline is bounded CPU work; run it on the blocking pool so the
  // async runtime stays responsive under large inputs.
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.segment(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking failure");
      ApiError::internal("failed to execute segmentation")
    })??;

  info!(word_count = response.words.len(), "segmentation request served");

  Ok(Json(response))
}

/// Health check endpoint
///
/// Reports that the server is up. Does not invoke the pipeline.
pub async fn health_check() -> &'static str {
  "OK"
}
