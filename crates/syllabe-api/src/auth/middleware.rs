//! Axum middleware enforcing the configured authentication strategy.

use axum::{
  extract::{Request, State},
  middleware::Next,
  response::Response,
};
use tracing::warn;

use crate::api::AppState;
use crate::errors::ApiError;

/// Rejects unauthenticated requests before any handler runs.
///
/// The health endpoint stays reachable without a credential so external
/// probes keep working regardless of the deployed strategy.
pub async fn require_auth(
  State(state): State<AppState>,
  request: Request,
  next: Next,
) -> Result<Response, ApiError> {
  if request.uri().path().starts_with("/health") {
    return Ok(next.run(request).await);
  }

  if let Err(reason) = state.config.auth.authenticate(request.headers()) {
    warn!(reason, path = %request.uri().path(), "rejected request");
    return Err(ApiError::unauthorized(reason));
  }

  Ok(next.run(request).await)
}
