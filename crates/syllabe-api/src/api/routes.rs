//! Router definition

use axum::{
  Router, middleware,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, post_segment};
use super::state::AppState;
use crate::auth::require_auth;
use crate::errors::ApiError;

/// Creates the API router
///
/// The auth layer wraps every route; the middleware itself exempts
/// `/health` so liveness probes need no credential.
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// The configured Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/segment", post(post_segment))
    .route("/health", get(health_check))
    .layer(middleware::from_fn_with_state(state.clone(), require_auth))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if the server fails to start
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("server listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}
