//! syllabe-api server entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use syllabe_api::ApiError;
use syllabe_api::api::AppState;
use syllabe_api::api::run_server;
use syllabe_api::config::Config;
use syllabe_api::service::SegmentApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Logging initialization
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // Configuration
  let config = Config::from_env()?;
  tracing::info!(
    max_text_chars = config.max_text_chars,
    digit_policy = %config.digit_policy,
    auth = config.auth.name(),
    "configuration loaded"
  );
  if config.auth.is_disabled() {
    tracing::warn!("authentication is DISABLED: requests pass unauthenticated (development mode)");
  }

  // Service initialization
  let service = Arc::new(SegmentApiServiceFull::new(&config)?);
  tracing::info!("segmentation service initialized");

  // Application state
  let state = AppState::new(config, service);

  // Start the server
  run_server(state).await
}
