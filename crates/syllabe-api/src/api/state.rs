//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::SegmentApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Segmentation Service
  ///
  /// - Production: `Arc::new(SegmentApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubSegmentApiService)`
  pub service: Arc<dyn SegmentApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn SegmentApiService>) -> Self {
    Self { config, service }
  }
}
