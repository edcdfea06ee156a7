//! Segmentation service.

use std::time::Instant;

use syllabe::config::SegmentRules;
use syllabe::errors::SyllabeError;
use syllabe::segment::Segmenter;

use crate::config::Config;
use crate::errors::{ApiError, Result};
use crate::models::{SegmentRequest, SegmentResponse};

/// Common interface for the segmentation service.
///
/// This trait allows swapping the production implementation
/// (`SegmentApiServiceFull`) with test stubs/mocks.
pub trait SegmentApiService: Send + Sync {
  /// Executes text segmentation
  ///
  /// # Errors
  /// - Input error (empty text, length exceeded)
  /// - Internal error
  fn segment(&self, request: SegmentRequest) -> Result<SegmentResponse>;
}

/// Production segmentation service.
///
/// Owns the pipeline; the rules inside are immutable, so one instance serves
/// all requests concurrently without locking.
#[derive(Debug, Clone)]
pub struct SegmentApiServiceFull {
  segmenter: Segmenter,
}

impl SegmentApiServiceFull {
  /// Initializes the service with the French rule preset.
  ///
  /// # Arguments
  /// * `config` - Server configuration (length limit, digit policy)
  ///
  /// # Errors
  /// Returns a config error when the limits are invalid.
  pub fn new(config: &Config) -> Result<Self> {
    let segmenter = Segmenter::new(
      SegmentRules::french(),
      config.digit_policy,
      config.max_text_chars,
    )
    .map_err(|e| ApiError::config(format!("failed to build segmenter: {e}")))?;

    Ok(Self { segmenter })
  }

  /// Executes text segmentation.
  ///
  /// # Errors
  /// - If the trimmed text is empty
  /// - If the trimmed text exceeds the maximum length
  pub fn segment(&self, request: SegmentRequest) -> Result<SegmentResponse> {
    let start = Instant::now();

    let segmentation = self
      .segmenter
      .segment(&request.text, &request.sep)
      .map_err(|e| ApiError::from(SyllabeError::from(e)))?;

    tracing::info!(
      word_count = segmentation.words.len(),
      elapsed_ms = start.elapsed().as_millis() as u64,
      "segmentation complete"
    );

    Ok(segmentation.into())
  }
}

/// Production implementation of trait `SegmentApiService`
impl SegmentApiService for SegmentApiServiceFull {
  fn segment(&self, request: SegmentRequest) -> Result<SegmentResponse> {
    // Note: writing `self.segment(...)` would recursively call the trait
    // method, so explicitly call the inherent method.
    SegmentApiServiceFull::segment(self, request)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::auth::AuthStrategy;
  use syllabe::config::DigitPolicy;

  fn create_test_config() -> Config {
    Config {
      bind_addr: "127.0.0.1:5861".to_string(),
      max_text_chars: 100,
      digit_policy: DigitPolicy::Passthrough,
      auth: AuthStrategy::Disabled,
    }
  }

  fn request(text: &str, sep: &str) -> SegmentRequest {
    SegmentRequest {
      text: text.to_string(),
      sep: sep.to_string(),
    }
  }

  #[test]
  fn service_segments_french_text() {
    let service = SegmentApiServiceFull::new(&create_test_config()).unwrap();
    let response = service.segment(request("Bonjour, le monde!", ".")).unwrap();

    assert_eq!(response.original, "Bonjour, le monde!");
    assert_eq!(response.segmented_text, "bon.jour, le mon.de!");
    assert_eq!(response.words, vec!["bon.jour", "le", "mon.de"]);
  }

  #[test]
  fn empty_text_is_rejected() {
    let service = SegmentApiServiceFull::new(&create_test_config()).unwrap();
    let err = service.segment(request("   ", ".")).unwrap_err();
    assert_eq!(err.code(), "empty_text");
  }

  #[test]
  fn over_limit_text_is_rejected() {
    let service = SegmentApiServiceFull::new(&create_test_config()).unwrap();
    let err = service.segment(request(&"a".repeat(101), ".")).unwrap_err();
    assert_eq!(err.code(), "text_too_long");
  }

  #[test]
  fn zero_limit_config_is_a_config_error() {
    let mut config = create_test_config();
    config.max_text_chars = 0;
    let err = SegmentApiServiceFull::new(&config).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn digit_policy_reaches_the_pipeline() {
    let mut config = create_test_config();
    config.digit_policy = DigitPolicy::Syllabify;
    let service = SegmentApiServiceFull::new(&config).unwrap();
    let response = service.segment(request("page 42", ".")).unwrap();
    assert_eq!(response.words, vec!["pa.ge", "42"]);
  }
}
