//! Request model definition

use serde::Deserialize;

use crate::config::DEFAULT_SEPARATOR;

/// Default syllable separator when the request omits `sep`.
fn default_separator() -> String {
  DEFAULT_SEPARATOR.to_string()
}

/// Segmentation request
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentRequest {
  /// Text to segment
  pub text: String,
  /// Separator inserted between syllables of each word
  #[serde(default = "default_separator")]
  pub sep: String,
}
