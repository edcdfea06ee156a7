//! Response model definition

use serde::Serialize;
use syllabe::segment::Segmentation;

/// Segmentation response
///
/// The field names (`original`, `segmented_text`, `words`) are the wire
/// contract consumed by the reading-exercise frontend; do not rename.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentResponse {
  /// The trimmed input as received
  pub original: String,
  /// Full reconstruction with syllable separators inserted into word tokens
  pub segmented_text: String,
  /// Syllable-joined word strings, one per word token, in encountered order
  pub words: Vec<String>,
}

impl From<Segmentation> for SegmentResponse {
  fn from(seg: Segmentation) -> Self {
    Self {
      original: seg.original,
      segmented_text: seg.segmented_text,
      words: seg.words,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_all_fields() {
    let response = SegmentResponse {
      original: "Bonjour!".to_string(),
      segmented_text: "bon.jour!".to_string(),
      words: vec!["bon.jour".to_string()],
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"original\":\"Bonjour!\""));
    assert!(json.contains("\"segmented_text\":\"bon.jour!\""));
    assert!(json.contains("\"words\":[\"bon.jour\"]"));
  }

  #[test]
  fn converts_from_core_segmentation() {
    let seg = Segmentation {
      original: "le chat".to_string(),
      segmented_text: "le chat".to_string(),
      words: vec!["le".to_string(), "chat".to_string()],
    };
    let response: SegmentResponse = seg.into();
    assert_eq!(response.words.len(), 2);
    assert_eq!(response.original, "le chat");
  }
}
