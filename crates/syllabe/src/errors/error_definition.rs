//! Error definitions for the segmentation pipeline.

use thiserror::Error;

/// Rule configuration (SegmentRules) errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  /// The vowel alphabet is empty
  #[error("the vowel alphabet must contain at least one character")]
  EmptyVowels,

  /// The onset cluster set is empty
  #[error("the onset set must contain at least one cluster")]
  EmptyOnsets,

  /// An onset entry is the empty string
  #[error("onset entries must be non-empty")]
  EmptyOnsetEntry,

  /// An onset entry is not fully lowercase
  #[error("onset entry is not lowercase: {entry:?}")]
  OnsetNotLowercase {
    /// The offending entry
    entry: String,
  },

  /// An onset entry contains a character from the configured vowel alphabet
  #[error("onset entry {entry:?} contains the vowel {vowel:?}")]
  OnsetContainsVowel {
    /// The offending entry
    entry: String,
    /// The vowel found inside it
    vowel: char,
  },

  /// The maximum input length is zero
  #[error("max_chars must be at least 1")]
  ZeroMaxChars,

  /// An unknown digit policy name was supplied (e.g. from an env var)
  #[error("unknown digit policy: {name:?} (valid values: passthrough, syllabify)")]
  UnknownDigitPolicy {
    /// The unrecognized name
    name: String,
  },
}

/// Per-request segmentation errors.
///
/// Both variants are client errors: the pipeline itself is total and never
/// fails once an input has been admitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SegmentError {
  /// The input is empty after trimming surrounding whitespace
  #[error("input text is empty")]
  EmptyInput,

  /// The trimmed input exceeds the configured maximum length
  #[error("input text is too long: {chars} characters (maximum: {max_chars})")]
  InputTooLong {
    /// Length of the trimmed input in Unicode scalar values
    chars: usize,
    /// Configured maximum length
    max_chars: usize,
  },
}

/// Unified error type.
/// Public APIs of this crate that can fail return this error,
/// used as `SyllabeResult<T>` = `Result<T, SyllabeError>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyllabeError {
  /// Rule configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Per-request segmentation error
  #[error(transparent)]
  Segment(#[from] SegmentError),
}

/// Standard Result alias for the syllabe crate
pub type SyllabeResult<T> = Result<T, SyllabeError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn segment_error_messages_carry_limits() {
    let err = SegmentError::InputTooLong {
      chars: 12_000,
      max_chars: 10_000,
    };
    let msg = err.to_string();
    assert!(msg.contains("12000"));
    assert!(msg.contains("10000"));
  }

  #[test]
  fn config_error_converts_into_unified_error() {
    let err: SyllabeError = ConfigError::EmptyVowels.into();
    assert!(matches!(err, SyllabeError::Config(ConfigError::EmptyVowels)));
  }

  #[test]
  fn segment_error_converts_into_unified_error() {
    let err: SyllabeError = SegmentError::EmptyInput.into();
    assert!(matches!(err, SyllabeError::Segment(SegmentError::EmptyInput)));
  }
}
