//! Pipeline orchestrator.
//!
//! Drives tokenization, routes `Word` tokens through the syllabifier, and
//! reassembles the segmented output together with the ordered per-word list.

use serde::{Deserialize, Serialize};

use crate::config::{DigitPolicy, SegmentRules};
use crate::errors::{ConfigError, SegmentError};
use crate::syllabify::syllabify;
use crate::tokenize::{TokenKind, tokenize};

/// Result of one segmentation request.
///
/// This is also the wire shape of the HTTP response, so the field names are
/// part of the external contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
  /// The trimmed input as received
  pub original: String,
  /// Full reconstruction of the input with syllable separators inserted
  /// into word tokens
  pub segmented_text: String,
  /// Syllable-joined word strings, one per `Word` token, in encountered
  /// order; never contains punctuation or whitespace entries
  pub words: Vec<String>,
}

/// The segmentation pipeline.
///
/// Holds the immutable rules plus the per-deployment policy knobs. Stateless
/// per request: one `Segmenter` behind an `Arc` serves any number of
/// concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct Segmenter {
  rules: SegmentRules,
  digit_policy: DigitPolicy,
  max_chars: usize,
}

impl Segmenter {
  /// Creates a segmenter.
  ///
  /// # Arguments
  /// * `rules` - Validated vowel/onset rules
  /// * `digit_policy` - Handling of digit-only word tokens
  /// * `max_chars` - Maximum accepted input length in Unicode scalar values,
  ///   measured after trimming
  ///
  /// # Errors
  /// Returns [`ConfigError::ZeroMaxChars`] when `max_chars` is zero.
  pub fn new(
    rules: SegmentRules,
    digit_policy: DigitPolicy,
    max_chars: usize,
  ) -> Result<Self, ConfigError> {
    if max_chars == 0 {
      return Err(ConfigError::ZeroMaxChars);
    }
    Ok(Self {
      rules,
      digit_policy,
      max_chars,
    })
  }

  /// Returns the configured digit policy.
  #[must_use]
  pub fn digit_policy(&self) -> DigitPolicy {
    self.digit_policy
  }

  /// Returns the configured maximum input length.
  #[must_use]
  pub fn max_chars(&self) -> usize {
    self.max_chars
  }

  /// Splits a single lowercase word into syllables using this segmenter's
  /// rules.
  #[must_use]
  pub fn syllabify_word(&self, word: &str) -> Vec<String> {
    syllabify(word, &self.rules)
  }

  /// Segments `text`, inserting `separator` between syllables of each word
  /// token.
  ///
  /// The input is trimmed first; word tokens are lowercased before
  /// syllabification and the lowercased form is what appears in the output
  /// (original casing is deliberately not restored — downstream consumers
  /// rely on this normalization). Punctuation and whitespace pass through
  /// verbatim at their original positions.
  ///
  /// # Errors
  /// - [`SegmentError::EmptyInput`] when the trimmed input is empty
  /// - [`SegmentError::InputTooLong`] when it exceeds the configured maximum
  pub fn segment(&self, text: &str, separator: &str) -> Result<Segmentation, SegmentError> {
    let text = text.trim();
    if text.is_empty() {
      return Err(SegmentError::EmptyInput);
    }

    let chars = text.chars().count();
    if chars > self.max_chars {
      return Err(SegmentError::InputTooLong {
        chars,
        max_chars: self.max_chars,
      });
    }

    let tokens = tokenize(text);
    let mut segmented_text = String::with_capacity(text.len());
    let mut words = Vec::new();

    for token in &tokens {
      if token.kind == TokenKind::Word && self.should_syllabify(token.text) {
        let lowered = token.text.to_lowercase();
        let joined = self.syllabify_word(&lowered).join(separator);
        segmented_text.push_str(&joined);
        words.push(joined);
      } else {
        segmented_text.push_str(token.text);
      }
    }

    tracing::debug!(
      chars,
      token_count = tokens.len(),
      word_count = words.len(),
      "segmented text"
    );

    Ok(Segmentation {
      original: text.to_string(),
      segmented_text,
      words,
    })
  }

  /// Whether a `Word` token should be routed through the syllabifier.
  fn should_syllabify(&self, text: &str) -> bool {
    match self.digit_policy {
      DigitPolicy::Syllabify => true,
      DigitPolicy::Passthrough => !text.chars().all(|c| c.is_numeric()),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
