//! Character classification.
//!
//! Maps a Unicode scalar value to one of the three classes the pipeline
//! distinguishes, given the configured vowel alphabet.

use crate::config::SegmentRules;

/// Character class as seen by the tokenizer and the syllabifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
  /// Case-insensitive member of the configured vowel alphabet
  Vowel,
  /// Alphabetic letter that is not a vowel, or apostrophe/hyphen
  Consonant,
  /// Everything else: digits, punctuation, symbols, whitespace, combining
  /// marks not covered above
  Other,
}

/// Characters that join word tokens without being letters or digits.
///
/// Apostrophe and hyphen occur word-internally in French (`l'école`,
/// `grand-mère`) and are treated as consonant-class for clustering.
pub(crate) fn is_word_joiner(ch: char) -> bool {
  ch == '\'' || ch == '-'
}

/// Returns whether `ch` belongs inside a `Word` token.
pub(crate) fn is_word_char(ch: char) -> bool {
  ch.is_alphabetic() || ch.is_numeric() || is_word_joiner(ch)
}

/// Classifies a single character against the configured rules.
///
/// Pure function of `(rules, ch)`; no side effects. Characters from scripts
/// outside the configured alphabet classify as `Consonant` when alphabetic
/// and `Other` otherwise, which is what the fallback rules of the
/// syllabifier expect.
#[must_use]
pub fn classify(rules: &SegmentRules, ch: char) -> CharClass {
  if rules.is_vowel(ch) {
    CharClass::Vowel
  } else if ch.is_alphabetic() || is_word_joiner(ch) {
    CharClass::Consonant
  } else {
    CharClass::Other
  }
}
