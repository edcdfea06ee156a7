// crates/syllabe/src/config.rs

use std::collections::HashSet;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Policy for `Word` tokens consisting entirely of digits.
///
/// The observed deployments disagreed on whether `"2024"` should be run
/// through the syllabifier, so the behavior is an explicit switch rather than
/// a fixed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitPolicy {
  /// Digit-only tokens bypass syllabification and are copied verbatim.
  ///
  /// This is the default: syllabifying a number is semantically meaningless.
  #[default]
  Passthrough,
  /// Digit-only tokens are lowercased and syllabified like any other word
  Syllabify,
}

impl DigitPolicy {
  /// Returns the policy name as used in configuration.
  ///
  /// # Examples
  /// - `DigitPolicy::Passthrough` → `"passthrough"`
  /// - `DigitPolicy::Syllabify` → `"syllabify"`
  pub fn name(&self) -> &'static str {
    match self {
      DigitPolicy::Passthrough => "passthrough",
      DigitPolicy::Syllabify => "syllabify",
    }
  }
}

impl FromStr for DigitPolicy {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "passthrough" => Ok(Self::Passthrough),
      "syllabify" => Ok(Self::Syllabify),
      _ => Err(ConfigError::UnknownDigitPolicy {
        name: s.to_string(),
      }),
    }
  }
}

impl std::fmt::Display for DigitPolicy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Raw, serializable form of the segmentation rules.
///
/// ## Design Background
///
/// `SegmentRules` holds `HashSet`s and a precomputed maximum onset length,
/// which makes it awkward to deserialize directly from a configuration
/// document. `RawRules` is the flat form that appears in config files
/// (a string of vowels plus a list of onset clusters) and is converted into
/// validated `SegmentRules` via [`SegmentRules::from_raw`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawRules {
  /// Vowel alphabet as a single string, e.g. `"aeiouyàâä..."`
  pub vowels: String,
  /// Permitted onset clusters, e.g. `["pr", "ch", "b", ...]`
  pub onsets: Vec<String>,
}

/// Immutable segmentation rules: the vowel alphabet and the permitted onset
/// cluster set.
///
/// Constructed once at process start and shared read-only across all
/// requests; nothing here is mutated after initialization.
#[derive(Debug, Clone)]
pub struct SegmentRules {
  /// Lowercase vowel characters (including accented forms)
  vowels: HashSet<char>,
  /// Lowercase onset clusters permitted at the start of a syllable
  onsets: HashSet<String>,
  /// Length in chars of the longest onset cluster (bounds the suffix scan)
  max_onset_chars: usize,
}

impl SegmentRules {
  /// Builds rules from a vowel string and an onset cluster list.
  ///
  /// # Errors
  /// Returns a [`ConfigError`] if the vowel alphabet or the onset set is
  /// empty, or if an onset entry is empty, not lowercase, or contains a
  /// configured vowel.
  pub fn new<I, S>(vowels: &str, onsets: I) -> Result<Self, ConfigError>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let vowel_set: HashSet<char> = vowels.chars().flat_map(|c| c.to_lowercase()).collect();
    if vowel_set.is_empty() {
      return Err(ConfigError::EmptyVowels);
    }

    let mut onset_set = HashSet::new();
    let mut max_onset_chars = 0;
    for onset in onsets {
      let onset: String = onset.into();
      if onset.is_empty() {
        return Err(ConfigError::EmptyOnsetEntry);
      }
      if onset.chars().any(|c| c.is_uppercase()) {
        return Err(ConfigError::OnsetNotLowercase { entry: onset });
      }
      if let Some(vowel) = onset.chars().find(|c| vowel_set.contains(c)) {
        return Err(ConfigError::OnsetContainsVowel {
          entry: onset,
          vowel,
        });
      }
      max_onset_chars = max_onset_chars.max(onset.chars().count());
      onset_set.insert(onset);
    }

    if onset_set.is_empty() {
      return Err(ConfigError::EmptyOnsets);
    }

    Ok(Self {
      vowels: vowel_set,
      onsets: onset_set,
      max_onset_chars,
    })
  }

  /// Builds rules from the raw (deserialized) form.
  ///
  /// # Errors
  /// Same validation as [`SegmentRules::new`].
  pub fn from_raw(raw: RawRules) -> Result<Self, ConfigError> {
    Self::new(&raw.vowels, raw.onsets)
  }

  /// French preset matching the original deployment.
  ///
  /// Vowels cover the plain and accented forms used in French text plus the
  /// ligatures `œ`/`æ`. Onsets are the common two- and three-consonant
  /// clusters that may start a French syllable, plus every single consonant
  /// letter (so a lone intervocalic consonant always attaches to the
  /// following syllable).
  pub fn french() -> Self {
    const VOWELS: &str = "aeiouyàâäéèêëîïôöùûüÿœæ";
    const ONSETS: &[&str] = &[
      "pr", "pl", "br", "bl", "tr", "dr", "cr", "cl", "gr", "gl", "fr", "fl", "vr", "qu", "gu",
      "gn", "ch", "ph", "th", "sch", "sk", "sp", "st", "b", "c", "d", "f", "g", "h", "j", "k",
      "l", "m", "n", "p", "q", "r", "s", "t", "v", "w", "x", "z", "ç",
    ];

    // The preset is statically valid; new() cannot fail on it.
    Self::new(VOWELS, ONSETS.iter().copied()).unwrap_or_else(|e| {
      unreachable!("built-in French preset failed validation: {e}");
    })
  }

  /// Returns whether `ch` belongs to the configured vowel alphabet
  /// (case-insensitive).
  #[must_use]
  pub fn is_vowel(&self, ch: char) -> bool {
    ch.to_lowercase().all(|c| self.vowels.contains(&c))
  }

  /// Returns whether `cluster` is a permitted syllable onset.
  #[must_use]
  pub fn is_onset(&self, cluster: &str) -> bool {
    self.onsets.contains(cluster)
  }

  /// Length in chars of the longest configured onset cluster.
  #[must_use]
  pub fn max_onset_chars(&self) -> usize {
    self.max_onset_chars
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ─── DigitPolicy Tests ─────────────────────────────────────────────────

  #[test]
  fn digit_policy_from_str() {
    assert_eq!(
      DigitPolicy::from_str("passthrough").unwrap(),
      DigitPolicy::Passthrough
    );
    assert_eq!(
      DigitPolicy::from_str("SYLLABIFY").unwrap(),
      DigitPolicy::Syllabify
    );
  }

  #[test]
  fn digit_policy_from_str_invalid() {
    let err = DigitPolicy::from_str("yes").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownDigitPolicy { .. }));
  }

  #[test]
  fn digit_policy_default_is_passthrough() {
    assert_eq!(DigitPolicy::default(), DigitPolicy::Passthrough);
  }

  #[test]
  fn digit_policy_display() {
    assert_eq!(format!("{}", DigitPolicy::Passthrough), "passthrough");
    assert_eq!(format!("{}", DigitPolicy::Syllabify), "syllabify");
  }

  // ─── SegmentRules Construction Tests ───────────────────────────────────

  #[test]
  fn new_accepts_minimal_rules() {
    let rules = SegmentRules::new("ae", ["b", "br"]).unwrap();
    assert!(rules.is_vowel('a'));
    assert!(rules.is_vowel('A'));
    assert!(!rules.is_vowel('b'));
    assert!(rules.is_onset("br"));
    assert!(!rules.is_onset("rb"));
    assert_eq!(rules.max_onset_chars(), 2);
  }

  #[test]
  fn new_rejects_empty_vowels() {
    let err = SegmentRules::new("", ["b"]).unwrap_err();
    assert_eq!(err, ConfigError::EmptyVowels);
  }

  #[test]
  fn new_rejects_empty_onsets() {
    let err = SegmentRules::new("a", Vec::<String>::new()).unwrap_err();
    assert_eq!(err, ConfigError::EmptyOnsets);
  }

  #[test]
  fn new_rejects_empty_onset_entry() {
    let err = SegmentRules::new("a", [""]).unwrap_err();
    assert_eq!(err, ConfigError::EmptyOnsetEntry);
  }

  #[test]
  fn new_rejects_uppercase_onset() {
    let err = SegmentRules::new("a", ["Br"]).unwrap_err();
    match err {
      ConfigError::OnsetNotLowercase { entry } => assert_eq!(entry, "Br"),
      other => panic!("expected OnsetNotLowercase, got: {other:?}"),
    }
  }

  #[test]
  fn new_rejects_onset_containing_vowel() {
    let err = SegmentRules::new("ae", ["ba"]).unwrap_err();
    match err {
      ConfigError::OnsetContainsVowel { entry, vowel } => {
        assert_eq!(entry, "ba");
        assert_eq!(vowel, 'a');
      }
      other => panic!("expected OnsetContainsVowel, got: {other:?}"),
    }
  }

  #[test]
  fn from_raw_roundtrip() {
    let raw: RawRules =
      serde_json::from_str(r#"{"vowels": "aeiou", "onsets": ["b", "ch", "tr"]}"#).unwrap();
    let rules = SegmentRules::from_raw(raw).unwrap();
    assert!(rules.is_vowel('e'));
    assert!(rules.is_onset("tr"));
  }

  // ─── French Preset Tests ───────────────────────────────────────────────

  #[test]
  fn french_preset_is_valid() {
    let rules = SegmentRules::french();
    assert!(rules.is_vowel('é'));
    assert!(rules.is_vowel('Ô'));
    assert!(rules.is_onset("ch"));
    assert!(rules.is_onset("sch"));
    assert!(rules.is_onset("b"));
    assert_eq!(rules.max_onset_chars(), 3);
  }

  #[test]
  fn french_preset_vowels_are_case_insensitive() {
    let rules = SegmentRules::french();
    assert!(rules.is_vowel('A'));
    assert!(rules.is_vowel('É'));
    assert!(!rules.is_vowel('ç'));
  }
}
