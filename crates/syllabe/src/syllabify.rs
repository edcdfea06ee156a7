//! Maximal-Onset-Principle syllabification.
//!
//! Given a lowercase word and the configured rules, produces the ordered
//! sequence of syllable substrings whose concatenation reconstructs the word
//! exactly.
//!
//! # Algorithm
//! 1. Classify each character as vowel or consonant (apostrophe/hyphen count
//!    as consonant-class for clustering).
//! 2. Find the nucleus runs: maximal contiguous vowel runs. No nucleus means
//!    no boundary to place, so the whole word is one syllable.
//! 3. For each intervocalic consonant cluster, cut at the longest cluster
//!    suffix that is a permitted onset; that suffix opens the next syllable
//!    and the remaining prefix stays as coda of the previous one. If no
//!    suffix matches, exactly one consonant (the last) becomes the onset.
//! 4. Consonants before the first nucleus belong to the first syllable in
//!    full; consonants after the last nucleus to the last syllable in full.
//!
//! The result is a pure function of `(word, rules)`: suffix lengths within a
//! cluster are unique, so longest-match leaves no ambiguity.

use crate::classify::{CharClass, classify};
use crate::config::SegmentRules;

/// Splits a lowercase word into syllables.
///
/// The caller is expected to pass a non-empty, already case-folded word (the
/// orchestrator lowercases `Word` tokens before calling in here). The
/// function itself never fails: a word without any configured vowel comes
/// back as a single syllable.
///
/// # Arguments
/// * `word` - Lowercase word to split
/// * `rules` - Vowel alphabet and onset cluster set
///
/// # Returns
/// Ordered syllables; their concatenation equals `word` exactly.
#[must_use]
pub fn syllabify(word: &str, rules: &SegmentRules) -> Vec<String> {
  // Byte offset of every char, so syllables can be sliced on char boundaries.
  let chars: Vec<(usize, char)> = word.char_indices().collect();

  let nuclei = nucleus_runs(&chars, rules);
  if nuclei.is_empty() {
    return vec![word.to_string()];
  }

  // Syllable start positions as char indices. The first syllable always
  // starts at 0, absorbing any leading consonant run.
  let mut starts = vec![0usize];
  for pair in nuclei.windows(2) {
    let cluster_start = pair[0].1;
    let next_nucleus = pair[1].0;
    starts.push(split_cluster(word, &chars, cluster_start, next_nucleus, rules));
  }

  let mut syllables = Vec::with_capacity(starts.len());
  for pair in starts.windows(2) {
    syllables.push(word[chars[pair[0]].0..chars[pair[1]].0].to_string());
  }
  let last = starts[starts.len() - 1];
  syllables.push(word[chars[last].0..].to_string());

  syllables
}

/// Maximal vowel runs as `(start, end)` char-index ranges (end exclusive).
fn nucleus_runs(chars: &[(usize, char)], rules: &SegmentRules) -> Vec<(usize, usize)> {
  let mut runs = Vec::new();
  let mut run_start = None;

  for (idx, &(_, ch)) in chars.iter().enumerate() {
    let is_vowel = classify(rules, ch) == CharClass::Vowel;
    match (run_start, is_vowel) {
      (None, true) => run_start = Some(idx),
      (Some(start), false) => {
        runs.push((start, idx));
        run_start = None;
      }
      _ => {}
    }
  }
  if let Some(start) = run_start {
    runs.push((start, chars.len()));
  }

  runs
}

/// Determines where the syllable boundary falls inside one intervocalic
/// cluster.
///
/// The cluster occupies char indices `cluster_start..next_nucleus`
/// (non-empty, since adjacent nucleus runs are maximal). Returns the char
/// index at which the next syllable starts.
fn split_cluster(
  word: &str,
  chars: &[(usize, char)],
  cluster_start: usize,
  next_nucleus: usize,
  rules: &SegmentRules,
) -> usize {
  let cluster_len = next_nucleus - cluster_start;
  let nucleus_byte = chars[next_nucleus].0;

  // Longest suffix of the cluster that is a permitted onset wins. The scan
  // is bounded by the longest configured onset, not the cluster length.
  let longest = cluster_len.min(rules.max_onset_chars());
  for len in (1..=longest).rev() {
    let suffix = &word[chars[next_nucleus - len].0..nucleus_byte];
    if rules.is_onset(suffix) {
      return next_nucleus - len;
    }
  }

  // Minimal fallback: the last consonant alone becomes the onset.
  next_nucleus - 1
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
