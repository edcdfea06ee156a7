//! Lossless tokenization.
//!
//! Splits an input string into maximal runs of word characters, whitespace,
//! and everything else, such that concatenating the runs in order reproduces
//! the input byte-for-byte.
//!
//! This is an explicit character-classification scan rather than a regex so
//! the round-trip invariant holds for all Unicode input, including characters
//! outside the character classes the rules know about.

use crate::classify::is_word_char;

/// Kind of a token produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  /// Maximal run of letters, digits, apostrophes, hyphens
  Word,
  /// Maximal run of characters that are neither word characters nor
  /// whitespace (punctuation, symbols, control characters, emoji)
  Punctuation,
  /// Maximal run of Unicode whitespace
  Whitespace,
}

/// One maximal same-class run of the input.
///
/// Created per request by the tokenizer and consumed immediately by the
/// orchestrator; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
  /// The run's text, borrowed from the input
  pub text: &'a str,
  /// The run's character class
  pub kind: TokenKind,
}

/// Kind of the run a single character belongs to.
fn kind_of(ch: char) -> TokenKind {
  if is_word_char(ch) {
    TokenKind::Word
  } else if ch.is_whitespace() {
    TokenKind::Whitespace
  } else {
    TokenKind::Punctuation
  }
}

/// Tokenizes `input` into an ordered sequence of maximal same-class runs.
///
/// Total function: every input tokenizes successfully, and an empty input
/// yields an empty sequence.
///
/// # Invariant
/// Concatenating the `text` fields of the result in order equals `input`
/// exactly.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
  let mut tokens = Vec::new();
  let mut run_start = 0;
  let mut run_kind = None;

  for (offset, ch) in input.char_indices() {
    let kind = kind_of(ch);
    match run_kind {
      Some(current) if current == kind => {}
      Some(current) => {
        tokens.push(Token {
          text: &input[run_start..offset],
          kind: current,
        });
        run_start = offset;
        run_kind = Some(kind);
      }
      None => run_kind = Some(kind),
    }
  }

  if let Some(kind) = run_kind {
    tokens.push(Token {
      text: &input[run_start..],
      kind,
    });
  }

  tokens
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
