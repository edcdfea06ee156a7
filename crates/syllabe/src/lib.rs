//! syllabe — lossless text-to-syllable segmentation
//!
//! Splits arbitrary Unicode text into word / punctuation / whitespace runs,
//! applies deterministic Maximal-Onset-Principle syllabification to each word
//! run, and reassembles a byte-for-byte-equivalent output with syllable
//! boundaries inserted.

/// Character classification - CharClass and the classify function
pub mod classify;

/// Rules module - SegmentRules, DigitPolicy and the French preset
pub mod config;

/// Error module - ConfigError, SegmentError, SyllabeError, SyllabeResult
pub mod errors;

/// Orchestrator module - Segmenter drives the full pipeline
pub mod segment;

/// Syllabifier module - Maximal-Onset-Principle word splitting
pub mod syllabify;

/// Tokenizer module - lossless maximal-run tokenization
pub mod tokenize;

/// Re-exports
pub use config::{DigitPolicy, RawRules, SegmentRules};
pub use errors::{ConfigError, SegmentError, SyllabeError, SyllabeResult};
pub use segment::{Segmentation, Segmenter};
pub use syllabify::syllabify;
pub use tokenize::{Token, TokenKind, tokenize};
