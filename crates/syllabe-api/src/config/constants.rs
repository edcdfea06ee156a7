//! API configuration constants.

/// Maximum input text length in Unicode scalar values.
///
/// The limit bounds worst-case per-request latency; it is a deployment
/// policy, tunable via `SYLLABE_MAX_TEXT_CHARS`.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 10_000;

/// Default bind address.
///
/// Localhost port intended for development use.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5860";

/// Default syllable separator when a request omits `sep`.
pub const DEFAULT_SEPARATOR: &str = ".";
