//! Config loading from environment variables

use std::str::FromStr;

use syllabe::config::DigitPolicy;

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_MAX_TEXT_CHARS};
use crate::auth::AuthStrategy;
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5860")
  pub bind_addr: String,
  /// Maximum input length in Unicode scalar values
  pub max_text_chars: usize,
  /// Handling of digit-only word tokens
  pub digit_policy: DigitPolicy,
  /// Request authentication strategy
  pub auth: AuthStrategy,
}

impl Config {
  /// Loads configuration from environment variables.
  ///
  /// | Variable | Meaning | Default |
  /// |---|---|---|
  /// | `SYLLABE_BIND_ADDR` | listen address | `127.0.0.1:5860` |
  /// | `SYLLABE_MAX_TEXT_CHARS` | input length limit | `10000` |
  /// | `SYLLABE_DIGIT_POLICY` | `passthrough` \| `syllabify` | `passthrough` |
  /// | `SYLLABE_API_KEY` | static key for `x-api-key` | unset |
  /// | `SYLLABE_BEARER_TOKEN` | static bearer token | unset |
  ///
  /// If both credentials are set the API key wins; if neither is set,
  /// authentication is disabled (development bypass — flagged at startup).
  ///
  /// # Errors
  /// Returns an error if a variable holds an unparseable value.
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var("SYLLABE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let max_text_chars = match std::env::var("SYLLABE_MAX_TEXT_CHARS") {
      Ok(raw) => raw.parse::<usize>().map_err(|e| {
        ApiError::config(format!("invalid SYLLABE_MAX_TEXT_CHARS {raw:?}: {e}"))
      })?,
      Err(_) => DEFAULT_MAX_TEXT_CHARS,
    };
    if max_text_chars == 0 {
      return Err(ApiError::config("SYLLABE_MAX_TEXT_CHARS must be at least 1"));
    }

    let digit_policy = match std::env::var("SYLLABE_DIGIT_POLICY") {
      Ok(raw) => DigitPolicy::from_str(&raw).map_err(|e| ApiError::config(e.to_string()))?,
      Err(_) => DigitPolicy::default(),
    };

    let auth = Self::auth_from_env();

    Ok(Self {
      bind_addr,
      max_text_chars,
      digit_policy,
      auth,
    })
  }

  /// Selects the authentication strategy from the environment.
  fn auth_from_env() -> AuthStrategy {
    if let Ok(key) = std::env::var("SYLLABE_API_KEY")
      && !key.is_empty()
    {
      return AuthStrategy::ApiKey { key };
    }
    if let Ok(token) = std::env::var("SYLLABE_BEARER_TOKEN")
      && !token.is_empty()
    {
      return AuthStrategy::Bearer { token };
    }
    AuthStrategy::Disabled
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Note: set_var/remove_var became unsafe in Rust 2024, so these tests only
  // assert behavior that does not depend on mutating the process env.

  #[test]
  fn config_from_env_defaults() {
    let config = Config::from_env().unwrap();
    assert!(!config.bind_addr.is_empty());
    assert!(config.max_text_chars >= 1);
  }

  #[test]
  fn digit_policy_parsing_matches_core() {
    assert_eq!(
      DigitPolicy::from_str("passthrough").unwrap(),
      DigitPolicy::Passthrough
    );
    assert_eq!(
      DigitPolicy::from_str("syllabify").unwrap(),
      DigitPolicy::Syllabify
    );
    assert!(DigitPolicy::from_str("maybe").is_err());
  }
}
