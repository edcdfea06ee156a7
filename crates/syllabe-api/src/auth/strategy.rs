//! Authentication strategy definition.

use axum::http::HeaderMap;

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Pluggable request authentication strategy.
///
/// The three observed deployment variants differed only in how they guarded
/// the endpoint; the pipeline is identical. The strategy is chosen once at
/// startup from the environment and shared read-only per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStrategy {
  /// Development bypass: every request passes.
  ///
  /// Used when no credential is configured. Deliberately loud: startup logs
  /// a warning so the permissive mode is never applied silently.
  Disabled,
  /// Static shared secret compared against the `x-api-key` header
  ApiKey {
    /// Expected key value
    key: String,
  },
  /// Static bearer token compared against `Authorization: Bearer <token>`
  Bearer {
    /// Expected token value
    token: String,
  },
}

impl AuthStrategy {
  /// Strategy name for logs.
  #[must_use]
  pub fn name(&self) -> &'static str {
    match self {
      Self::Disabled => "disabled",
      Self::ApiKey { .. } => "api-key",
      Self::Bearer { .. } => "bearer",
    }
  }

  /// Returns whether requests pass without a credential.
  #[must_use]
  pub fn is_disabled(&self) -> bool {
    matches!(self, Self::Disabled)
  }

  /// Decides whether a request with the given headers is allowed.
  ///
  /// # Returns
  /// `Ok(())` to let the request through, `Err(reason)` to reject with 401.
  pub fn authenticate(&self, headers: &HeaderMap) -> Result<(), &'static str> {
    match self {
      Self::Disabled => Ok(()),
      Self::ApiKey { key } => {
        let presented = headers
          .get(API_KEY_HEADER)
          .and_then(|value| value.to_str().ok())
          .ok_or("missing api key")?;
        if presented == key {
          Ok(())
        } else {
          Err("invalid api key")
        }
      }
      Self::Bearer { token } => {
        let presented = headers
          .get(axum::http::header::AUTHORIZATION)
          .and_then(|value| value.to_str().ok())
          .and_then(|value| value.strip_prefix("Bearer "))
          .ok_or("missing bearer token")?;
        if presented == token {
          Ok(())
        } else {
          Err("invalid bearer token")
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::http::HeaderValue;

  fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
      map.insert(*name, HeaderValue::from_str(value).unwrap());
    }
    map
  }

  #[test]
  fn disabled_allows_everything() {
    let strategy = AuthStrategy::Disabled;
    assert!(strategy.authenticate(&HeaderMap::new()).is_ok());
    assert!(strategy.is_disabled());
  }

  #[test]
  fn api_key_accepts_matching_key() {
    let strategy = AuthStrategy::ApiKey {
      key: "secret".to_string(),
    };
    let result = strategy.authenticate(&headers(&[("x-api-key", "secret")]));
    assert!(result.is_ok());
  }

  #[test]
  fn api_key_rejects_missing_header() {
    let strategy = AuthStrategy::ApiKey {
      key: "secret".to_string(),
    };
    assert_eq!(
      strategy.authenticate(&HeaderMap::new()),
      Err("missing api key")
    );
  }

  #[test]
  fn api_key_rejects_wrong_key() {
    let strategy = AuthStrategy::ApiKey {
      key: "secret".to_string(),
    };
    assert_eq!(
      strategy.authenticate(&headers(&[("x-api-key", "nope")])),
      Err("invalid api key")
    );
  }

  #[test]
  fn bearer_accepts_matching_token() {
    let strategy = AuthStrategy::Bearer {
      token: "tok123".to_string(),
    };
    let result = strategy.authenticate(&headers(&[("authorization", "Bearer tok123")]));
    assert!(result.is_ok());
  }

  #[test]
  fn bearer_rejects_missing_scheme_prefix() {
    let strategy = AuthStrategy::Bearer {
      token: "tok123".to_string(),
    };
    assert_eq!(
      strategy.authenticate(&headers(&[("authorization", "tok123")])),
      Err("missing bearer token")
    );
  }

  #[test]
  fn bearer_rejects_wrong_token() {
    let strategy = AuthStrategy::Bearer {
      token: "tok123".to_string(),
    };
    assert_eq!(
      strategy.authenticate(&headers(&[("authorization", "Bearer other")])),
      Err("invalid bearer token")
    );
  }

  #[test]
  fn strategy_names_are_stable() {
    assert_eq!(AuthStrategy::Disabled.name(), "disabled");
    assert_eq!(
      AuthStrategy::ApiKey {
        key: String::new()
      }
      .name(),
      "api-key"
    );
    assert_eq!(
      AuthStrategy::Bearer {
        token: String::new()
      }
      .name(),
      "bearer"
    );
  }
}
