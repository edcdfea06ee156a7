//! API error definitions.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// Error types of the syllabe core crate
use syllabe::errors::{SegmentError, SyllabeError};

/// Error category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// The input text is empty after trimming
  EmptyText,
  /// The input text exceeds the maximum length
  TextTooLong,
  /// Missing or invalid credential
  Unauthorized,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Returns the stable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::EmptyText => "empty_text",
      Self::TextTooLong => "text_too_long",
      Self::Unauthorized => "unauthorized",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::EmptyText => StatusCode::BAD_REQUEST,
      Self::TextTooLong => StatusCode::PAYLOAD_TOO_LARGE,
      Self::Unauthorized => StatusCode::UNAUTHORIZED,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// The input text is empty after trimming
  #[error("text is empty")]
  EmptyText,

  /// The input text exceeds the maximum length
  #[error("text is too long: {0} characters (maximum: {1})")]
  TextTooLong(usize, usize),

  /// Missing or invalid credential
  #[error("unauthorized: {0}")]
  Unauthorized(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the error category
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::EmptyText => ApiErrorKind::EmptyText,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::Unauthorized(_) => ApiErrorKind::Unauthorized,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the stable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates an unauthorized error
  #[must_use]
  pub fn unauthorized(message: impl Into<String>) -> Self {
    Self::Unauthorized(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON error envelope
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Maps core pipeline errors to API errors.
///
/// Rejections are client errors; anything config-shaped at request time means
/// the process was started with invalid rules and is reported as a server
/// error.
impl From<SyllabeError> for ApiError {
  fn from(err: SyllabeError) -> Self {
    match err {
      SyllabeError::Segment(SegmentError::EmptyInput) => ApiError::EmptyText,
      SyllabeError::Segment(SegmentError::InputTooLong { chars, max_chars }) => {
        ApiError::TextTooLong(chars, max_chars)
      }
      SyllabeError::Config(err) => ApiError::config(err.to_string()),
      // The core error enums are #[non_exhaustive]
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
