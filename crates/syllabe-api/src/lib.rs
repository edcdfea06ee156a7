//! syllabe-api crate
//!
//! Web server exposing the syllabe segmentation pipeline as an HTTP API.
//!
//! ## Endpoints
//! - `POST /segment` - Syllable segmentation
//! - `GET /health` - Health check (no auth required)
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5860/segment \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "Bonjour, le monde!", "sep": "."}'
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use auth::AuthStrategy;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{SegmentRequest, SegmentResponse};
pub use service::SegmentApiServiceFull;
