//! Authentication module
//!
//! The pipeline itself takes no part in authentication; this module is the
//! pluggable strategy at the service boundary, selected by deployment
//! configuration.

mod middleware;
mod strategy;

pub use middleware::require_auth;
pub use strategy::AuthStrategy;
