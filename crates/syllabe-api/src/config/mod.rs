//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, DEFAULT_MAX_TEXT_CHARS, DEFAULT_SEPARATOR};
pub use env::Config;
