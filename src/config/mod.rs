//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (database location, output file, query)
//! - Library configuration types and home directory expansion

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{expand_home, Config, LogFormat, LogLevel};
