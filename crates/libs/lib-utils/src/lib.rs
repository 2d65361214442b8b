//! # Utilities Library
//!
//! Shared utility functions for environment variables, time, and validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse_or};
pub use time::{now_utc, unix_seconds};
pub use validation::{
    validate_email, validate_length_range, validate_min_length, validate_non_negative,
    validate_not_empty,
};
