//! # Time Utilities
//!
//! Utilities for time handling using chrono.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Unix timestamp (seconds) of a UTC time.
pub fn unix_seconds(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}
