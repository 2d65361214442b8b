//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when it is unset or empty.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

/// Get and parse an environment variable, falling back to `default` when unset.
///
/// A value that is present but cannot be parsed is an error, not a silent fallback.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => {
            val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
        }
        _ => Ok(default),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{name} must be set in environment"),
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_missing() {
        let result = get_env("LIB_UTILS_TEST_SURELY_UNSET_VAR");
        assert_eq!(result, Err(Error::MissingEnv("LIB_UTILS_TEST_SURELY_UNSET_VAR")));
    }

    #[test]
    fn test_get_env_or_default() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_SURELY_UNSET_VAR", "fallback"), "fallback");
    }

    #[test]
    fn test_get_env_parse_or_default() {
        let port: u16 = get_env_parse_or("LIB_UTILS_TEST_SURELY_UNSET_PORT", 8080)
            .expect("Unset variable should use default");
        assert_eq!(port, 8080);
    }
}
