//! # Validation Utilities
//!
//! Input validation helpers. Each helper returns a client-facing message on failure.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format.
///
/// Requires exactly one `@`, a non-empty local part, and a domain containing a
/// dot that is neither leading nor trailing. No whitespace anywhere.
pub fn validate_email(email: &str) -> Result<(), String> {
    let invalid = || Err("Invalid email format".to_string());

    if email.chars().any(char::is_whitespace) {
        return invalid();
    }

    let Some((local, domain)) = email.split_once('@') else {
        return invalid();
    };

    if local.is_empty() || domain.contains('@') {
        return invalid();
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return invalid();
    }

    Ok(())
}

/// Validate minimum length (in characters).
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

/// Validate that a length (in characters) lies within `min..=max`.
pub fn validate_length_range(
    value: &str,
    min: usize,
    max: usize,
    field_name: &str,
) -> Result<(), String> {
    let len = value.chars().count();
    if len < min || len > max {
        Err(format!(
            "{} must be between {} and {} characters",
            field_name, min, max
        ))
    } else {
        Ok(())
    }
}

/// Validate that a number is finite and not negative.
pub fn validate_non_negative(value: f64, field_name: &str) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{} must be a finite number", field_name));
    }
    if value < 0.0 {
        return Err(format!("{} must not be negative", field_name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("user+tag@example.co.uk").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user@example.").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("user name@example.com").is_err());
    }

    #[test]
    fn test_validate_length_range() {
        assert!(validate_length_range("ab", 3, 20, "Username").is_err());
        assert!(validate_length_range("abc", 3, 20, "Username").is_ok());
        assert!(validate_length_range(&"x".repeat(20), 3, 20, "Username").is_ok());
        assert_eq!(
            validate_length_range(&"x".repeat(21), 3, 20, "Username"),
            Err("Username must be between 3 and 20 characters".to_string())
        );
    }

    #[test]
    fn test_validate_min_length_counts_chars() {
        // Six characters, more than six bytes
        assert!(validate_min_length("pässwö", 6, "Password").is_ok());
        assert!(validate_min_length("short", 6, "Password").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0.0, "Price").is_ok());
        assert!(validate_non_negative(50000.0, "Price").is_ok());
        assert!(validate_non_negative(-0.01, "Price").is_err());
        assert!(validate_non_negative(f64::NAN, "Price").is_err());
        assert!(validate_non_negative(f64::INFINITY, "Price").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("BTC", "Symbol").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Symbol"),
            Err("Symbol cannot be empty".to_string())
        );
    }
}
