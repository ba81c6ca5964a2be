//! Input validation functions
//!
//! Custom validators used by the `validator` derive macros on outbound
//! payload types. The server rejects the same inputs; checking here saves
//! a round trip.

use validator::ValidationError;

/// Validate a username: non-empty, no whitespace, bounded length
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::new("username_empty"));
    }
    if username.len() > 64 {
        return Err(ValidationError::new("username_too_long"));
    }
    let no_whitespace = regex_lite::Regex::new(r"^\S+$").unwrap();
    if !no_whitespace.is_match(username) {
        return Err(ValidationError::new("username_whitespace"));
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < 8 {
        return Err(ValidationError::new("password_too_short"));
    }
    if password.len() > 128 {
        return Err(ValidationError::new("password_too_long"));
    }
    Ok(())
}
