//! Input validation utilities
//!
//! Validation failures are returned as user-facing strings and rendered
//! inline on the owning form. There is no retry machinery: the user
//! corrects the input and resubmits.

use regex::Regex;
use std::sync::OnceLock;

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate phone number
///
/// Accepts spaces, dashes, and parentheses as separators; the remaining
/// characters must be exactly 10 digits.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.is_empty() {
        return Err("Phone number is required".to_string());
    }

    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

    if !regex.is_match(&digits) {
        return Err("Enter a valid 10-digit phone number".to_string());
    }

    Ok(())
}

/// Validate a one-time passcode entry
pub fn validate_otp(code: &str) -> Result<(), String> {
    static OTP_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex =
        OTP_REGEX.get_or_init(|| Regex::new(r"^[0-9]{6}$").expect("Failed to compile OTP regex"));

    if !regex.is_match(code) {
        return Err("Enter the 6-digit code".to_string());
    }

    Ok(())
}

/// Validate a `#`-prefixed handle
pub fn validate_handle(handle: &str) -> Result<(), String> {
    if handle.is_empty() {
        return Err("Handle is required".to_string());
    }

    let Some(name) = handle.strip_prefix('#') else {
        return Err("Handle must start with #".to_string());
    };

    if name.len() < 3 {
        return Err("Handle must be at least 3 characters after #".to_string());
    }

    if name.len() > 15 {
        return Err("Handle must be at most 15 characters after #".to_string());
    }

    static HANDLE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = HANDLE_REGEX
        .get_or_init(|| Regex::new(r"^[a-z0-9_]+$").expect("Failed to compile handle regex"));

    if !regex.is_match(name) {
        return Err(
            "Handle can only contain lowercase letters, numbers, and underscores".to_string(),
        );
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;

    for c in password.chars() {
        if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        }
    }

    if !has_upper {
        return Err("Password must contain at least one uppercase letter".to_string());
    }

    if !has_lower {
        return Err("Password must contain at least one lowercase letter".to_string());
    }

    if !has_digit {
        return Err("Password must contain at least one digit".to_string());
    }

    Ok(())
}

/// Validate display name
pub fn validate_display_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Display name is required".to_string());
    }

    if trimmed.len() > 50 {
        return Err("Display name must be at most 50 characters long".to_string());
    }

    Ok(())
}

/// Validate age
pub fn validate_age(age: u8) -> Result<(), String> {
    if age < 18 {
        return Err("You must be at least 18 years old".to_string());
    }

    if age > 99 {
        return Err("Enter a valid age".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last+tag@sub.domain.org").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("user@nodot").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("5551234567").is_ok());
        assert!(validate_phone("(555) 123-4567").is_ok());
        assert!(validate_phone("555-123-4567").is_ok());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("123456789").is_err());
        assert!(validate_phone("12345678901").is_err());
        assert!(validate_phone("555123456a").is_err());
    }

    #[test]
    fn test_validate_otp() {
        assert!(validate_otp("123456").is_ok());
        assert!(validate_otp("000000").is_ok());
        assert!(validate_otp("12345").is_err());
        assert!(validate_otp("1234567").is_err());
        assert!(validate_otp("12345a").is_err());
        assert!(validate_otp("").is_err());
    }

    #[test]
    fn test_validate_handle() {
        // Too short after the '#'
        assert!(validate_handle("#ab").is_err());
        assert!(validate_handle("#abc").is_ok());

        assert!(validate_handle("#luna_99").is_ok());
        assert!(validate_handle("").is_err());
        assert!(validate_handle("abc").is_err());
        assert!(validate_handle("#Abc").is_err());
        assert!(validate_handle("#a b").is_err());
        assert!(validate_handle("#abcdefghijklmnop").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Abcdefg1").is_ok());
        assert!(validate_password("abcdefgh").is_err());

        assert!(validate_password("").is_err());
        assert!(validate_password("Ab1").is_err());
        assert!(validate_password("ABCDEFG1").is_err());
        assert!(validate_password("Abcdefgh").is_err());
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("Luna").is_ok());
        assert!(validate_display_name("  ").is_err());
        assert!(validate_display_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age(18).is_ok());
        assert!(validate_age(99).is_ok());
        assert!(validate_age(17).is_err());
        assert!(validate_age(100).is_err());
    }
}
