/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a phone number: digits only (an optional leading `+`), 8 to 15
/// digits. Spaces are tolerated and ignored.
pub fn validate_phone_number(phone: &str) -> ValidationResult {
    let cleaned: String = phone.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number can only contain digits");
    }

    if digits.len() < 8 {
        return ValidationResult::err("Phone number is too short");
    }
    if digits.len() > 15 {
        return ValidationResult::err("Phone number is too long");
    }

    ValidationResult::ok()
}

/// Validate password strength for account creation.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 6 {
        return ValidationResult::err("Password must be at least 6 characters");
    }

    ValidationResult::ok()
}

/// Parse a positive monetary amount typed by the user.
pub fn parse_amount(input: &str) -> Result<f64, String> {
    let trimmed = input.trim().replace(' ', "");
    if trimmed.is_empty() {
        return Err("amount is required".to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value > 0.0 && value.is_finite() => Ok(value),
        Ok(_) => Err("must be greater than zero".to_string()),
        Err(_) => Err("must be a number".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone_number("0712345678").is_valid);
        assert!(validate_phone_number("+254712345678").is_valid);
        assert!(validate_phone_number("07 12 34 56 78").is_valid);
        assert!(!validate_phone_number("").is_valid);
        assert!(!validate_phone_number("07abc45678").is_valid);
        assert!(!validate_phone_number("0712").is_valid); // too short
        assert!(!validate_phone_number("0712345678901234567").is_valid); // too long
        assert!(!validate_phone_number("+").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret123").is_valid);
        assert!(!validate_password("").is_valid);
        assert!(!validate_password("abc").is_valid);
    }

    #[test]
    fn test_amount_parsing() {
        assert_eq!(parse_amount("250"), Ok(250.0));
        assert_eq!(parse_amount(" 1 500.50 "), Ok(1500.50));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("abc").is_err());
    }
}
