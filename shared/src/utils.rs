//! # Shared Utility Functions
//!
//! Display helpers used by both table cells and log output.
//!
//! ```rust
//! use shared::utils::{format_amount, mask_phone};
//!
//! assert_eq!(mask_phone("0712345678"), "07******78");
//! assert_eq!(format_amount(12500.0), "12 500.00");
//! ```

/// Mask the middle digits of a phone number, keeping the first two and last
/// two characters. Numbers too short to mask are returned as-is.
pub fn mask_phone(phone: &str) -> String {
    let len = phone.chars().count();
    if len <= 4 {
        return phone.to_string();
    }
    let prefix: String = phone.chars().take(2).collect();
    let suffix: String = phone.chars().skip(len - 2).collect();
    format!("{}{}{}", prefix, "*".repeat(len - 4), suffix)
}

/// Format an amount with two decimals and thin thousands grouping,
/// e.g. `1234567.5` becomes `"1 234 567.50"`.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let raw = format!("{:.2}", amount.abs());
    let (int_part, dec_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, dec_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_middle_digits() {
        assert_eq!(mask_phone("0712345678"), "07******78");
        assert_eq!(mask_phone("0712"), "0712");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn formats_amounts_with_grouping() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.9), "999.90");
        assert_eq!(format_amount(12500.0), "12 500.00");
        assert_eq!(format_amount(1234567.5), "1 234 567.50");
        assert_eq!(format_amount(-1500.0), "-1 500.00");
    }
}
