//! Parsing and normalization of raw field values
//!
//! Every value that reaches storage passes through here first, so a rejected
//! value never touches the database.

use chrono::NaiveDate;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Date format accepted for every date field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date '{}': expected a calendar date as YYYY-MM-DD",
            value.trim()
        ))
    })
}

/// Parse a non-negative currency amount
pub fn parse_amount(value: &str) -> LedgerResult<Money> {
    let amount = Money::parse(value)
        .map_err(|e| LedgerError::Validation(format!("Invalid amount: {}", e)))?;
    ensure_non_negative(amount)
}

/// Reject negative amounts
pub fn ensure_non_negative(amount: Money) -> LedgerResult<Money> {
    if amount.is_negative() {
        return Err(LedgerError::Validation(format!(
            "Amount cannot be negative: {}",
            amount
        )));
    }
    Ok(amount)
}

/// Upper-case the first letter of every word and lower-case the rest
///
/// A word starts after any non-alphabetic character, so
/// `"italy (holiday)"` becomes `"Italy (Holiday)"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_is_alpha = false;
    for c in value.trim().chars() {
        if prev_is_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_alpha = c.is_alphabetic();
    }
    out
}

/// Upper-case the first character and lower-case everything else
pub fn capitalize(value: &str) -> String {
    let mut chars = value.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Title-case a category and reject blank names
pub fn normalize_category(value: &str) -> LedgerResult<String> {
    let category = title_case(value);
    if category.is_empty() {
        return Err(LedgerError::Validation("Category cannot be empty".into()));
    }
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-05-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(parse_date(" 2024-02-29 ").unwrap().to_string(), "2024-02-29");
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        assert!(parse_date("2023-02-29").unwrap_err().is_validation());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("01/05/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("42.50").unwrap().cents(), 4250);
        assert_eq!(parse_amount("0").unwrap().cents(), 0);
        assert!(parse_amount("-1").unwrap_err().is_validation());
        assert!(parse_amount("ten").unwrap_err().is_validation());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("food"), "Food");
        assert_eq!(title_case("EATING out"), "Eating Out");
        assert_eq!(title_case("italy (holiday)"), "Italy (Holiday)");
        assert_eq!(title_case("  dining-out  "), "Dining-Out");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("tesco SHOPPING"), "Tesco shopping");
        assert_eq!(capitalize("  x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("groceries").unwrap(), "Groceries");
        assert!(normalize_category("   ").unwrap_err().is_validation());
    }
}
