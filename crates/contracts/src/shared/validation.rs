//! Client-side checks that run before a request is sent.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please choose a date")]
    MissingDate,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Start date must not be after end date")]
    InvertedRange,

    #[error("Please fill in {0}")]
    MissingField(&'static str),

    #[error("{0} must be a number")]
    NotANumber(&'static str),

    #[error("Please select at least one row")]
    EmptySelection,
}

/// Inclusive date range as sent to the list endpoints (`YYYY-MM-DD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn parse(from: &str, to: &str) -> Result<Self, ValidationError> {
        let from = parse_date(from)?;
        let to = parse_date(to)?;
        if from > to {
            return Err(ValidationError::InvertedRange);
        }
        Ok(Self { from, to })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }

    pub fn from_str_value(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    pub fn to_str_value(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Trimmed non-empty value or `MissingField`
pub fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

pub fn require_number(value: &str, field: &'static str) -> Result<f64, ValidationError> {
    let value = require(value, field)?;
    value
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::NotANumber(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range() {
        let range = DateRange::parse("2024-03-01", "2024-03-15").unwrap();
        assert_eq!(range.from_str_value(), "2024-03-01");
        assert_eq!(DateRange::parse("", "2024-03-15"), Err(ValidationError::MissingDate));
        assert_eq!(
            DateRange::parse("2024-03-16", "2024-03-15"),
            Err(ValidationError::InvertedRange)
        );
        assert!(matches!(
            DateRange::parse("15.03.2024", "2024-03-15"),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_require() {
        assert_eq!(require("  abc ", "Account"), Ok("abc"));
        assert_eq!(require(" ", "Account"), Err(ValidationError::MissingField("Account")));
        assert_eq!(require_number("1,500.25", "Amount"), Ok(1500.25));
        assert_eq!(require_number("x", "Amount"), Err(ValidationError::NotANumber("Amount")));
        assert_eq!(
            ValidationError::MissingDate.to_string(),
            "Please choose a date"
        );
    }
}
