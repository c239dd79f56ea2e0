//! Expense record model
//!
//! Represents a single expense entry with a service-assigned id, a
//! description, the creation date, and an exact decimal amount.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Date format used for the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense entry
///
/// The `date` field is kept as the stored `yyyy-MM-dd` string rather than a
/// parsed date: a record with an unparsable date must still load and list,
/// and is only skipped by the month/year summary filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the service (never by the caller)
    pub id: u32,

    /// Descriptive text, non-empty
    pub name: String,

    /// Creation date as `yyyy-MM-dd`, immutable after creation
    pub date: String,

    /// Exact decimal amount, serialized as a JSON number
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl Expense {
    /// Create a new expense record
    pub fn new(id: u32, name: impl Into<String>, date: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            date: date.into(),
            amount,
        }
    }

    /// Parse the stored date, if it is a valid `yyyy-MM-dd` string
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Name: {}, Date: {}, Amount: {}",
            self.id, self.name, self.date, self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parsed_date_valid() {
        let expense = Expense::new(1, "Coffee", "2024-03-01", dec!(3.50));
        assert_eq!(
            expense.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn test_parsed_date_invalid() {
        let expense = Expense::new(1, "Coffee", "not-a-date", dec!(3.50));
        assert_eq!(expense.parsed_date(), None);
    }

    #[test]
    fn test_json_round_trip_preserves_scale() {
        let expense = Expense::new(2, "Book", "2024-04-01", dec!(12.00));
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("12.00"), "amount reformatted: {}", json);

        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(1, "Coffee", "2024-03-01", dec!(3.50));
        assert_eq!(
            expense.to_string(),
            "Id: 1, Name: Coffee, Date: 2024-03-01, Amount: 3.50"
        );
    }
}
