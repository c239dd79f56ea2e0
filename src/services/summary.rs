//! Summary service
//!
//! Aggregates expense amounts, optionally filtered by month and year. The
//! service returns a structured result; formatting is the CLI's job.

use chrono::{Datelike, Local};
use rust_decimal::Decimal;

use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// What a computed total covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryScope {
    /// Every stored record, no date filtering
    AllRecords,
    /// Records from one calendar month
    Month { month: u32, year: i32 },
}

/// A computed aggregate total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: Decimal,
    pub scope: SummaryScope,
}

/// Service for amount aggregation
pub struct SummaryService<'a> {
    store: &'a dyn ExpenseStore,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service over the given store
    pub fn new(store: &'a dyn ExpenseStore) -> Self {
        Self { store }
    }

    /// Total the stored amounts, optionally for one month
    ///
    /// Without a month the sum is unconditional and `year` is ignored,
    /// matching the long-standing behavior of the tool. With a month, the
    /// year defaults to the current calendar year; records whose date does
    /// not parse as `yyyy-MM-dd` are silently excluded from the filter.
    pub fn total(&self, month: Option<u32>, year: Option<i32>) -> ExpenseResult<Summary> {
        let records = self.store.load()?;

        let summary = match month {
            Some(month) => {
                let year = year.unwrap_or_else(|| Local::now().year());
                Summary {
                    total: sum_amounts(records.iter().filter(|r| matches_month(r, month, year))),
                    scope: SummaryScope::Month { month, year },
                }
            }
            None => Summary {
                total: sum_amounts(records.iter()),
                scope: SummaryScope::AllRecords,
            },
        };

        Ok(summary)
    }
}

fn sum_amounts<'e, I: Iterator<Item = &'e Expense>>(records: I) -> Decimal {
    records.map(|r| r.amount).sum()
}

fn matches_month(record: &Expense, month: u32, year: i32) -> bool {
    record
        .parsed_date()
        .is_some_and(|date| date.month() == month && date.year() == year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rust_decimal_macros::dec;

    fn store_with(records: Vec<Expense>) -> MemoryStore {
        MemoryStore::with_records(records)
    }

    #[test]
    fn test_total_without_month_sums_everything() {
        let store = store_with(vec![
            Expense::new(1, "Coffee", "2024-03-01", dec!(5.00)),
            Expense::new(2, "Book", "2024-04-01", dec!(7.00)),
        ]);
        let service = SummaryService::new(&store);

        let summary = service.total(None, None).unwrap();
        assert_eq!(summary.total, dec!(12.00));
        assert_eq!(summary.scope, SummaryScope::AllRecords);
    }

    #[test]
    fn test_total_ignores_year_when_month_absent() {
        let store = store_with(vec![
            Expense::new(1, "Coffee", "2023-03-01", dec!(5.00)),
            Expense::new(2, "Book", "2024-04-01", dec!(7.00)),
        ]);
        let service = SummaryService::new(&store);

        // The year alone does not filter; the sum stays unconditional.
        let summary = service.total(None, Some(2024)).unwrap();
        assert_eq!(summary.total, dec!(12.00));
        assert_eq!(summary.scope, SummaryScope::AllRecords);
    }

    #[test]
    fn test_total_filters_by_month_and_year() {
        let store = store_with(vec![
            Expense::new(1, "Coffee", "2024-03-01", dec!(5.00)),
            Expense::new(2, "Book", "2024-04-01", dec!(7.00)),
            Expense::new(3, "Older coffee", "2023-03-15", dec!(2.00)),
        ]);
        let service = SummaryService::new(&store);

        let summary = service.total(Some(3), Some(2024)).unwrap();
        assert_eq!(summary.total, dec!(5.00));
        assert_eq!(
            summary.scope,
            SummaryScope::Month {
                month: 3,
                year: 2024
            }
        );
    }

    #[test]
    fn test_year_defaults_to_current_year() {
        let this_year = Local::now().year();
        let store = store_with(vec![
            Expense::new(1, "This year", format!("{}-03-01", this_year), dec!(5.00)),
            Expense::new(2, "Long ago", "2020-03-01", dec!(7.00)),
        ]);
        let service = SummaryService::new(&store);

        let summary = service.total(Some(3), None).unwrap();
        assert_eq!(summary.total, dec!(5.00));
        assert_eq!(
            summary.scope,
            SummaryScope::Month {
                month: 3,
                year: this_year
            }
        );
    }

    #[test]
    fn test_unparsable_dates_are_silently_excluded() {
        let store = store_with(vec![
            Expense::new(1, "Good", "2024-03-01", dec!(5.00)),
            Expense::new(2, "Bad", "March 2024", dec!(7.00)),
        ]);
        let service = SummaryService::new(&store);

        let summary = service.total(Some(3), Some(2024)).unwrap();
        assert_eq!(summary.total, dec!(5.00));
    }

    #[test]
    fn test_empty_match_is_zero() {
        let store = store_with(vec![Expense::new(1, "Coffee", "2024-03-01", dec!(5.00))]);
        let service = SummaryService::new(&store);

        let summary = service.total(Some(7), Some(1999)).unwrap();
        assert_eq!(summary.total, Decimal::ZERO);
    }
}
