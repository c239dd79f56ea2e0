//! In-memory expense store
//!
//! Backs the service layer without touching the filesystem. Used by unit
//! tests, and doubles as proof that services depend only on the
//! `ExpenseStore` trait rather than on the JSON file store.

use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::ExpenseStore;

/// Expense store holding the collection in memory
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Expense>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records
    pub fn with_records(records: Vec<Expense>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl ExpenseStore for MemoryStore {
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let records = self
            .records
            .read()
            .map_err(|e| ExpenseError::Io(format!("Failed to acquire read lock: {}", e)))?;
        Ok(records.clone())
    }

    fn save(&self, records: &[Expense]) -> ExpenseResult<()> {
        let mut stored = self
            .records
            .write()
            .map_err(|e| ExpenseError::Io(format!("Failed to acquire write lock: {}", e)))?;
        *stored = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let store = MemoryStore::new();
        let records = vec![
            Expense::new(2, "Book", "2024-04-01", dec!(12.00)),
            Expense::new(1, "Coffee", "2024-03-01", dec!(3.50)),
        ];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }
}
