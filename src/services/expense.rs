//! Expense service
//!
//! CRUD operations over the expense collection. Every operation brackets a
//! full load → mutate in memory → save cycle against the store, so there is
//! never a partially persisted state between the two.

use chrono::Local;
use rust_decimal::Decimal;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{expense::DATE_FORMAT, Expense};
use crate::storage::ExpenseStore;

/// Result of an update by id
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The record was found and rewritten
    Updated(Expense),
    /// No record carries the requested id; the collection was saved unchanged
    NotFound,
}

/// Result of a delete by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Number of records removed (zero when the id was absent)
    pub removed: usize,
}

impl DeleteOutcome {
    /// Whether any record was actually removed
    pub fn any_removed(&self) -> bool {
        self.removed > 0
    }
}

/// Service for expense record management
pub struct ExpenseService<'a> {
    store: &'a dyn ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service over the given store
    pub fn new(store: &'a dyn ExpenseStore) -> Self {
        Self { store }
    }

    /// Create a record with a fresh id and today's date
    ///
    /// Ids are assigned as `max(existing) + 1`, or 1 for an empty
    /// collection. Deleted ids are never reassigned while a higher id
    /// remains; gaps are expected and permanent.
    pub fn create(&self, name: &str, amount: Decimal) -> ExpenseResult<Expense> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ExpenseError::Validation(
                "Expense name must not be empty".into(),
            ));
        }

        let mut records = self.store.load()?;

        let id = records.iter().map(|r| r.id).max().map_or(1, |max| max + 1);
        let date = Local::now().date_naive().format(DATE_FORMAT).to_string();

        let expense = Expense::new(id, name, date, amount);
        records.push(expense.clone());
        self.store.save(&records)?;

        Ok(expense)
    }

    /// Replace the name and amount of the record with the given id
    ///
    /// Id and date are immutable after creation. A missing id is a normal
    /// outcome, not an error; the unchanged collection is still saved.
    pub fn update(&self, id: u32, name: &str, amount: Decimal) -> ExpenseResult<UpdateOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ExpenseError::Validation(
                "Expense name must not be empty".into(),
            ));
        }

        let mut records = self.store.load()?;

        let outcome = match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.name = name.to_string();
                record.amount = amount;
                UpdateOutcome::Updated(record.clone())
            }
            None => UpdateOutcome::NotFound,
        };

        self.store.save(&records)?;
        Ok(outcome)
    }

    /// Remove every record with the given id
    ///
    /// Ids are de-facto unique, but duplicates (should they ever occur) are
    /// all removed rather than just the first match.
    pub fn delete(&self, id: u32) -> ExpenseResult<DeleteOutcome> {
        let mut records = self.store.load()?;

        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = before - records.len();

        self.store.save(&records)?;
        Ok(DeleteOutcome { removed })
    }

    /// Discard all records unconditionally
    pub fn clear(&self) -> ExpenseResult<()> {
        self.store.save(&[])
    }

    /// The loaded collection, unmodified, in stored order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.load()
    }
}
