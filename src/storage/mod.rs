//! Storage layer for the expense tracker
//!
//! Provides the `ExpenseStore` capability trait plus the JSON-file and
//! in-memory implementations. Stores own serialization only; they hold no
//! business state between calls.

pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Persistence abstraction for the expense collection
///
/// Services depend only on this trait, never on a concrete store, so any
/// medium (file, in-memory, a future database) can back them.
pub trait ExpenseStore {
    /// Load the full persisted collection in stored order
    fn load(&self) -> ExpenseResult<Vec<Expense>>;

    /// Serialize the entire collection, overwriting whatever was persisted
    fn save(&self, records: &[Expense]) -> ExpenseResult<()>;
}
