//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! id assignment, date stamping, validation, and aggregation. Services
//! return structured results; printing belongs to the CLI boundary.

pub mod expense;
pub mod summary;

pub use expense::{DeleteOutcome, ExpenseService, UpdateOutcome};
pub use summary::{Summary, SummaryScope, SummaryService};
