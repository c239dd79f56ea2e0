//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. All console output
//! happens here; services and stores only hand back structured results.

use std::path::Path;

use rust_decimal::Decimal;

use crate::error::ExpenseResult;
use crate::export::CsvExporter;
use crate::services::{ExpenseService, SummaryScope, SummaryService, UpdateOutcome};
use crate::storage::ExpenseStore;

/// Handle `read`: list all records
pub fn handle_read(store: &dyn ExpenseStore) -> ExpenseResult<()> {
    let records = ExpenseService::new(store).list()?;

    if records.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    for record in records {
        println!("{}", record);
    }
    Ok(())
}

/// Handle `add`: create a record
pub fn handle_add(store: &dyn ExpenseStore, name: &str, amount: Decimal) -> ExpenseResult<()> {
    let expense = ExpenseService::new(store).create(name, amount)?;
    println!(
        "Added expense {}: {} ({})",
        expense.id, expense.name, expense.amount
    );
    Ok(())
}

/// Handle `update`: rewrite name and amount by id
pub fn handle_update(
    store: &dyn ExpenseStore,
    id: u32,
    name: &str,
    amount: Decimal,
) -> ExpenseResult<()> {
    match ExpenseService::new(store).update(id, name, amount)? {
        UpdateOutcome::Updated(expense) => {
            println!("Updated expense {}: {} ({})", expense.id, expense.name, expense.amount);
        }
        // Not an error: the request completed, there was just nothing to touch.
        UpdateOutcome::NotFound => println!("Expense {} not found; nothing updated", id),
    }
    Ok(())
}

/// Handle `delete`: remove records by id
pub fn handle_delete(store: &dyn ExpenseStore, id: u32) -> ExpenseResult<()> {
    let outcome = ExpenseService::new(store).delete(id)?;
    if outcome.any_removed() {
        println!("Deleted expense {}", id);
    } else {
        println!("Expense {} not found; nothing deleted", id);
    }
    Ok(())
}

/// Handle `clear`: wipe all records
pub fn handle_clear(store: &dyn ExpenseStore) -> ExpenseResult<()> {
    ExpenseService::new(store).clear()?;
    println!("Cleared all expenses");
    Ok(())
}

/// Handle `summary`: print the aggregate total
pub fn handle_summary(
    store: &dyn ExpenseStore,
    month: Option<u32>,
    year: Option<i32>,
) -> ExpenseResult<()> {
    let summary = SummaryService::new(store).total(month, year)?;
    match summary.scope {
        SummaryScope::Month { month, year } => println!(
            "Total expenses for month {} of year {}: {}",
            month, year, summary.total
        ),
        SummaryScope::AllRecords => println!("Total expenses: {}", summary.total),
    }
    Ok(())
}

/// Handle `export-csv`: write the collection to a CSV file
pub fn handle_export_csv(store: &dyn ExpenseStore, out: &Path) -> ExpenseResult<()> {
    let count = CsvExporter::new(store).export_to(out)?;
    println!("Exported {} expenses to {}", count, out.display());
    Ok(())
}
