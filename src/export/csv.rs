//! CSV export functionality
//!
//! Writes one header row followed by one row per record, fields in the
//! stable order id, name, date, amount. Amounts and dates are emitted as
//! stored, never reformatted; the csv writer quotes embedded commas.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Exporter for the expense collection
pub struct CsvExporter<'a> {
    store: &'a dyn ExpenseStore,
}

impl<'a> CsvExporter<'a> {
    /// Create a new exporter over the given store
    pub fn new(store: &'a dyn ExpenseStore) -> Self {
        Self { store }
    }

    /// Export the stored collection to a CSV file
    ///
    /// Missing parent directories of the target are created. Returns the
    /// number of exported records.
    pub fn export_to(&self, path: impl AsRef<Path>) -> ExpenseResult<usize> {
        let path = path.as_ref();
        let records = self.store.load()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Export(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);

        write_csv(&records, &mut writer)?;
        Ok(records.len())
    }
}

/// Write records as CSV to any writer
pub fn write_csv<W: Write>(records: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "name", "date", "amount"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for record in records {
        csv_writer
            .write_record([
                record.id.to_string(),
                record.name.clone(),
                record.date.clone(),
                record.amount.to_string(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}
