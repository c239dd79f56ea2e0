//! Export module
//!
//! Converts the stored expense collection into spreadsheet-compatible CSV.

pub mod csv;

pub use self::csv::CsvExporter;
