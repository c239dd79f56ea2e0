//! JSON file store
//!
//! Persists the expense collection as a single JSON array in one file.
//! Every save is a full-file overwrite, not an append or patch; there is no
//! partial-write recovery, so a crash mid-write can corrupt the file. That
//! limitation is accepted for a single-user, single-invocation tool.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::ExpenseStore;

/// File-backed expense store
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at the given path, seeding a valid starting state
    ///
    /// Missing parent directories are created, and a missing file is
    /// initialized as an empty collection before any load or save.
    pub fn open(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        if !path.exists() {
            fs::write(&path, "[]").map_err(|e| {
                ExpenseError::Io(format!("Failed to create {}: {}", path.display(), e))
            })?;
        }

        Ok(Self { path })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpenseStore for JsonFileStore {
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            ExpenseError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        // An empty or whitespace-only file is a valid empty collection.
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|e| ExpenseError::corrupt(&self.path, &e))
    }

    fn save(&self, records: &[Expense]) -> ExpenseResult<()> {
        let file = File::create(&self.path).map_err(|e| {
            ExpenseError::Io(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)
            .map_err(|e| ExpenseError::Io(format!("Failed to serialize records: {}", e)))?;

        writer
            .flush()
            .map_err(|e| ExpenseError::Io(format!("Failed to flush {}: {}", self.path.display(), e)))
    }
}
