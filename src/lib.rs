//! Personal expense tracker for the command line
//!
//! This library provides the core functionality for the `expenses` CLI:
//! recording, editing, deleting, listing, summarizing, and exporting
//! expense entries persisted in a local JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: The expense record
//! - `storage`: The `ExpenseStore` trait and its JSON-file and in-memory
//!   implementations
//! - `services`: Business logic (CRUD and summary aggregation)
//! - `export`: CSV export
//! - `cli`: Command handlers that own all printing
//!
//! Services depend only on the `ExpenseStore` trait, so any persistence
//! medium can back them. Each operation loads the whole collection, works
//! on it in memory, and writes it back as a full-file overwrite.

pub mod cli;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
