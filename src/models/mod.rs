//! Core data models for the expense tracker
//!
//! A single entity lives here: the expense record persisted in the
//! storage file.

pub mod expense;

pub use expense::Expense;
