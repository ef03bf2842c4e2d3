//! budget-tracker - personal budget tracking from the terminal
//!
//! Expenses are recorded with a category and a month, kept in a local JSON
//! file, and summarized per month per category against a fixed budget
//! schedule.
//!
//! # Architecture
//!
//! - `config`: Base directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense records, the budget schedule, summary rows
//! - `storage`: The append-only expense store on disk
//! - `reports`: Monthly aggregation
//! - `display`: Terminal tables and the stacked bar chart
//! - `export`: CSV, JSON and YAML export of the raw ledger
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_tracker::config::{AggregationMode, BudgetPaths};
//! use budget_tracker::models::{BudgetSchedule, ExpenseDraft};
//! use budget_tracker::reports::aggregate;
//! use budget_tracker::storage::Storage;
//!
//! # fn main() -> Result<(), budget_tracker::BudgetError> {
//! let mut storage = Storage::open(BudgetPaths::new()?)?;
//! storage
//!     .expenses
//!     .append(&ExpenseDraft::new("2025-06-10", "식비/생활비", "50000", "6"))?;
//!
//! let rows = aggregate(
//!     storage.expenses.all(),
//!     &BudgetSchedule::default(),
//!     AggregationMode::Strict,
//! );
//! assert_eq!(rows.len(), 12);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{BudgetError, BudgetResult, ValidationError};
