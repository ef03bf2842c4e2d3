//! Core data models for budget-tracker
//!
//! Expense records and drafts, the fixed budget schedule, and the derived
//! monthly summary rows.

pub mod amount;
pub mod expense;
pub mod schedule;
pub mod summary;

pub use amount::{Amount, AmountParseError};
pub use expense::{ExpenseDraft, ExpenseRecord};
pub use schedule::{BudgetCategory, BudgetSchedule};
pub use summary::{CategoryTotal, MonthlySummary};
