//! Reports module for budget-tracker
//!
//! The monthly summary: twelve month rows of per-category spending.

pub mod monthly;

pub use monthly::{aggregate, MonthlyReport, MONTHS};
