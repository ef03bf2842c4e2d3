//! Display formatting for terminal output
//!
//! Tables for the expense list and budget schedule, and the stacked bar chart
//! of monthly spending.

pub mod chart;
pub mod expense;

pub use chart::render_stacked_chart;
pub use expense::{format_expense_list, format_schedule};
