//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the storage and report layers.

pub mod expense;
pub mod export;
pub mod report;

pub use expense::{handle_add_command, handle_list_command, AddArgs};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_chart_command, handle_summary_command};
