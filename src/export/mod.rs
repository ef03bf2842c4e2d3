//! Export module for budget-tracker
//!
//! - CSV: the raw ledger, spreadsheet-compatible
//! - JSON: machine-readable dump of every record
//! - YAML: human-readable dump of every record

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, render_raw_csv, CsvStyle, CSV_HEADER, DEFAULT_CSV_FILE};
pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;
