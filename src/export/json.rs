//! JSON Export functionality
//!
//! Dumps the full expense list with an export timestamp.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::ExpenseRecord;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of records
    pub record_count: usize,

    /// All records in store order
    pub expenses: Vec<ExpenseRecord>,
}

impl LedgerExport {
    /// Snapshot a record list
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            record_count: records.len(),
            expenses: records.to_vec(),
        }
    }
}

/// Export the ledger to JSON
pub fn export_ledger_json<W: Write>(
    records: &[ExpenseRecord],
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let export = LedgerExport::from_records(records);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_json_contains_records() {
        let records = vec![ExpenseRecord::new("2025-03-01", "기타", 1500, "3")];
        let mut out = Vec::new();
        export_ledger_json(&records, &mut out, true).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.record_count, 1);
        assert_eq!(parsed.expenses, records);
    }
}
