//! YAML Export functionality
//!
//! Human-readable dump of the full expense list.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::LedgerExport;
use crate::models::ExpenseRecord;

/// Export the ledger to YAML
pub fn export_ledger_yaml<W: Write>(records: &[ExpenseRecord], writer: &mut W) -> BudgetResult<()> {
    let export = LedgerExport::from_records(records);

    writeln!(writer, "# budget-tracker expense export")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_yaml() {
        let records = vec![ExpenseRecord::new("", "교통비", 1250, "1")];
        let mut out = Vec::new();
        export_ledger_yaml(&records, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# budget-tracker expense export"));
        assert!(text.contains("record_count: 1"));
        assert!(text.contains("amount: 1250"));
    }
}
