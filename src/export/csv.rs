//! CSV Export functionality
//!
//! Exports the raw expense ledger. The default format writes fields exactly
//! as stored, joined by commas with no quoting, lines separated by `\n` and
//! no trailing newline. A field containing a comma therefore shifts the
//! columns of its line; `CsvStyle::Quoted` avoids that.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::ExpenseRecord;

/// Header row: date, item, expense amount, month
pub const CSV_HEADER: [&str; 4] = ["날짜", "항목", "지출 금액", "월"];

/// File name used when no output path is given
pub const DEFAULT_CSV_FILE: &str = "expenses.csv";

/// Field encoding for the CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvStyle {
    /// Fields written verbatim
    #[default]
    Raw,
    /// RFC 4180 quoting where a field needs it
    Quoted,
}

/// Render the ledger in the raw format
pub fn render_raw_csv(records: &[ExpenseRecord]) -> String {
    std::iter::once(CSV_HEADER.join(","))
        .chain(records.iter().map(|r| {
            format!("{},{},{},{}", r.date, r.category, r.amount.units(), r.month)
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Export all records to CSV in store order
pub fn export_expenses_csv<W: Write>(
    records: &[ExpenseRecord],
    writer: &mut W,
    style: CsvStyle,
) -> BudgetResult<()> {
    match style {
        CsvStyle::Raw => writer
            .write_all(render_raw_csv(records).as_bytes())
            .map_err(|e| BudgetError::Export(e.to_string())),
        CsvStyle::Quoted => write_quoted(records, writer),
    }
}

fn write_quoted<W: Write>(records: &[ExpenseRecord], writer: &mut W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for record in records {
        let amount = record.amount.units().to_string();
        csv_writer
            .write_record([
                record.date.as_str(),
                record.category.as_str(),
                amount.as_str(),
                record.month.as_str(),
            ])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
