//! Monthly Summary Report
//!
//! Aggregates expenses into twelve month rows with one total per schedule
//! category. Matching is exact string equality on both `month` and
//! `category`: "06" is not month "6", and " 기타" is not "기타".

use std::io::Write;

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::config::AggregationMode;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, BudgetSchedule, ExpenseRecord, MonthlySummary};

/// Month labels in row order
pub const MONTHS: [&str; 12] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Build the twelve monthly rows from a list of records
///
/// Always returns exactly twelve rows, months "1" through "12", with one
/// category entry per schedule category in schedule order. Records whose
/// month is not one of those labels count nowhere. Records with an unknown
/// category count toward `unrecognized` and `total` only in
/// `AggregationMode::Inclusive`.
pub fn aggregate(
    records: &[ExpenseRecord],
    schedule: &BudgetSchedule,
    mode: AggregationMode,
) -> Vec<MonthlySummary> {
    let mut rows: Vec<MonthlySummary> = MONTHS
        .iter()
        .map(|month| MonthlySummary::empty(*month, schedule))
        .collect();

    for record in records {
        let Some(month_idx) = month_index(&record.month) else {
            continue;
        };
        let row = &mut rows[month_idx];

        match schedule.position(&record.category) {
            Some(cat_idx) => row.categories[cat_idx].amount += record.amount,
            None => match mode {
                AggregationMode::Strict => continue,
                AggregationMode::Inclusive => row.unrecognized += record.amount,
            },
        }

        row.total += record.amount;
    }

    rows
}

/// Row index for an exact month label
fn month_index(month: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == month)
}

/// Whether a record contributes to any summary row
pub fn is_counted(record: &ExpenseRecord, schedule: &BudgetSchedule, mode: AggregationMode) -> bool {
    if month_index(&record.month).is_none() {
        return false;
    }
    match mode {
        AggregationMode::Strict => schedule.contains(&record.category),
        AggregationMode::Inclusive => true,
    }
}

/// Monthly Summary Report
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Policy the rows were built with
    pub mode: AggregationMode,
    /// Twelve rows, months "1" through "12"
    pub rows: Vec<MonthlySummary>,
    /// Per-category totals across all months, in schedule order
    pub category_totals: Vec<(String, Amount)>,
    /// Sum of every row total
    pub year_total: Amount,
    /// Number of records in the store
    pub record_count: usize,
    /// Records that contribute to no row
    pub excluded_count: usize,
}

impl MonthlyReport {
    /// Generate the report from the full record list
    pub fn generate(
        records: &[ExpenseRecord],
        schedule: &BudgetSchedule,
        mode: AggregationMode,
    ) -> Self {
        let rows = aggregate(records, schedule, mode);

        let category_totals = schedule
            .categories()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let sum = rows.iter().map(|r| r.categories[i].amount).sum();
                (c.name.clone(), sum)
            })
            .collect();

        let year_total = rows.iter().map(|r| r.total).sum();
        let excluded_count = records
            .iter()
            .filter(|r| !is_counted(r, schedule, mode))
            .count();

        Self {
            mode,
            rows,
            category_totals,
            year_total,
            record_count: records.len(),
            excluded_count,
        }
    }

    /// Year total of the unrecognized bucket
    pub fn unrecognized_total(&self) -> Amount {
        self.rows.iter().map(|r| r.unrecognized).sum()
    }

    fn show_unrecognized(&self) -> bool {
        self.mode == AggregationMode::Inclusive
    }

    /// Format the report for terminal display
    ///
    /// Cells over their monthly ceiling are suffixed with `!`.
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut builder = Builder::default();

        let mut header = vec!["Month".to_string()];
        header.extend(self.category_totals.iter().map(|(name, _)| name.clone()));
        if self.show_unrecognized() {
            header.push("Unrecognized".to_string());
        }
        header.push("Total".to_string());
        builder.push_record(header);

        for row in &self.rows {
            let mut cells = vec![row.month.clone()];
            for cat in &row.categories {
                let marker = if cat.is_over_budget() { "!" } else { "" };
                cells.push(format!("{}{}", cat.amount, marker));
            }
            if self.show_unrecognized() {
                cells.push(row.unrecognized.to_string());
            }
            cells.push(row.total.to_string());
            builder.push_record(cells);
        }

        let mut footer = vec!["Year".to_string()];
        footer.extend(self.category_totals.iter().map(|(_, sum)| sum.to_string()));
        if self.show_unrecognized() {
            footer.push(self.unrecognized_total().to_string());
        }
        footer.push(self.year_total.to_string());
        builder.push_record(footer);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

        let mut output = String::new();
        output.push_str(&format!(
            "Monthly Summary ({} mode)\n",
            self.mode
        ));
        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!(
            "Year total: {}  ({} records",
            self.year_total.format_with_symbol(currency_symbol),
            self.record_count
        ));
        if self.excluded_count > 0 {
            output.push_str(&format!(", {} not counted", self.excluded_count));
        }
        output.push_str(")\n");

        let over: Vec<String> = self
            .rows
            .iter()
            .flat_map(|row| {
                row.over_budget().map(move |c| {
                    format!(
                        "  month {}: {} {} over {}",
                        row.month,
                        c.category,
                        c.amount.format_with_symbol(currency_symbol),
                        c.ceiling.format_with_symbol(currency_symbol)
                    )
                })
            })
            .collect();
        if !over.is_empty() {
            output.push_str("Over budget:\n");
            for line in over {
                output.push_str(&line);
                output.push('\n');
            }
        }

        output
    }

    /// Export the rows to CSV, one line per month
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = vec!["month".to_string()];
        header.extend(self.category_totals.iter().map(|(name, _)| name.clone()));
        if self.show_unrecognized() {
            header.push("unrecognized".to_string());
        }
        header.push("total".to_string());
        csv_writer
            .write_record(&header)
            .map_err(|e| BudgetError::Export(e.to_string()))?;

        for row in &self.rows {
            let mut cells = vec![row.month.clone()];
            cells.extend(row.categories.iter().map(|c| c.amount.units().to_string()));
            if self.show_unrecognized() {
                cells.push(row.unrecognized.units().to_string());
            }
            cells.push(row.total.units().to_string());
            csv_writer
                .write_record(&cells)
                .map_err(|e| BudgetError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| BudgetError::Export(e.to_string()))?;
        Ok(())
    }
}
