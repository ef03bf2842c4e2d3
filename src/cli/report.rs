//! CLI commands for monthly summaries and the spending chart

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::{AggregationMode, Settings};
use crate::display::render_stacked_chart;
use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetSchedule;
use crate::reports::MonthlyReport;
use crate::storage::Storage;

/// Handle `budget summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    schedule: &BudgetSchedule,
    mode: Option<AggregationMode>,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    let mode = mode.unwrap_or(settings.aggregation);
    let report = MonthlyReport::generate(storage.expenses.all(), schedule, mode);

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("Monthly summary exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}

/// Handle `budget chart`
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    schedule: &BudgetSchedule,
    mode: Option<AggregationMode>,
    width: Option<usize>,
) -> BudgetResult<()> {
    let mode = mode.unwrap_or(settings.aggregation);
    let report = MonthlyReport::generate(storage.expenses.all(), schedule, mode);
    let width = width.unwrap_or(settings.chart_width);

    println!("Monthly spending ({} mode)", mode);
    println!();
    print!(
        "{}",
        render_stacked_chart(&report.rows, schedule, width, &settings.currency_symbol)
    );

    Ok(())
}
