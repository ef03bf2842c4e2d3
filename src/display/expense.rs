//! Expense display formatting
//!
//! Formats the raw record list and the budget schedule for terminal output.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::models::{BudgetSchedule, ExpenseRecord};

/// Format records as a numbered table in insertion order
///
/// Categories outside the schedule are flagged with `*`.
pub fn format_expense_list(records: &[ExpenseRecord], schedule: &BudgetSchedule) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n\nRun 'budget add --help' to record one.\n".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["#", "Date", "Category", "Amount", "Month"]);

    for (i, record) in records.iter().enumerate() {
        let category = if schedule.contains(&record.category) {
            record.category.clone()
        } else {
            format!("{} *", record.category)
        };
        builder.push_record([
            (i + 1).to_string(),
            record.date.clone(),
            category,
            record.amount.to_string(),
            record.month.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    let mut output = table.to_string();
    output.push('\n');
    if records.iter().any(|r| !schedule.contains(&r.category)) {
        output.push_str("* category not in the budget schedule\n");
    }
    output
}

/// Format the budget schedule with monthly ceilings
pub fn format_schedule(schedule: &BudgetSchedule, currency_symbol: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Category", "Monthly budget"]);

    for category in schedule.categories() {
        builder.push_record([
            category.name.clone(),
            category.ceiling.format_with_symbol(currency_symbol),
        ]);
    }
    builder.push_record([
        "Total".to_string(),
        schedule.total_ceiling().format_with_symbol(currency_symbol),
    ]);

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));
    format!("{}\n", table)
}
