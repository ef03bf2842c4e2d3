//! CLI commands for recording and listing expenses

use clap::Args;

use crate::display::format_expense_list;
use crate::error::BudgetResult;
use crate::models::{BudgetSchedule, ExpenseDraft};
use crate::reports::monthly::MONTHS;
use crate::storage::Storage;

/// Fields of the add-expense form
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Date of the expense, free text (e.g. 2025-06-10)
    #[arg(short, long, default_value = "")]
    pub date: String,

    /// Category label (e.g. 식비/생활비)
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Amount in whole currency units; decimals are truncated
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,

    /// Month number, 1 to 12
    #[arg(short, long, default_value = "")]
    pub month: String,
}

impl From<AddArgs> for ExpenseDraft {
    fn from(args: AddArgs) -> Self {
        ExpenseDraft::new(args.date, args.category, args.amount, args.month)
    }
}

/// Handle `budget add`
pub fn handle_add_command(
    storage: &mut Storage,
    schedule: &BudgetSchedule,
    args: AddArgs,
) -> BudgetResult<()> {
    let draft = ExpenseDraft::from(args);
    let record = storage.expenses.append(&draft)?;

    println!("Added: {}", record);

    if !schedule.contains(&record.category) {
        println!(
            "Note: '{}' is not a budget category; strict summaries will leave it out.",
            record.category
        );
    }
    if !MONTHS.contains(&record.month.as_str()) {
        println!(
            "Note: month '{}' is not 1-12; it will not appear in any monthly summary.",
            record.month
        );
    }

    Ok(())
}

/// Handle `budget list`
pub fn handle_list_command(
    storage: &Storage,
    schedule: &BudgetSchedule,
    month: Option<String>,
) -> BudgetResult<()> {
    let records: Vec<_> = storage
        .expenses
        .all()
        .iter()
        .filter(|r| month.as_deref().map_or(true, |m| r.month == m))
        .cloned()
        .collect();

    print!("{}", format_expense_list(&records, schedule));
    Ok(())
}
