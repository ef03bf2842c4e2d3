//! Monthly summary rows
//!
//! Derived values only; summaries are rebuilt from the store on every report
//! and never persisted.

use serde::Serialize;

use super::amount::Amount;
use super::schedule::BudgetSchedule;

/// Spending for one category in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Amount,
    /// Monthly ceiling from the schedule
    pub ceiling: Amount,
}

impl CategoryTotal {
    /// Spending went past the ceiling
    pub fn is_over_budget(&self) -> bool {
        self.amount > self.ceiling
    }
}

/// Per-category totals for a single month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// Month label, "1" through "12"
    pub month: String,
    /// One entry per schedule category, in schedule order
    pub categories: Vec<CategoryTotal>,
    /// Spending in this month under labels the schedule does not know
    pub unrecognized: Amount,
    /// Sum of every category total plus `unrecognized`
    pub total: Amount,
}

impl MonthlySummary {
    /// An all-zero row for `month`
    pub fn empty(month: impl Into<String>, schedule: &BudgetSchedule) -> Self {
        Self {
            month: month.into(),
            categories: schedule
                .categories()
                .iter()
                .map(|c| CategoryTotal {
                    category: c.name.clone(),
                    amount: Amount::zero(),
                    ceiling: c.ceiling,
                })
                .collect(),
            unrecognized: Amount::zero(),
            total: Amount::zero(),
        }
    }

    /// Total for one category label
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
    }

    /// Categories whose spending exceeds their ceiling
    pub fn over_budget(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.categories.iter().filter(|c| c.is_over_budget())
    }

    /// No spending recorded for this month
    pub fn is_empty(&self) -> bool {
        self.total.is_zero() && self.categories.iter().all(|c| c.amount.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_row_has_every_category() {
        let schedule = BudgetSchedule::default();
        let row = MonthlySummary::empty("4", &schedule);
        assert_eq!(row.month, "4");
        assert_eq!(row.categories.len(), 7);
        assert!(row.is_empty());
        assert_eq!(row.get("교통비"), Some(Amount::zero()));
        assert_eq!(row.get("unknown"), None);
    }

    #[test]
    fn test_over_budget() {
        let schedule = BudgetSchedule::new([("a", 100), ("b", 100)]);
        let mut row = MonthlySummary::empty("1", &schedule);
        row.categories[0].amount = Amount::new(101);
        row.categories[1].amount = Amount::new(100);

        let over: Vec<_> = row.over_budget().map(|c| c.category.as_str()).collect();
        assert_eq!(over, vec!["a"]);
    }
}
