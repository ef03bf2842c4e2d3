//! Budget schedule
//!
//! The fixed, ordered list of expense categories and their monthly ceilings.
//! Order matters: it is the column order of summaries and the stacking order
//! of the chart.

use super::amount::Amount;

/// Default categories and monthly ceilings, in display order
const DEFAULT_CATEGORIES: [(&str, i64); 7] = [
    ("적금", 700_000),
    ("월세+관리비", 500_000),
    ("핸드폰 요금", 50_000),
    ("교통비", 100_000),
    ("데이트/여가", 400_000),
    ("식비/생활비", 500_000),
    ("기타", 150_000),
];

/// A category with its monthly ceiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetCategory {
    pub name: String,
    pub ceiling: Amount,
}

/// Ordered mapping of category label to monthly ceiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSchedule {
    categories: Vec<BudgetCategory>,
}

impl BudgetSchedule {
    /// Build a schedule from `(label, ceiling)` pairs
    ///
    /// A label that appears twice keeps its first position and ceiling.
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (S, i64)>) -> Self {
        let mut categories: Vec<BudgetCategory> = Vec::new();
        for (name, ceiling) in entries {
            let name = name.into();
            if categories.iter().any(|c| c.name == name) {
                continue;
            }
            categories.push(BudgetCategory {
                name,
                ceiling: Amount::new(ceiling),
            });
        }
        Self { categories }
    }

    /// Categories in schedule order
    pub fn categories(&self) -> &[BudgetCategory] {
        &self.categories
    }

    /// Category labels in schedule order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Index of a label, by exact match
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    /// Check if a label is part of the schedule
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Monthly ceiling for a label
    pub fn ceiling(&self, name: &str) -> Option<Amount> {
        self.position(name).map(|i| self.categories[i].ceiling)
    }

    /// Sum of all monthly ceilings
    pub fn total_ceiling(&self) -> Amount {
        self.categories.iter().map(|c| c.ceiling).sum()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for BudgetSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_order() {
        let schedule = BudgetSchedule::default();
        let names: Vec<_> = schedule.names().collect();
        assert_eq!(
            names,
            vec![
                "적금",
                "월세+관리비",
                "핸드폰 요금",
                "교통비",
                "데이트/여가",
                "식비/생활비",
                "기타"
            ]
        );
    }

    #[test]
    fn test_ceiling_lookup() {
        let schedule = BudgetSchedule::default();
        assert_eq!(schedule.ceiling("교통비"), Some(Amount::new(100_000)));
        assert_eq!(schedule.ceiling("groceries"), None);
        assert_eq!(schedule.total_ceiling(), Amount::new(2_400_000));
    }

    #[test]
    fn test_exact_match_only() {
        let schedule = BudgetSchedule::default();
        assert!(schedule.contains("기타"));
        assert!(!schedule.contains(" 기타"));
    }

    #[test]
    fn test_duplicate_labels_keep_first() {
        let schedule = BudgetSchedule::new([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.ceiling("a"), Some(Amount::new(1)));
    }
}
