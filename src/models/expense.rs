//! Expense record and draft models
//!
//! An `ExpenseDraft` holds the raw text of the add-expense form. Validating it
//! yields an `ExpenseRecord`, the value that is stored and aggregated.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use crate::error::ValidationError;

/// One recorded spending event
///
/// `date`, `category` and `month` are free-form text. They are never parsed;
/// aggregation matches `category` and `month` by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Date as typed by the user (may be empty)
    #[serde(default)]
    pub date: String,

    /// Category label, expected to be one of the schedule's labels
    pub category: String,

    /// Amount in whole currency units
    pub amount: Amount,

    /// Month label, expected to be "1" through "12"
    pub month: String,
}

impl ExpenseRecord {
    /// Create a record from already-validated values, amount in whole units
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: i64,
        month: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: Amount::new(amount),
            month: month.into(),
        }
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (month {})",
            if self.date.is_empty() { "-" } else { self.date.as_str() },
            self.category,
            self.amount,
            self.month
        )
    }
}

/// Unvalidated form input for one expense
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub month: String,
}

impl ExpenseDraft {
    /// Create a draft from the four form fields
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        month: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            month: month.into(),
        }
    }

    /// Check required fields and convert the amount
    ///
    /// Category, amount and month must be non-blank; date is optional. The
    /// amount keeps only its leading integer. Text fields are kept as typed.
    pub fn validate(&self) -> Result<ExpenseRecord, ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if self.amount.trim().is_empty() {
            return Err(ValidationError::MissingField("amount"));
        }
        if self.month.trim().is_empty() {
            return Err(ValidationError::MissingField("month"));
        }

        let amount = Amount::parse_truncating(&self.amount)
            .map_err(|_| ValidationError::InvalidAmount(self.amount.clone()))?;

        Ok(ExpenseRecord {
            date: self.date.clone(),
            category: self.category.clone(),
            amount,
            month: self.month.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_draft() {
        let draft = ExpenseDraft::new("2025-06-10", "식비/생활비", "50000", "6");
        let record = draft.validate().unwrap();
        assert_eq!(record.date, "2025-06-10");
        assert_eq!(record.category, "식비/생활비");
        assert_eq!(record.amount, Amount::new(50000));
        assert_eq!(record.month, "6");
    }

    #[test]
    fn test_validate_truncates_fraction() {
        let draft = ExpenseDraft::new("", "기타", "1500.75", "3");
        assert_eq!(draft.validate().unwrap().amount, Amount::new(1500));
    }

    #[test]
    fn test_date_is_optional() {
        let draft = ExpenseDraft::new("", "교통비", "1250", "1");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let draft = ExpenseDraft::new("", "", "", "");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("category"))
        );

        let draft = ExpenseDraft::new("", "기타", "", "");
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("amount")));

        let draft = ExpenseDraft::new("", "기타", "100", "  ");
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("month")));
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let draft = ExpenseDraft::new("", "기타", "lots", "1");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidAmount("lots".into()))
        );
    }

    #[test]
    fn test_record_json_layout() {
        let record = ExpenseRecord::new("2025-06-12", "교통비", 20000, "6");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2025-06-12","category":"교통비","amount":20000,"month":"6"}"#
        );
    }

    #[test]
    fn test_record_without_date_deserializes() {
        let record: ExpenseRecord =
            serde_json::from_str(r#"{"category":"기타","amount":5,"month":"2"}"#).unwrap();
        assert_eq!(record.date, "");
    }
}
