use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::{Category, Expense, NOTE_PLACEHOLDER};

/// Rejections at the ingestion boundary. Invalid input never
/// reaches the store.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("amount {0:?} is not a number")]
    AmountNotNumeric(String),
    #[error("amount {0} is negative")]
    AmountNegative(f64),
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
    #[error("date {0:?} is not a valid YYYY-MM-DD date")]
    DateInvalid(String),
}

/// Raw expense fields as they arrive from a form or the command
/// line, before any parsing.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub note: Option<String>,
}

impl ExpenseInput {
    /// Parse and validate the raw fields into an expense owned by
    /// the given account. The id is left for the store to assign.
    pub fn validate(self, account_id: u32) -> Result<Expense, ValidationError> {
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::AmountNotNumeric(self.amount.clone()))?;
        if !amount.is_finite() {
            return Err(ValidationError::AmountNotNumeric(self.amount));
        }
        if amount < 0.0 {
            return Err(ValidationError::AmountNegative(amount));
        }

        let category: Category = self.category.parse()?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::DateInvalid(self.date.clone()))?;

        let note = match self.note {
            Some(note) if !note.trim().is_empty() => note,
            _ => NOTE_PLACEHOLDER.to_string(),
        };

        Ok(Expense {
            id: 0,
            account_id,
            amount,
            category,
            date,
            note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(amount: &str, category: &str, date: &str) -> ExpenseInput {
        ExpenseInput {
            amount: amount.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            note: None,
        }
    }

    #[test]
    fn test_validate_ok() {
        let expense = input("12.50", "Food", "2024-03-09").validate(1).unwrap();
        assert_eq!(expense.account_id, 1);
        assert_eq!(expense.amount, 12.50);
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(expense.note, NOTE_PLACEHOLDER);
    }

    #[test]
    fn test_validate_keeps_note() {
        let expense = ExpenseInput {
            note: Some("team lunch".to_string()),
            ..input("30", "Food", "2024-03-09")
        }
        .validate(1)
        .unwrap();
        assert_eq!(expense.note, "team lunch");
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let err = input("-5", "Food", "2024-03-09").validate(1).unwrap_err();
        assert_eq!(err, ValidationError::AmountNegative(-5.0));
    }

    #[test]
    fn test_validate_rejects_non_numeric_amount() {
        let err = input("a lot", "Food", "2024-03-09").validate(1).unwrap_err();
        assert!(matches!(err, ValidationError::AmountNotNumeric(_)));

        let err = input("NaN", "Food", "2024-03-09").validate(1).unwrap_err();
        assert!(matches!(err, ValidationError::AmountNotNumeric(_)));
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let err = input("5", "Food", "09/03/2024").validate(1).unwrap_err();
        assert!(matches!(err, ValidationError::DateInvalid(_)));

        let err = input("5", "Food", "2024-13-40").validate(1).unwrap_err();
        assert!(matches!(err, ValidationError::DateInvalid(_)));
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let err = input("5", "Rent", "2024-03-09").validate(1).unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory("Rent".to_string()));
    }
}
