use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::ValidationError;

/// Note text used when an expense is recorded without one.
pub const NOTE_PLACEHOLDER: &str = "No notes";

/// The fixed expense categories. Stored as TEXT using the
/// variant name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, sqlx::Type,
)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Utilities,
    Entertainment,
    #[default]
    Others,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Utilities,
        Category::Entertainment,
        Category::Others,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "transport" => Ok(Category::Transport),
            "shopping" => Ok(Category::Shopping),
            "utilities" => Ok(Category::Utilities),
            "entertainment" => Ok(Category::Entertainment),
            "others" => Ok(Category::Others),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ExpenseFilter {
    pub id: Option<u32>,
    pub account_id: Option<u32>,
    pub category: Option<Category>,
    pub date_after: Option<NaiveDate>,
    pub date_before: Option<NaiveDate>,
}

/// A single dated, categorized monetary entry owned by one account.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Expense {
    pub id: u32,
    pub account_id: u32,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    pub note: String,
}
