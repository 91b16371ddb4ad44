use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use kassa_data::Expense;

use crate::datetime;

#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unknown grouping {0:?}, expected category, month or week")]
    UnknownGroupBy(String),
}

/// How to bucket expenses for summation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Category,
    Month,
    Week,
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupBy::Category => "category",
            GroupBy::Month => "month",
            GroupBy::Week => "week",
        };
        f.write_str(name)
    }
}

impl FromStr for GroupBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "category" => Ok(GroupBy::Category),
            "month" => Ok(GroupBy::Month),
            "week" => Ok(GroupBy::Week),
            _ => Err(Error::UnknownGroupBy(s.to_string())),
        }
    }
}

/// One group label with its summed amount, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub group: String,
    pub total: f64,
}

/// Round at the point of output only, never on intermediate sums.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bucket a user's expenses by the grouping key and sum the
/// amounts per bucket. Output is sorted by label; callers may
/// re-sort for display. Records the store should never have
/// produced (negative or non-finite amounts) are skipped rather
/// than crashing the dashboard.
pub fn group_and_sum(expenses: &[Expense], group_by: GroupBy) -> Vec<GroupTotal> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();

    for expense in expenses {
        if !expense.amount.is_finite() || expense.amount < 0.0 {
            continue;
        }
        let key = match group_by {
            GroupBy::Category => expense.category.to_string(),
            GroupBy::Month => datetime::month_key(expense.date),
            GroupBy::Week => datetime::iso_week_key(expense.date),
        };
        *totals.entry(key).or_insert(0.0) += expense.amount;
    }

    totals
        .into_iter()
        .map(|(group, total)| GroupTotal {
            group,
            total: round2(total),
        })
        .collect()
}
