use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kassa_data::Expense;

use crate::datetime;
use crate::summary::round2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// The whole-account aggregates shown on first load. Field names
/// are the contract consumed by rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_expenses: f64,
    pub month_expenses: f64,
    pub week_expenses: f64,
    pub total_records: usize,
    pub category_breakdown: Vec<CategoryTotal>,
}

/// Compute dashboard statistics over a user's full expense list.
/// `today` is the reference date for the current month and ISO
/// week; production callers pass `datetime::today()`, tests pin it.
/// Empty input yields all zeroes, never an error.
pub fn compute(expenses: &[Expense], today: NaiveDate) -> DashboardStats {
    let this_month = datetime::month_key(today);
    let this_week = datetime::iso_week_key(today);

    let mut total = 0.0;
    let mut month = 0.0;
    let mut week = 0.0;
    let mut records = 0;
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();

    for expense in expenses {
        if !expense.amount.is_finite() || expense.amount < 0.0 {
            continue;
        }
        records += 1;
        total += expense.amount;
        if datetime::month_key(expense.date) == this_month {
            month += expense.amount;
        }
        if datetime::iso_week_key(expense.date) == this_week {
            week += expense.amount;
        }
        *by_category
            .entry(expense.category.to_string())
            .or_insert(0.0) += expense.amount;
    }

    // Descending by amount, ties by category name. The BTreeMap
    // iterates name-ascending and the sort is stable, but the
    // tie break is spelled out anyway.
    let mut breakdown: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category,
            total: round2(total),
        })
        .collect();
    breakdown.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    DashboardStats {
        total_expenses: round2(total),
        month_expenses: round2(month),
        week_expenses: round2(week),
        total_records: records,
        category_breakdown: breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{group_and_sum, GroupBy};
    use kassa_data::{Account, Category, Insert};
    use kassa_db::Connection;

    fn expense(amount: f64, category: Category, date: &str) -> Expense {
        Expense {
            amount,
            category,
            date: date.parse().unwrap(),
            ..Default::default()
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_input_yields_zeroes() {
        let stats = compute(&[], date("2024-03-14"));
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_totals_and_period_restriction() {
        let expenses = vec![
            // Reference date 2024-03-14 is in 2024-03 / 2024-W11.
            expense(10.0, Category::Food, "2024-03-11"),
            expense(20.0, Category::Transport, "2024-03-01"),
            expense(40.0, Category::Food, "2024-02-20"),
        ];
        let stats = compute(&expenses, date("2024-03-14"));

        assert_eq!(stats.total_expenses, 70.0);
        assert_eq!(stats.month_expenses, 30.0);
        assert_eq!(stats.week_expenses, 10.0);
        assert_eq!(stats.total_records, 3);
    }

    #[test]
    fn test_breakdown_descending_with_name_tiebreak() {
        let expenses = vec![
            expense(5.0, Category::Transport, "2024-03-11"),
            expense(5.0, Category::Food, "2024-03-11"),
            expense(30.0, Category::Shopping, "2024-03-11"),
        ];
        let stats = compute(&expenses, date("2024-03-14"));

        let names: Vec<&str> = stats
            .category_breakdown
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        // Shopping first, then the 5.0 tie in name order.
        assert_eq!(names, vec!["Shopping", "Food", "Transport"]);
    }

    #[test]
    fn test_group_totals_sum_to_dashboard_total() {
        let expenses = vec![
            expense(10.10, Category::Food, "2024-01-15"),
            expense(20.25, Category::Food, "2024-02-20"),
            expense(5.99, Category::Transport, "2024-03-11"),
            expense(0.333, Category::Others, "2024-03-12"),
        ];
        let stats = compute(&expenses, date("2024-03-14"));

        for group_by in [GroupBy::Category, GroupBy::Month, GroupBy::Week] {
            let grouped: f64 = group_and_sum(&expenses, group_by)
                .iter()
                .map(|g| g.total)
                .sum();
            assert!(
                (grouped - stats.total_expenses).abs() < 0.01,
                "{} groups sum to {}, dashboard total is {}",
                group_by,
                grouped,
                stats.total_expenses
            );
        }
    }

    #[test]
    fn test_dirty_records_do_not_crash_or_count() {
        let expenses = vec![
            expense(10.0, Category::Food, "2024-03-11"),
            expense(f64::INFINITY, Category::Food, "2024-03-11"),
            expense(-1.0, Category::Food, "2024-03-11"),
        ];
        let stats = compute(&expenses, date("2024-03-14"));
        assert_eq!(stats.total_expenses, 10.0);
        assert_eq!(stats.total_records, 1);
    }

    #[tokio::test]
    async fn test_stats_over_stored_expenses() {
        let db = Connection::open_test().await;
        let account = db.insert(Account::new("alice", "secret")).await.unwrap();

        for (amount, category, day) in [
            (12.5, Category::Food, "2024-03-11"),
            (7.5, Category::Food, "2024-03-12"),
            (30.0, Category::Utilities, "2024-02-01"),
        ] {
            db.insert(Expense {
                account_id: account.id,
                ..expense(amount, category, day)
            })
            .await
            .unwrap();
        }

        let expenses = account.get_expenses(&db).await.unwrap();
        let stats = compute(&expenses, date("2024-03-14"));

        assert_eq!(stats.total_expenses, 50.0);
        assert_eq!(stats.month_expenses, 20.0);
        assert_eq!(stats.week_expenses, 20.0);
        assert_eq!(stats.total_records, 3);
        assert_eq!(
            stats.category_breakdown,
            vec![
                CategoryTotal { category: "Utilities".to_string(), total: 30.0 },
                CategoryTotal { category: "Food".to_string(), total: 20.0 },
            ]
        );
    }
}
