use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use kassa_data::{
    Delete,
    Expense,
    ExpenseFilter,
    Insert,
    Query,
    Retrieve,
    Update,
};

use crate::{
    results::{Id, QueryError},
    Connection,
};

#[async_trait]
impl Query<Expense> for Connection {
    type Filter = ExpenseFilter;

    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Expense>> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                id,
                account_id,
                ROUND(amount, 10) AS amount,
                category,
                date,
                note
            FROM expenses
            WHERE 1
            "#,
        );

        if let Some(id) = filter.id {
            qry.push(" AND id = ").push_bind(id);
        }
        if let Some(account_id) = filter.account_id {
            qry.push(" AND account_id = ").push_bind(account_id);
        }
        if let Some(category) = filter.category {
            qry.push(" AND category = ").push_bind(category);
        }
        if let Some(date_after) = filter.date_after {
            qry.push(" AND date >= ").push_bind(date_after);
        }
        if let Some(date_before) = filter.date_before {
            qry.push(" AND date <= ").push_bind(date_before);
        }

        let expenses: Vec<Expense> =
            qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(expenses)
    }
}

#[async_trait]
impl Retrieve<Expense> for Connection {
    /// (expense id, owning account id). A lookup with the wrong
    /// owner yields `None`, same as a missing row.
    type Key = (u32, u32);

    async fn retrieve(&self, key: Self::Key) -> Result<Option<Expense>> {
        let (id, account_id) = key;
        let filter = ExpenseFilter {
            id: Some(id),
            account_id: Some(account_id),
            ..Default::default()
        };
        Ok(self.query(&filter).await?.pop())
    }
}

#[async_trait]
impl Insert<Expense> for Connection {
    async fn insert(&self, expense: Expense) -> Result<Expense> {
        let insert: Id<u32> = {
            let mut conn = self.lock().await;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT INTO expenses (
                    account_id,
                    amount,
                    category,
                    date,
                    note
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(expense.account_id)
                .push_bind(expense.amount)
                .push_bind(expense.category)
                .push_bind(expense.date)
                .push_bind(&expense.note);

            qry.push(") RETURNING id ")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        let expense = self
            .retrieve((insert.id, expense.account_id))
            .await?
            .ok_or(QueryError::NotFound)?;
        Ok(expense)
    }
}

#[async_trait]
impl Update<Expense> for Connection {
    /// Update an expense in place, scoped to its owner. Returns
    /// `None` when no row matches id and owner.
    async fn update(&self, expense: Expense) -> Result<Option<Expense>> {
        let affected = {
            let mut conn = self.lock().await;
            QueryBuilder::<Sqlite>::new("UPDATE expenses SET")
                .push(" amount = ")
                .push_bind(expense.amount)
                .push(", category = ")
                .push_bind(expense.category)
                .push(", date = ")
                .push_bind(expense.date)
                .push(", note = ")
                .push_bind(&expense.note)
                .push(" WHERE id = ")
                .push_bind(expense.id)
                .push(" AND account_id = ")
                .push_bind(expense.account_id)
                .build()
                .execute(&mut *conn)
                .await?
                .rows_affected()
        };
        if affected == 0 {
            return Ok(None);
        }
        self.retrieve((expense.id, expense.account_id)).await
    }
}

#[async_trait]
impl Delete<Expense> for Connection {
    /// Delete an expense, scoped to its owner.
    async fn delete(&self, expense: Expense) -> Result<bool> {
        let mut conn = self.lock().await;
        let affected = QueryBuilder::<Sqlite>::new("DELETE FROM expenses WHERE id = ")
            .push_bind(expense.id)
            .push(" AND account_id = ")
            .push_bind(expense.account_id)
            .build()
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use kassa_data::{Account, Category};

    async fn test_account(db: &Connection, username: &str) -> Account {
        db.insert(Account::new(username, "secret")).await.unwrap()
    }

    fn expense(account_id: u32, amount: f64, category: Category) -> Expense {
        Expense {
            account_id,
            amount,
            category,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            note: "No notes".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_expense_insert_roundtrip() {
        let db = Connection::open_test().await;
        let account = test_account(&db, "alice").await;

        let inserted = db
            .insert(Expense {
                note: "groceries".to_string(),
                ..expense(account.id, 12.5, Category::Food)
            })
            .await
            .unwrap();
        assert!(inserted.id > 0);

        let fetched: Expense = db
            .retrieve((inserted.id, account.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.amount, 12.5);
        assert_eq!(fetched.category, Category::Food);
        assert_eq!(fetched.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(fetched.note, "groceries");
    }

    #[tokio::test]
    async fn test_expense_not_visible_to_other_owner() {
        let db = Connection::open_test().await;
        let alice = test_account(&db, "alice").await;
        let bob = test_account(&db, "bob").await;

        let inserted = db
            .insert(expense(alice.id, 12.5, Category::Food))
            .await
            .unwrap();

        // Same id, wrong owner: absent, not an error.
        let fetched: Option<Expense> = db.retrieve((inserted.id, bob.id)).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_expense_query_scoped_to_account() {
        let db = Connection::open_test().await;
        let alice = test_account(&db, "alice").await;
        let bob = test_account(&db, "bob").await;

        db.insert(expense(alice.id, 10.0, Category::Food)).await.unwrap();
        db.insert(expense(alice.id, 20.0, Category::Transport)).await.unwrap();
        db.insert(expense(bob.id, 30.0, Category::Food)).await.unwrap();

        let expenses = alice.get_expenses(&db).await.unwrap();
        assert_eq!(expenses.len(), 2);
        assert!(expenses.iter().all(|e| e.account_id == alice.id));
    }

    #[tokio::test]
    async fn test_expense_query_by_category_and_date() {
        let db = Connection::open_test().await;
        let alice = test_account(&db, "alice").await;

        db.insert(expense(alice.id, 10.0, Category::Food)).await.unwrap();
        db.insert(Expense {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            ..expense(alice.id, 20.0, Category::Food)
        })
        .await
        .unwrap();
        db.insert(expense(alice.id, 30.0, Category::Transport)).await.unwrap();

        let expenses: Vec<Expense> = db
            .query(&ExpenseFilter {
                account_id: Some(alice.id),
                category: Some(Category::Food),
                date_before: Some(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, 10.0);
    }

    #[tokio::test]
    async fn test_expense_update_scoped_to_owner() {
        let db = Connection::open_test().await;
        let alice = test_account(&db, "alice").await;
        let bob = test_account(&db, "bob").await;

        let inserted = db
            .insert(expense(alice.id, 10.0, Category::Food))
            .await
            .unwrap();

        let updated = db
            .update(Expense {
                amount: 15.0,
                category: Category::Shopping,
                note: "updated".to_string(),
                ..inserted.clone()
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.amount, 15.0);
        assert_eq!(updated.category, Category::Shopping);
        assert_eq!(updated.note, "updated");

        // Update through the wrong owner touches nothing.
        let foreign = db
            .update(Expense {
                account_id: bob.id,
                amount: 999.0,
                ..inserted.clone()
            })
            .await
            .unwrap();
        assert!(foreign.is_none());

        let fetched: Expense = db
            .retrieve((inserted.id, alice.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.amount, 15.0);
    }

    #[tokio::test]
    async fn test_expense_delete_scoped_to_owner() {
        let db = Connection::open_test().await;
        let alice = test_account(&db, "alice").await;
        let bob = test_account(&db, "bob").await;

        let inserted = db
            .insert(expense(alice.id, 10.0, Category::Food))
            .await
            .unwrap();

        let deleted = db
            .delete(Expense {
                account_id: bob.id,
                ..inserted.clone()
            })
            .await
            .unwrap();
        assert!(!deleted);

        let deleted = db.delete(inserted.clone()).await.unwrap();
        assert!(deleted);

        let fetched: Option<Expense> = db.retrieve((inserted.id, alice.id)).await.unwrap();
        assert!(fetched.is_none());
    }
}
