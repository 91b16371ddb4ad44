use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    passwords,
    Expense,
    ExpenseFilter,
    Query,
};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AccountFilter {
    pub id: Option<u32>,
    pub username: Option<String>,
}

/// Key for account lookups: either the rowid or the unique,
/// case-sensitive username.
#[derive(Debug, Clone)]
pub enum AccountKey {
    Id(u32),
    Username(String),
}

/// A registered user able to own expense records. Created at
/// registration, read at login and session restore, never updated
/// or deleted.
#[derive(Debug, Clone, Default, FromRow, Serialize, Deserialize)]
pub struct Account {
    pub id: u32,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl Account {
    /// Create a new account with a freshly hashed password.
    /// The id is assigned by the store on insert.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            id: 0,
            username: username.to_string(),
            password_hash: passwords::hash_password(password),
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn verify_password(&self, password: &str) -> bool {
        passwords::verify_password(&self.password_hash, password)
    }

    /// Get all expenses owned by this account.
    pub async fn get_expenses<DB>(&self, db: &DB) -> Result<Vec<Expense>>
    where
        DB: Query<Expense, Filter = ExpenseFilter>,
    {
        let expenses = db
            .query(&ExpenseFilter {
                account_id: Some(self.id),
                ..Default::default()
            })
            .await?;
        Ok(expenses)
    }
}
