use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use kassa_data::{
    Account,
    AccountFilter,
    AccountKey,
    Insert,
    Query,
    Retrieve,
};

use crate::{
    results::{Id, QueryError, StoreError},
    Connection,
};

#[async_trait]
impl Query<Account> for Connection {
    type Filter = AccountFilter;

    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Account>> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::new(
            r#"
            SELECT
                id,
                username,
                password_hash,
                created_at
            FROM accounts
            WHERE 1
            "#,
        );

        if let Some(id) = filter.id {
            qry.push(" AND id = ").push_bind(id);
        }
        if let Some(username) = filter.username.clone() {
            // Exact match: usernames are case-sensitive.
            qry.push(" AND username = ").push_bind(username);
        }

        let accounts: Vec<Account> =
            qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(accounts)
    }
}

#[async_trait]
impl Retrieve<Account> for Connection {
    type Key = AccountKey;

    async fn retrieve(&self, key: Self::Key) -> Result<Option<Account>> {
        let filter = match key {
            AccountKey::Id(id) => AccountFilter {
                id: Some(id),
                ..Default::default()
            },
            AccountKey::Username(username) => AccountFilter {
                username: Some(username),
                ..Default::default()
            },
        };
        Ok(self.query(&filter).await?.pop())
    }
}

#[async_trait]
impl Insert<Account> for Connection {
    /// Insert a new account. Fails with `StoreError::DuplicateUsername`
    /// if the username is taken.
    async fn insert(&self, account: Account) -> Result<Account> {
        let existing: Vec<Account> = self
            .query(&AccountFilter {
                username: Some(account.username.clone()),
                ..Default::default()
            })
            .await?;
        if !existing.is_empty() {
            return Err(StoreError::DuplicateUsername(account.username).into());
        }

        let insert: Id<u32> = {
            let mut conn = self.lock().await;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT INTO accounts (
                    username,
                    password_hash,
                    created_at
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(&account.username)
                .push_bind(&account.password_hash)
                .push_bind(account.created_at);

            qry.push(") RETURNING id ")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        let account = self
            .retrieve(AccountKey::Id(insert.id))
            .await?
            .ok_or(QueryError::NotFound)?;
        Ok(account)
    }
}
