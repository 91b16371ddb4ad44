use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection as SqlConnection,
};
use tokio::sync::{Mutex, MutexGuard};

use crate::schema;

/// A thread safe connection to the database.
#[derive(Clone)]
pub struct Connection {
    conn: Arc<Mutex<SqliteConnection>>,
}

impl Connection {
    /// Open a connection to the database. The file is created
    /// if it does not exist; the schema is not installed here.
    pub async fn open(filename: &str) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(filename)?
            .create_if_missing(true)
            .foreign_keys(true);
        let conn = SqliteConnection::connect_with(&opts).await?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open a fresh in-memory database with the schema installed.
    pub async fn open_test() -> Self {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        let conn = SqliteConnection::connect_with(&opts).await.unwrap();
        let conn = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        schema::install(&conn).await.unwrap();
        conn
    }

    pub async fn lock(&self) -> MutexGuard<'_, SqliteConnection> {
        self.conn.lock().await
    }
}
