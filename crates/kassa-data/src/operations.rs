use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Query<T> {
    type Filter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<T>>;
}

#[async_trait]
pub trait Insert<T> {
    async fn insert(&self, item: T) -> Result<T>;
}

/// Update is scoped to the owning account; `None` means there was
/// no matching row for that owner.
#[async_trait]
pub trait Update<T> {
    async fn update(&self, item: T) -> Result<Option<T>>;
}

/// Absence is ordinary data, not an error. A lookup for a row that
/// belongs to another account yields `None` as well.
#[async_trait]
pub trait Retrieve<T> {
    type Key;
    async fn retrieve(&self, key: Self::Key) -> Result<Option<T>>;
}

#[async_trait]
pub trait Delete<T> {
    async fn delete(&self, item: T) -> Result<bool>;
}
