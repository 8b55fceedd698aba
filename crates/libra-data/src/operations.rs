use async_trait::async_trait;

use crate::Result;

#[async_trait]
pub trait Query<T> {
    type Filter: Send + Sync;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<T>>;
}

/// Count the pages a paginated query spans.
#[async_trait]
pub trait Paginate<T> {
    type Filter: Send + Sync;
    async fn pages(&self, filter: &Self::Filter) -> Result<u32>;
}

/// Lookup by key. A missing row is `Ok(None)`, not an error.
#[async_trait]
pub trait Retrieve<T> {
    type Key: Send;
    async fn retrieve(&self, key: Self::Key) -> Result<Option<T>>;
}

/// Aggregate a scope into a single report.
#[async_trait]
pub trait Summarize<T> {
    type Scope: Send + Sync;
    async fn summarize(&self, scope: &Self::Scope) -> Result<T>;
}

#[async_trait]
pub trait Insert<T> {
    async fn insert(&self, item: T) -> Result<T>;
}

#[async_trait]
pub trait Update<T> {
    async fn update(&self, item: T) -> Result<T>;
}

#[async_trait]
pub trait Delete<T> {
    async fn delete(&self, item: T) -> Result<()>;
}
